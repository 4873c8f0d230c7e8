//! Image registry keyed by string ids.
//!
//! Generic over the bitmap type so the same store backs raylib textures in
//! the demo and plain tags in tests.

use rustc_hash::FxHashMap;

use crate::error::{Result, SpriteError};
use crate::surface::ImageProvider;

pub struct ImageStore<B> {
    map: FxHashMap<String, B>,
}

impl<B> Default for ImageStore<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> ImageStore<B> {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Register a bitmap, returning the one it replaced.
    pub fn insert(&mut self, id: impl Into<String>, bitmap: B) -> Option<B> {
        self.map.insert(id.into(), bitmap)
    }

    pub fn remove(&mut self, id: &str) -> Option<B> {
        self.map.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.map.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<B> ImageProvider for ImageStore<B> {
    type Bitmap = B;

    fn get(&self, id: &str) -> Result<&B> {
        self.map
            .get(id)
            .ok_or_else(|| SpriteError::ImageNotFound(id.to_string()))
    }
}
