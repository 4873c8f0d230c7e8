//! Drawing seam between sprites and whatever renders them.
//!
//! Sprites never talk to a graphics API directly. They resolve their image
//! through an [`ImageProvider`] and hand a source/destination rectangle pair
//! to a [`DrawSurface`]. Both are passed in by the caller on every draw, so
//! there is no global resource lookup.
//!
//! - [`raylib`] – adapter for raylib draw handles (feature `raylib`)

#[cfg(feature = "raylib")]
pub mod raylib;

use crate::error::Result;

/// 2D point or extent in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, top-left origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Resolves an image id to something a [`DrawSurface`] can blit.
pub trait ImageProvider {
    type Bitmap: ?Sized;

    /// Look up a bitmap. Fails with
    /// [`SpriteError::ImageNotFound`](crate::error::SpriteError::ImageNotFound)
    /// when the id is not registered.
    fn get(&self, id: &str) -> Result<&Self::Bitmap>;
}

/// 2D blit target.
pub trait DrawSurface {
    type Bitmap: ?Sized;

    /// Copy `src` out of `bitmap` into `dst` on this surface.
    fn blit(&mut self, bitmap: &Self::Bitmap, src: Rect, dst: Rect);
}
