//! Data-driven sprite definitions.
//!
//! Sprites can be described in JSON and spawned into the world without code.
//! Each entry is keyed by name:
//!
//! ```json
//! {
//!   "explosion": {
//!     "image": "assets/sprites.png",
//!     "position": [0, 117],
//!     "size": [39, 39],
//!     "speed": 16,
//!     "frames": 13,
//!     "once": true
//!   },
//!   "walker": {
//!     "image": "assets/sprites.png",
//!     "position": [40, 40],
//!     "size": [80, 39],
//!     "speed": 6,
//!     "frames": [0, 1, 2, 3, 2, 1],
//!     "z": 1
//!   }
//! }
//! ```
//!
//! `frames` is either a frame count or an explicit list of sheet columns.

use std::path::Path;

use bevy_ecs::prelude::*;
use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::animatedsprite::AnimatedSprite;
use crate::components::zindex::ZIndex;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Frames {
    Count(u32),
    Sequence(Vec<u32>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteDef {
    /// Image id; the raylib loader also uses it as the file path.
    pub image: String,
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub speed: f32,
    pub frames: Frames,
    #[serde(default)]
    pub once: bool,
    #[serde(default)]
    pub z: i32,
}

impl SpriteDef {
    pub fn build(&self) -> Result<AnimatedSprite> {
        let [width, height] = self.size;
        let sprite = match &self.frames {
            Frames::Count(count) => AnimatedSprite::new(
                self.image.clone(),
                self.position.into(),
                width,
                height,
                self.speed,
                *count,
            )?,
            Frames::Sequence(sequence) => AnimatedSprite::from_sequence(
                self.image.clone(),
                self.position.into(),
                width,
                height,
                self.speed,
                sequence.clone(),
            )?,
        };
        Ok(sprite.with_play_once(self.once))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpriteDefs {
    pub sprites: FxHashMap<String, SpriteDef>,
}

impl SpriteDefs {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let defs = Self::from_json(&std::fs::read_to_string(path)?)?;
        info!(
            "Loaded {} sprite definitions from {}",
            defs.sprites.len(),
            path.display()
        );
        Ok(defs)
    }

    /// Spawn one entity per definition, in name order.
    ///
    /// Every definition is validated before anything is spawned, so a bad
    /// entry leaves the world untouched.
    pub fn spawn_into(&self, world: &mut World) -> Result<Vec<Entity>> {
        let mut names: Vec<&String> = self.sprites.keys().collect();
        names.sort();

        let mut bundles = Vec::with_capacity(names.len());
        for name in names {
            let def = &self.sprites[name];
            bundles.push((def.build()?, ZIndex(def.z)));
        }

        Ok(bundles
            .into_iter()
            .map(|bundle| world.spawn(bundle).id())
            .collect())
    }
}
