//! Sprite sheet animation playback.
//!
//! This crate exposes the sprite component, the drawing seam, the ECS
//! systems that drive playback, and the resources the demo binary uses, for
//! integration tests and reuse as a library.

pub mod components;
pub mod error;
pub mod events;
pub mod resources;
pub mod surface;
pub mod systems;
