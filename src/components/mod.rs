//! ECS components for sprite entities.
//!
//! - [`animatedsprite`] – sprite sheet playback state and drawing
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animatedsprite;
pub mod zindex;
