//! Playback systems.
//!
//! - [`animatedsprite`] – advance sprite cursors and draw sprites in z order
//! - [`time`] – update simulation time and delta

pub mod animatedsprite;
pub mod time;
