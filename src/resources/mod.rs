//! Long-lived data shared with the playback systems.
//!
//! - `appconfig` – window and playback settings loaded from INI
//! - `imagestore` – bitmaps keyed by image id, the default image provider
//! - `spritedefs` – JSON sprite definitions and spawning
//! - `worldtime` – simulation time and delta
pub mod appconfig;
pub mod imagestore;
pub mod spritedefs;
pub mod worldtime;
