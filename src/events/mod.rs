//! Events raised by the playback systems.
//!
//! - [`animation`] – one-shot animation completion
pub mod animation;
