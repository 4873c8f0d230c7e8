//! Error type shared by the sprite component, the image store and the
//! definition loader.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpriteError {
    /// The image id is not registered with the provider.
    #[error("Image not found: {0}")]
    ImageNotFound(String),

    /// A sprite sheet needs at least one frame to cycle through.
    #[error("Invalid frame count: a sprite sheet needs at least one frame")]
    InvalidFrameCount,

    #[error("Sprite definition error: {0}")]
    Definition(String),

    #[error("Failed to load image '{id}': {reason}")]
    ImageLoad { id: String, reason: String },
}

impl From<serde_json::Error> for SpriteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Definition(err.to_string())
    }
}

impl From<std::io::Error> for SpriteError {
    fn from(err: std::io::Error) -> Self {
        Self::Definition(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SpriteError>;
