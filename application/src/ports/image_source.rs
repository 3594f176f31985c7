//! Image capture port

use async_trait::async_trait;
use sahayak_domain::{ImageAttachment, MediaError};
use thiserror::Error;

/// Errors from loading an image the user pointed at
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageSourceError {
    #[error("Could not read {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error(transparent)]
    Media(#[from] MediaError),
}

/// Resolves a user-supplied location (typed or dropped path) into an image.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn load(&self, location: &str) -> Result<ImageAttachment, ImageSourceError>;
}
