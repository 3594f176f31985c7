//! Media configuration from TOML (`[media]` section)

use crate::media::DEFAULT_MAX_IMAGE_BYTES;
use serde::{Deserialize, Serialize};

/// Raw media configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMediaConfig {
    /// Largest image accepted for upload
    pub max_image_bytes: usize,
}

impl Default for FileMediaConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}
