//! Image loader.
//!
//! Reads a file the user pointed at (typed or dropped onto the terminal)
//! and turns it into an [`ImageAttachment`], rejecting anything that is not
//! an image.

use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use sahayak_application::{ImageSource, ImageSourceError};
use sahayak_domain::{ImageAttachment, MediaError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// 10 MiB
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Errors from loading an image file
#[derive(Error, Debug)]
pub enum ImageLoadError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Media(#[from] MediaError),
}

/// Turn a path as pasted or dropped into a terminal into a real path.
///
/// Terminals wrap dropped paths in quotes or escape spaces with `\`.
/// File managers hand over percent-encoded `file://` URLs.
pub fn normalize_dropped_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let unquoted = ['\'', '"']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed);

    if let Some(rest) = unquoted.strip_prefix("file://") {
        return PathBuf::from(percent_decode_str(rest).decode_utf8_lossy().into_owned());
    }
    PathBuf::from(unquoted.replace("\\ ", " "))
}

/// Loads image attachments from disk.
#[derive(Debug, Clone)]
pub struct ImageLoader {
    max_bytes: usize,
}

impl ImageLoader {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Read and validate an image file.
    pub async fn load(&self, path: &Path) -> Result<ImageAttachment, ImageLoadError> {
        let io_err = |source| ImageLoadError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let metadata = tokio::fs::metadata(path).await.map_err(io_err)?;
        if !metadata.is_file() {
            return Err(io_err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        let size = metadata.len() as usize;
        if size > self.max_bytes {
            return Err(MediaError::TooLarge {
                file_name,
                size,
                limit: self.max_bytes,
            }
            .into());
        }

        // The file may have grown since the metadata call.
        let limit = (self.max_bytes as u64).saturating_add(1);
        let file = tokio::fs::File::open(path).await.map_err(io_err)?;
        let mut bytes = Vec::with_capacity(size);
        file.take(limit)
            .read_to_end(&mut bytes)
            .await
            .map_err(io_err)?;
        let image = ImageAttachment::from_bytes(file_name, bytes, self.max_bytes)?;
        debug!(
            "Loaded {} as {} ({} bytes)",
            path.display(),
            image.media_type(),
            image.size()
        );
        Ok(image)
    }
}

impl From<ImageLoadError> for ImageSourceError {
    fn from(error: ImageLoadError) -> Self {
        match error {
            ImageLoadError::Io { path, source } => ImageSourceError::Unreadable {
                path: path.display().to_string(),
                reason: source.to_string(),
            },
            ImageLoadError::Media(e) => ImageSourceError::Media(e),
        }
    }
}

#[async_trait]
impl ImageSource for ImageLoader {
    async fn load(&self, location: &str) -> Result<ImageAttachment, ImageSourceError> {
        let path = normalize_dropped_path(location);
        Ok(ImageLoader::load(self, &path).await?)
    }
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IMAGE_BYTES)
    }
}
