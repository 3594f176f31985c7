//! Image attachment value object and media type detection

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised when a file cannot become an image attachment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    #[error("'{file_name}' is not an image")]
    UnsupportedMedia { file_name: String },

    #[error("'{file_name}' is {size} bytes, limit is {limit}")]
    TooLarge {
        file_name: String,
        size: usize,
        limit: usize,
    },

    #[error("'{file_name}' is empty")]
    Empty { file_name: String },
}

/// Magic-number signatures checked before falling back to the extension.
const SIGNATURES: &[(&[u8], &str)] = &[
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (b"\xff\xd8\xff", "image/jpeg"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"BM", "image/bmp"),
    (b"II*\x00", "image/tiff"),
    (b"MM\x00*", "image/tiff"),
];

/// Image formats recognised by extension only.
const EXTENSIONS: &[(&str, &str)] = &[
    ("svg", "image/svg+xml"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
    ("avif", "image/avif"),
    ("ico", "image/x-icon"),
];

/// Detect an `image/*` media type from file content, then file name.
///
/// Returns `None` for anything that is not recognisably an image.
pub fn detect_image_type(file_name: &str, bytes: &[u8]) -> Option<&'static str> {
    // RIFF....WEBP
    if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some("image/webp");
    }

    if let Some((_, mime)) = SIGNATURES.iter().find(|(sig, _)| bytes.starts_with(sig)) {
        return Some(*mime);
    }

    let ext = file_name.rsplit_once('.')?.1.to_lowercase();
    EXTENSIONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}

/// A single image attached to a query.
///
/// Bytes are shared so a query snapshot can be cloned cheaply while the
/// provider call is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageAttachment {
    file_name: String,
    media_type: &'static str,
    size: usize,
    #[serde(skip)]
    bytes: Arc<[u8]>,
}

impl ImageAttachment {
    /// Build an attachment, rejecting non-images and files over `max_bytes`.
    pub fn from_bytes(
        file_name: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
        max_bytes: usize,
    ) -> Result<Self, MediaError> {
        let file_name = file_name.into();
        let bytes: Arc<[u8]> = bytes.into();

        if bytes.is_empty() {
            return Err(MediaError::Empty { file_name });
        }
        if bytes.len() > max_bytes {
            return Err(MediaError::TooLarge {
                file_name,
                size: bytes.len(),
                limit: max_bytes,
            });
        }
        let media_type = detect_image_type(&file_name, &bytes)
            .ok_or_else(|| MediaError::UnsupportedMedia {
                file_name: file_name.clone(),
            })?;

        Ok(Self {
            file_name,
            media_type,
            size: bytes.len(),
            bytes,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn media_type(&self) -> &'static str {
        self.media_type
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
