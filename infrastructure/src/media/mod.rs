//! Image capture from the local filesystem

pub mod loader;

pub use loader::{DEFAULT_MAX_IMAGE_BYTES, ImageLoadError, ImageLoader, normalize_dropped_path};
