//! Infrastructure layer for haritha-sahayak
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod media;
pub mod providers;
pub mod voice;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig,
    FileMediaConfig, FileOutputConfig, FileProviderConfig, FileReplConfig, FileSessionConfig,
    FileSubmissionConfig, ProviderKind,
};
pub use media::{DEFAULT_MAX_IMAGE_BYTES, ImageLoadError, ImageLoader, normalize_dropped_path};
#[cfg(feature = "http-provider")]
pub use providers::HttpAdviceProvider;
pub use providers::{CannedAdviceProvider, provider_from_config};
pub use voice::SimulatedTranscriber;
