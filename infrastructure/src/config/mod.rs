//! Configuration file loading for haritha-sahayak
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SAHAYAK_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./sahayak.toml` or `./.sahayak.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/haritha-sahayak/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileMediaConfig, FileOutputConfig,
    FileProviderConfig, FileReplConfig, FileSessionConfig, FileSubmissionConfig, ProviderKind,
};
pub use loader::{ConfigError, ConfigLoader};
