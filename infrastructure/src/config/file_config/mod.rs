//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod media;
mod output;
mod provider;
mod repl;
mod session;
mod submission;

pub use logging::FileLoggingConfig;
pub use media::FileMediaConfig;
pub use output::FileOutputConfig;
pub use provider::{FileProviderConfig, ProviderKind};
pub use repl::FileReplConfig;
pub use session::FileSessionConfig;
pub use submission::FileSubmissionConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("session.language: unknown language '{0}' (expected english or malayalam)")]
    InvalidLanguage(String),

    #[error("submission.timeout_secs cannot be 0")]
    InvalidTimeout,

    #[error("provider.request_timeout_secs cannot be 0")]
    InvalidRequestTimeout,

    #[error("provider.kind is \"http\" but provider.endpoint is not set")]
    MissingEndpoint,

    #[error("media.max_image_bytes cannot be 0")]
    InvalidImageLimit,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Session defaults
    pub session: FileSessionConfig,
    /// Advice provider selection
    pub provider: FileProviderConfig,
    /// Submission timeout and empty-input feedback
    pub submission: FileSubmissionConfig,
    /// Image upload limits
    pub media: FileMediaConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Log destination
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if let Err(e) = self.session.parse_language() {
            issues.push(e);
        }
        if self.submission.timeout_secs == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if self.provider.request_timeout_secs == 0 {
            issues.push(ConfigValidationError::InvalidRequestTimeout);
        }
        if self.provider.kind == ProviderKind::Http
            && self
                .provider
                .endpoint
                .as_deref()
                .is_none_or(|e| e.trim().is_empty())
        {
            issues.push(ConfigValidationError::MissingEndpoint);
        }
        if self.media.max_image_bytes == 0 {
            issues.push(ConfigValidationError::InvalidImageLimit);
        }

        issues
    }

    /// Validate, resetting every invalid value to its default.
    ///
    /// Returns the issues found so callers can report them.
    pub fn sanitize(&mut self) -> Vec<ConfigValidationError> {
        let issues = self.validate();
        for issue in &issues {
            match issue {
                ConfigValidationError::InvalidLanguage(_) => self.session.language = None,
                ConfigValidationError::InvalidTimeout => {
                    self.submission.timeout_secs = FileSubmissionConfig::default().timeout_secs
                }
                ConfigValidationError::InvalidRequestTimeout => {
                    self.provider.request_timeout_secs =
                        FileProviderConfig::default().request_timeout_secs
                }
                ConfigValidationError::MissingEndpoint => self.provider.kind = ProviderKind::Canned,
                ConfigValidationError::InvalidImageLimit => {
                    self.media.max_image_bytes = FileMediaConfig::default().max_image_bytes
                }
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sahayak_application::EmptyInputPolicy;
    use sahayak_domain::{Language, OutputFormat};
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[session]
language = "malayalam"

[provider]
kind = "http"
endpoint = "http://localhost:8080/advice"
request_timeout_secs = 10

[submission]
timeout_secs = 15
empty_input = "silent"

[media]
max_image_bytes = 2048

[output]
format = "advice"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/haritha-sahayak/history.txt"

[logging]
file = "/tmp/sahayak.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(
            config.session.parse_language().unwrap(),
            Some(Language::Malayalam)
        );
        assert_eq!(config.provider.kind, ProviderKind::Http);
        assert_eq!(
            config.provider.endpoint.as_deref(),
            Some("http://localhost:8080/advice")
        );
        let submission = config.submission.to_submission_config();
        assert_eq!(submission.timeout, Duration::from_secs(15));
        assert_eq!(submission.empty_input, EmptyInputPolicy::Silent);
        assert_eq!(config.media.max_image_bytes, 2048);
        assert_eq!(config.output.format, Some(OutputFormat::Advice));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert_eq!(config.logging.file.as_deref(), Some("/tmp/sahayak.log"));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config_uses_defaults() {
        let config: FileConfig = toml::from_str("[provider]\ndelay_ms = 10\n").unwrap();

        assert_eq!(config.provider.kind, ProviderKind::Canned);
        assert_eq!(config.provider.delay_ms, 10);
        assert_eq!(config.submission.timeout_secs, 30);
        assert!(config.output.color);
        assert!(config.repl.show_progress);
        assert!(config.session.language.is_none());
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.provider.delay_ms, 2000);
    }

    #[test]
    fn test_sanitize_falls_back_to_defaults() {
        let mut config = FileConfig::default();
        config.session.language = Some("tamil".to_string());
        config.submission.timeout_secs = 0;
        config.provider.kind = ProviderKind::Http;
        config.provider.delay_ms = 10;

        let issues = config.sanitize();

        assert_eq!(issues.len(), 3);
        assert!(config.session.language.is_none());
        assert_eq!(config.submission.timeout_secs, 30);
        assert_eq!(config.provider.kind, ProviderKind::Canned);
        // Valid values are kept.
        assert_eq!(config.provider.delay_ms, 10);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let mut config = FileConfig::default();
        config.session.language = Some("tamil".to_string());
        config.submission.timeout_secs = 0;
        config.provider.kind = ProviderKind::Http;
        config.media.max_image_bytes = 0;

        let issues = config.validate();

        assert_eq!(
            issues,
            vec![
                ConfigValidationError::InvalidLanguage("tamil".to_string()),
                ConfigValidationError::InvalidTimeout,
                ConfigValidationError::MissingEndpoint,
                ConfigValidationError::InvalidImageLimit,
            ]
        );
    }
}
