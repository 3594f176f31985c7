//! Session configuration from TOML (`[session]` section)

use super::ConfigValidationError;
use sahayak_domain::Language;
use serde::{Deserialize, Serialize};

/// Raw session configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Preselected language; skips the landing screen when set
    pub language: Option<String>,
}

impl FileSessionConfig {
    pub fn parse_language(&self) -> Result<Option<Language>, ConfigValidationError> {
        match &self.language {
            None => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| ConfigValidationError::InvalidLanguage(raw.clone())),
        }
    }
}
