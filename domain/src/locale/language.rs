//! Language value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported session language.
///
/// Chosen once on the landing screen and fixed for the lifetime of the
/// session. Switching language means starting a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Malayalam,
}

impl Language {
    /// All supported languages, in landing-screen order.
    pub const ALL: [Language; 2] = [Language::English, Language::Malayalam];

    /// Wire/config identifier (`"english"` / `"malayalam"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Malayalam => "malayalam",
        }
    }

    /// Name of the language written in the language itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Malayalam => "മലയാളം",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" | "1" => Ok(Language::English),
            "malayalam" | "ml" | "2" | "മലയാളം" => Ok(Language::Malayalam),
            other => Err(DomainError::InvalidLanguage(other.to_string())),
        }
    }
}
