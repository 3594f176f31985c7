//! `[output]` section: how answers are printed

use sahayak_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// How answers are rendered on stdout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `full`, `advice` or `json`; unset means `full`
    pub format: Option<OutputFormat>,
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
