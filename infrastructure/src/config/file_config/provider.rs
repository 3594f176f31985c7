//! Advice provider configuration from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};

/// Which advice provider answers queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Fixed per-language advisory after a delay
    #[default]
    Canned,
    /// Remote advice service over HTTP
    Http,
}

/// Raw provider configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    pub kind: ProviderKind,
    /// Simulated processing time of the canned provider
    pub delay_ms: u64,
    /// URL of the remote advice service (http provider)
    pub endpoint: Option<String>,
    /// Per-request timeout of the HTTP client
    pub request_timeout_secs: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::Canned,
            delay_ms: 2000,
            endpoint: None,
            request_timeout_secs: 30,
        }
    }
}
