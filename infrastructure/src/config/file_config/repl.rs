//! `[repl]` section: interactive query screen

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Spinner while the advice service is working
    pub show_progress: bool,
    /// Where typed questions are remembered; `~/` is expanded.
    /// Unset uses the platform data directory.
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}
