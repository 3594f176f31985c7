//! Submission configuration from TOML (`[submission]` section)

use sahayak_application::{EmptyInputPolicy, SubmissionConfig};
use serde::{Deserialize, Serialize};

/// Raw submission configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSubmissionConfig {
    /// Upper bound on one advice request
    pub timeout_secs: u64,
    /// `notify` or `silent`
    pub empty_input: EmptyInputPolicy,
}

impl Default for FileSubmissionConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            empty_input: EmptyInputPolicy::Notify,
        }
    }
}

impl FileSubmissionConfig {
    pub fn to_submission_config(&self) -> SubmissionConfig {
        SubmissionConfig::default()
            .with_timeout_seconds(self.timeout_secs)
            .with_empty_input(self.empty_input)
    }
}
