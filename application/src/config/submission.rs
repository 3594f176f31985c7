//! Submission parameters - how [`QuerySession`](crate::use_cases::query_session::QuerySession)
//! drives the advice provider.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What the user sees when submitting with no text and no image.
///
/// The submission is rejected either way; this only controls whether a
/// validation message is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyInputPolicy {
    /// Show a localized validation message (default)
    #[default]
    Notify,
    /// Ignore the submit, as a disabled button would
    Silent,
}

/// Submission control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Upper bound on one advice provider call.
    pub timeout: Duration,
    /// Feedback for rejected empty submissions.
    pub empty_input: EmptyInputPolicy,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            empty_input: EmptyInputPolicy::Notify,
        }
    }
}

impl SubmissionConfig {
    // ==================== Builder Methods ====================

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_timeout_seconds(self, seconds: u64) -> Self {
        self.with_timeout(Duration::from_secs(seconds))
    }

    pub fn with_empty_input(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_input = policy;
        self
    }

    /// Whether rejected empty submissions should be reported to the user.
    pub fn notify_empty_input(&self) -> bool {
        self.empty_input == EmptyInputPolicy::Notify
    }
}
