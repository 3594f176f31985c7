//! Advisory response and submission failure value objects

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Advice text returned for one query. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisoryResponse {
    text: String,
    received_at: DateTime<Utc>,
}

impl AdvisoryResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            received_at: Utc::now(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }
}

/// Why a submission ended in the `Failed` phase.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SubmissionFailure {
    #[error("Advice provider unavailable: {0}")]
    Unavailable(String),

    #[error("Advice provider timed out")]
    Timeout,

    #[error("Invalid response from advice provider: {0}")]
    InvalidResponse(String),
}
