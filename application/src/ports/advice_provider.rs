//! Advice Provider port
//!
//! Defines the interface for turning a query into advisory text.

use async_trait::async_trait;
use sahayak_domain::{Query, SubmissionFailure};
use thiserror::Error;

/// Errors that can occur while obtaining advice
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request cancelled")]
    Cancelled,
}

impl ProviderError {
    /// Map to the failure recorded on the session.
    ///
    /// Cancellation is not a failure of the query, so it maps to `None`.
    pub fn to_failure(&self) -> Option<SubmissionFailure> {
        match self {
            ProviderError::Unavailable(msg) => Some(SubmissionFailure::Unavailable(msg.clone())),
            ProviderError::Timeout => Some(SubmissionFailure::Timeout),
            ProviderError::InvalidResponse(msg) => {
                Some(SubmissionFailure::InvalidResponse(msg.clone()))
            }
            ProviderError::Cancelled => None,
        }
    }
}

/// Source of advisory text.
///
/// Callers must treat [`advise`](AdviceProvider::advise) as asynchronous
/// with unbounded latency; timeouts are applied by the caller.
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    /// Short identifier for logs (e.g. `"canned"`, `"http"`)
    fn name(&self) -> &str;

    /// Produce advice for the query, in the query's language.
    async fn advise(&self, query: &Query) -> Result<String, ProviderError>;
}
