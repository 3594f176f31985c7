//! Domain error types

use crate::query::media::MediaError;
use crate::session::state::{SessionError, SubmitRejection};
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),

    #[error(transparent)]
    Media(#[from] MediaError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Rejected(#[from] SubmitRejection),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_language_display() {
        let error = DomainError::InvalidLanguage("tamil".to_string());
        assert_eq!(error.to_string(), "Invalid language: tamil");
    }

    #[test]
    fn test_wrapped_errors_keep_their_message() {
        let rejection = SubmitRejection::InvalidQuery;
        assert_eq!(
            DomainError::from(rejection).to_string(),
            rejection.to_string()
        );
        let stale = SessionError::StaleTicket;
        assert_eq!(DomainError::from(stale).to_string(), stale.to_string());
    }
}
