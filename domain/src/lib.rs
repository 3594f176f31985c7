//! Domain layer for haritha-sahayak
//!
//! This crate contains the core entities and value objects of the
//! agricultural-advice assistant. It has no dependencies on infrastructure
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A session starts when the user picks a [`Language`] and lasts through
//! zero or more query/response cycles. All of its mutable state lives in
//! one [`SessionState`], which enforces:
//!
//! - a submission is accepted only when the text is non-blank or an image
//!   is attached
//! - at most one submission is in flight
//! - "ask another question" clears text, image and response together
//!
//! ## Locale
//!
//! Every user-visible string comes from the static [`LocaleText`] table.

pub mod config;
pub mod core;
pub mod locale;
pub mod query;
pub mod session;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use locale::{
    language::Language,
    text::{LocaleText, TextKey},
};
pub use query::{
    draft::Draft,
    media::{ImageAttachment, MediaError, detect_image_type},
    query::Query,
};
pub use session::{
    response::{AdvisoryResponse, SubmissionFailure},
    state::{SessionError, SessionState, SubmissionPhase, SubmitRejection, Ticket},
};
