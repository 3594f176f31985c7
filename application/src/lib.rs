//! Application layer for haritha-sahayak
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{EmptyInputPolicy, SubmissionConfig};
pub use ports::{
    advice_provider::{AdviceProvider, ProviderError},
    image_source::{ImageSource, ImageSourceError},
    progress::{NoProgress, SubmissionProgress},
    voice::{VoiceError, VoiceTranscriber},
};
pub use use_cases::query_session::{
    ImageInputError, QuerySession, SubmitOutcome, VoiceInputError,
};
