//! Voice transcription port

use async_trait::async_trait;
use sahayak_domain::Language;
use thiserror::Error;

/// Errors from a voice transcriber
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoiceError {
    #[error("Voice input unavailable: {0}")]
    Unavailable(String),

    #[error("No speech detected")]
    NoSpeech,
}

/// Turns one recording into question text.
#[async_trait]
pub trait VoiceTranscriber: Send + Sync {
    /// Record and transcribe a question spoken in `language`.
    async fn transcribe(&self, language: Language) -> Result<String, VoiceError>;
}
