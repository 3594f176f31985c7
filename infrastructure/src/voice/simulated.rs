//! Simulated voice transcriber.
//!
//! There is no microphone capture or speech recognition: a "recording"
//! lasts a fixed time and always yields the same sample question in the
//! session language.

use async_trait::async_trait;
use sahayak_application::{VoiceError, VoiceTranscriber};
use sahayak_domain::Language;
use std::time::Duration;
use tracing::debug;

pub const ENGLISH_SAMPLE: &str = "My banana plants have brown spots on the leaves. What should I do?";
pub const MALAYALAM_SAMPLE: &str = "എന്റെ വാഴയിലെ ഇലകളിൽ തവിട്ട് പാടുകൾ ഉണ്ട്. എന്ത് ചെയ്യണം?";

/// Transcriber returning a fixed sample question per language.
#[derive(Debug, Clone)]
pub struct SimulatedTranscriber {
    recording_time: Duration,
}

impl SimulatedTranscriber {
    pub fn new() -> Self {
        Self {
            recording_time: Duration::from_millis(1500),
        }
    }

    pub fn with_recording_time(mut self, recording_time: Duration) -> Self {
        self.recording_time = recording_time;
        self
    }

    pub fn sample_for(language: Language) -> &'static str {
        match language {
            Language::English => ENGLISH_SAMPLE,
            Language::Malayalam => MALAYALAM_SAMPLE,
        }
    }
}

impl Default for SimulatedTranscriber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VoiceTranscriber for SimulatedTranscriber {
    async fn transcribe(&self, language: Language) -> Result<String, VoiceError> {
        debug!("Simulated recording for {:?}", self.recording_time);
        tokio::time::sleep(self.recording_time).await;
        Ok(Self::sample_for(language).to_string())
    }
}
