//! Canned advice provider.
//!
//! Ignores the query content and answers with a fixed banana leaf-spot
//! advisory in the query's language after a fixed delay.

use async_trait::async_trait;
use sahayak_application::{AdviceProvider, ProviderError};
use sahayak_domain::{Language, Query};
use std::time::Duration;
use tracing::debug;

/// Simulated processing time before the advisory is returned.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

pub const ENGLISH_ADVISORY: &str = "Based on the symptoms you described, your banana plants likely have leaf spot disease. Here's what you should do:\n\n1. Remove affected leaves immediately\n2. Apply copper-based fungicide spray\n3. Ensure proper drainage around plants\n4. Avoid overhead watering\n5. Apply organic compost to boost plant immunity\n\nFor severe cases, contact your local Krishi Bhavan officer.";

pub const MALAYALAM_ADVISORY: &str = "നിങ്ങൾ വിവരിച്ച ലക്ഷണങ്ങളുടെ അടിസ്ഥാനത്തിൽ, നിങ്ങളുടെ വാഴച്ചെടികൾക്ക് ഇല പാട് രോഗം ഉണ്ടാകാം. ചെയ്യേണ്ടത്:\n\n1. ബാധിച്ച ഇലകൾ ഉടനെ നീക്കം ചെയ്യുക\n2. കോപ്പർ അടിസ്ഥാനമാക്കിയ കുമിൾനാശിനി സ്പ്രേ ചെയ്യുക\n3. ചെടികൾക്ക് ചുറ്റും നല്ല ഡ്രെയിനേജ് ഉറപ്പാക്കുക\n4. മുകളിൽ നിന്ന് വെള്ളം ഒഴിക്കുന്നത് ഒഴിവാക്കുക\n5. ചെടിയുടെ പ്രതിരോധശേഷി വർദ്ധിപ്പിക്കാൻ ജൈവ കമ്പോസ്റ്റ് പ്രയോഗിക്കുക\n\nഗുരുതരമായ കേസുകളിൽ, നിങ്ങളുടെ പ്രാദേശിക കൃഷിഭവൻ ഓഫീസറെ ബന്ധപ്പെടുക.";

/// Advice provider that always succeeds with a fixed per-language answer.
#[derive(Debug, Clone)]
pub struct CannedAdviceProvider {
    delay: Duration,
}

impl CannedAdviceProvider {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The fixed advisory for a language.
    pub fn advisory_for(language: Language) -> &'static str {
        match language {
            Language::English => ENGLISH_ADVISORY,
            Language::Malayalam => MALAYALAM_ADVISORY,
        }
    }
}

impl Default for CannedAdviceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdviceProvider for CannedAdviceProvider {
    fn name(&self) -> &str {
        "canned"
    }

    async fn advise(&self, query: &Query) -> Result<String, ProviderError> {
        debug!(
            "Canned provider answering in {} after {:?}",
            query.language(),
            self.delay
        );
        tokio::time::sleep(self.delay).await;
        Ok(Self::advisory_for(query.language()).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sahayak_application::{NoProgress, QuerySession, SubmitOutcome};
    use sahayak_domain::{ImageAttachment, SubmitRejection};
    use std::sync::Arc;
    use tokio::time::Instant;

    const BANANA_QUESTION: &str =
        "My banana plants have brown spots on the leaves. What should I do?";

    fn session(language: Language) -> QuerySession {
        QuerySession::new(language, Arc::new(CannedAdviceProvider::new()))
    }

    #[test]
    fn test_languages_get_different_advice() {
        assert_ne!(
            CannedAdviceProvider::advisory_for(Language::English),
            CannedAdviceProvider::advisory_for(Language::Malayalam)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_answer_arrives_after_fixed_delay() {
        let provider = CannedAdviceProvider::new();
        let query = Query::try_new("anything", None, Language::English).unwrap();

        let started = Instant::now();
        let answer = provider.advise(&query).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(2000));
        assert_eq!(answer, ENGLISH_ADVISORY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_content_is_ignored() {
        let provider = CannedAdviceProvider::new().with_delay(Duration::ZERO);
        let a = Query::try_new("rice", None, Language::Malayalam).unwrap();
        let b = Query::try_new("pepper", None, Language::Malayalam).unwrap();
        assert_eq!(
            provider.advise(&a).await.unwrap(),
            provider.advise(&b).await.unwrap()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_english_banana_scenario() {
        let session = session(Language::English);
        session.set_text(BANANA_QUESTION).unwrap();

        let outcome = session.submit(&NoProgress).await;

        match outcome {
            SubmitOutcome::Completed(response) => {
                assert_eq!(response.text(), ENGLISH_ADVISORY);
            }
            other => panic!("Expected Completed, got {:?}", other),
        }
        let state = session.snapshot();
        assert_eq!(state.query().unwrap().text(), BANANA_QUESTION);
        assert!(!state.query().unwrap().has_image());
    }

    #[tokio::test(start_paused = true)]
    async fn test_malayalam_image_only_scenario() {
        let session = session(Language::Malayalam);
        let image =
            ImageAttachment::from_bytes("vazha.jpg", b"\xff\xd8\xff\xe0JFIF".to_vec(), 1024)
                .unwrap();
        session.attach_image(image).unwrap();

        let outcome = session.submit(&NoProgress).await;

        match outcome {
            SubmitOutcome::Completed(response) => {
                assert_eq!(response.text(), MALAYALAM_ADVISORY);
            }
            other => panic!("Expected Completed, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_scenario_is_rejected() {
        let session = session(Language::English);

        let outcome = session.submit(&NoProgress).await;

        assert_eq!(outcome, SubmitOutcome::Rejected(SubmitRejection::InvalidQuery));
        assert!(session.snapshot().is_idle());
    }
}
