//! Screen navigation: landing screen and one query screen per session

use crate::chat::landing::LandingScreen;
use crate::chat::repl::{Flow, QueryRepl};
use crate::config::{OutputConfig, ReplConfig};
use reedline::{FileBackedHistory, Reedline};
use sahayak_application::{
    AdviceProvider, ImageSource, QuerySession, SubmissionConfig, VoiceTranscriber,
};
use sahayak_domain::Language;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

const HISTORY_CAPACITY: usize = 1000;

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Query(Language),
}

impl Screen {
    /// First screen: skip the landing screen when a language is preset.
    pub fn initial(language: Option<Language>) -> Self {
        match language {
            Some(language) => Screen::Query(language),
            None => Screen::Landing,
        }
    }

    /// Screen after the query REPL exits with `flow`; `None` ends the app.
    pub fn after(self, flow: Flow) -> Option<Self> {
        match flow {
            Flow::Stay => Some(self),
            Flow::Home => Some(Screen::Landing),
            Flow::Quit => None,
        }
    }
}

/// Interactive application: language selection, then query sessions
pub struct SahayakApp {
    provider: Arc<dyn AdviceProvider>,
    transcriber: Arc<dyn VoiceTranscriber>,
    images: Arc<dyn ImageSource>,
    submission: SubmissionConfig,
    output: OutputConfig,
    repl: ReplConfig,
    language: Option<Language>,
}

impl SahayakApp {
    pub fn new(
        provider: Arc<dyn AdviceProvider>,
        transcriber: Arc<dyn VoiceTranscriber>,
        images: Arc<dyn ImageSource>,
    ) -> Self {
        Self {
            provider,
            transcriber,
            images,
            submission: SubmissionConfig::default(),
            output: OutputConfig::default(),
            repl: ReplConfig::default(),
            language: None,
        }
    }

    pub fn with_submission(mut self, submission: SubmissionConfig) -> Self {
        self.submission = submission;
        self
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn with_repl(mut self, repl: ReplConfig) -> Self {
        self.repl = repl;
        self
    }

    /// Preselect a language, skipping the first landing screen
    pub fn with_language(mut self, language: Option<Language>) -> Self {
        self.language = language;
        self
    }

    /// Build the query screen for a fresh session in `language`.
    pub fn query_screen(&self, language: Language) -> QueryRepl {
        let session = QuerySession::new(language, self.provider.clone())
            .with_config(self.submission.clone());
        QueryRepl::new(session, self.transcriber.clone(), self.images.clone())
            .with_output(self.output.clone())
            .with_config(self.repl.clone())
    }

    fn editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = self.repl.resolved_history_file() else {
            return editor;
        };
        if let Err(e) = ensure_parent_dir(&path) {
            warn!("Cannot create history directory for {}: {}", path.display(), e);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("History disabled ({}): {}", path.display(), e);
                editor
            }
        }
    }

    /// Run until the user quits
    pub async fn run(&self) -> io::Result<()> {
        let mut editor = self.editor();
        let mut screen = Screen::initial(self.language);

        loop {
            let next = match screen {
                Screen::Landing => LandingScreen::prompt_language(&mut editor)?.map(Screen::Query),
                Screen::Query(language) => {
                    info!("Opening query screen ({})", language);
                    let flow = self.query_screen(language).run(&mut editor).await?;
                    screen.after(flow)
                }
            };
            match next {
                Some(next) => screen = next,
                None => return Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::command::ReplCommand;
    use async_trait::async_trait;
    use sahayak_application::{ImageSourceError, ProviderError, VoiceError};
    use sahayak_domain::{ImageAttachment, Query};

    struct FixedProvider;

    #[async_trait]
    impl AdviceProvider for FixedProvider {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn advise(&self, query: &Query) -> Result<String, ProviderError> {
            Ok(format!("advice in {}", query.language()))
        }
    }

    struct NoVoice;

    #[async_trait]
    impl VoiceTranscriber for NoVoice {
        async fn transcribe(&self, _language: Language) -> Result<String, VoiceError> {
            Err(VoiceError::Unavailable("no microphone".to_string()))
        }
    }

    struct NoImages;

    #[async_trait]
    impl ImageSource for NoImages {
        async fn load(&self, location: &str) -> Result<ImageAttachment, ImageSourceError> {
            Err(ImageSourceError::Unreadable {
                path: location.to_string(),
                reason: "not found".to_string(),
            })
        }
    }

    fn app() -> SahayakApp {
        SahayakApp::new(Arc::new(FixedProvider), Arc::new(NoVoice), Arc::new(NoImages))
            .with_repl(ReplConfig {
                show_progress: false,
                history_file: None,
            })
    }

    #[test]
    fn test_initial_screen() {
        assert_eq!(Screen::initial(None), Screen::Landing);
        assert_eq!(
            Screen::initial(Some(Language::Malayalam)),
            Screen::Query(Language::Malayalam)
        );
    }

    #[test]
    fn test_screen_transitions() {
        let query = Screen::Query(Language::English);
        assert_eq!(query.after(Flow::Home), Some(Screen::Landing));
        assert_eq!(query.after(Flow::Stay), Some(query));
        assert_eq!(query.after(Flow::Quit), None);
    }

    #[test]
    fn test_history_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.txt");

        ensure_parent_dir(&path).unwrap();

        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_unusable_history_location_still_gives_an_editor() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("history.txt");

        assert!(ensure_parent_dir(&path).is_err());

        let app = SahayakApp::new(Arc::new(FixedProvider), Arc::new(NoVoice), Arc::new(NoImages))
            .with_repl(ReplConfig {
                show_progress: false,
                history_file: Some(path),
            });
        let _editor = app.editor();
    }

    #[tokio::test]
    async fn test_each_query_screen_gets_a_fresh_session() {
        let app = app();

        let first = app.query_screen(Language::English);
        first
            .handle(ReplCommand::Ask("Spots".to_string()))
            .await;
        assert!(first.session().snapshot().response().is_some());

        let second = app.query_screen(Language::Malayalam);
        let state = second.session().snapshot();
        assert!(state.is_idle());
        assert!(state.draft().is_empty());
        assert_eq!(state.language(), Language::Malayalam);
    }
}
