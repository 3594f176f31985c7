//! REPL (Read-Eval-Print Loop) for the query screen

use crate::chat::command::ReplCommand;
use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::output::messages::{
    image_error_message, rejection_message, session_error_message, voice_error_message,
};
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use sahayak_application::{
    ImageInputError, ImageSource, NoProgress, QuerySession, SubmissionProgress, SubmitOutcome,
    VoiceInputError, VoiceTranscriber,
};
use sahayak_domain::{Language, LocaleText, SessionError, SubmitRejection, TextKey};
use std::io;
use std::sync::Arc;

/// Where the REPL goes after handling a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Stay,
    /// Back to the landing screen with a fresh session
    Home,
    Quit,
}

/// Output of one handled command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub flow: Flow,
}

impl Reply {
    fn stay(lines: Vec<String>) -> Self {
        Self {
            lines,
            flow: Flow::Stay,
        }
    }

    fn silent() -> Self {
        Self::stay(Vec::new())
    }
}

/// Interactive query screen for one session
pub struct QueryRepl {
    session: QuerySession,
    transcriber: Arc<dyn VoiceTranscriber>,
    images: Arc<dyn ImageSource>,
    output: OutputConfig,
    config: ReplConfig,
}

impl QueryRepl {
    pub fn new(
        session: QuerySession,
        transcriber: Arc<dyn VoiceTranscriber>,
        images: Arc<dyn ImageSource>,
    ) -> Self {
        Self {
            session,
            transcriber,
            images,
            output: OutputConfig::default(),
            config: ReplConfig::default(),
        }
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    pub fn session(&self) -> &QuerySession {
        &self.session
    }

    fn language(&self) -> Language {
        self.session.language()
    }

    fn text(&self, key: TextKey) -> &'static str {
        LocaleText::get(self.language(), key)
    }

    /// Run the interactive REPL until the user goes home or quits
    pub async fn run(&self, editor: &mut Reedline) -> io::Result<Flow> {
        println!("{}", ConsoleFormatter::query_screen_intro(self.language()));

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(self.language().native_name().to_string()),
            DefaultPromptSegment::Empty,
        );

        loop {
            let line = match editor.read_line(&prompt)? {
                Signal::Success(line) => line,
                Signal::CtrlD => {
                    println!("{}", self.text(TextKey::Goodbye));
                    return Ok(Flow::Quit);
                }
                #[allow(unreachable_patterns)]
                _ => {
                    println!("^C");
                    continue;
                }
            };

            let Some(command) = ReplCommand::parse(&line) else {
                continue;
            };

            if command == ReplCommand::Voice {
                println!("{}", self.text(TextKey::Recording).red());
            }

            let reply = self.handle(command).await;
            for line in &reply.lines {
                println!("{}", line);
            }
            if reply.flow != Flow::Stay {
                return Ok(reply.flow);
            }
        }
    }

    /// Execute one command against the session.
    pub async fn handle(&self, command: ReplCommand) -> Reply {
        match command {
            ReplCommand::Ask(text) => match self.session.set_text(text) {
                Ok(()) => self.submit().await,
                Err(e) => self.session_error(e),
            },
            ReplCommand::Submit => self.submit().await,
            ReplCommand::Voice => self.voice().await,
            ReplCommand::Image(location) => self.attach(&location).await,
            ReplCommand::ClearImage => match self.session.clear_image() {
                Ok(true) => Reply::stay(vec![self.text(TextKey::ImageRemoved).to_string()]),
                Ok(false) => Reply::silent(),
                Err(e) => self.session_error(e),
            },
            ReplCommand::Retry => {
                let progress = self.progress();
                match self.session.retry(progress.as_ref()).await {
                    Ok(outcome) => self.render_outcome(outcome),
                    Err(e) => self.session_error(e),
                }
            }
            ReplCommand::Edit => self.edit(),
            ReplCommand::New => {
                self.session.reset();
                Reply::stay(vec![
                    String::new(),
                    self.text(TextKey::Greeting).bold().to_string(),
                ])
            }
            ReplCommand::Home => {
                self.session.reset();
                Reply {
                    lines: Vec::new(),
                    flow: Flow::Home,
                }
            }
            ReplCommand::Officer => {
                Reply::stay(vec![self.text(TextKey::OfficerInfo).to_string()])
            }
            ReplCommand::Help => Reply::stay(vec![ConsoleFormatter::help(self.language())]),
            ReplCommand::Quit => {
                self.session.reset();
                Reply {
                    lines: vec![self.text(TextKey::Goodbye).to_string()],
                    flow: Flow::Quit,
                }
            }
            ReplCommand::Unknown(name) => {
                tracing::debug!("Unknown command: {}", name);
                Reply::stay(vec![
                    format!("{} {}", self.text(TextKey::NotFound).yellow(), name.dimmed()),
                    ConsoleFormatter::help(self.language()),
                ])
            }
        }
    }

    fn progress(&self) -> Box<dyn SubmissionProgress> {
        if self.config.show_progress {
            Box::new(ProgressReporter::new(self.language()))
        } else {
            Box::new(NoProgress)
        }
    }

    async fn submit(&self) -> Reply {
        let progress = self.progress();
        let outcome = self.session.submit(progress.as_ref()).await;
        self.render_outcome(outcome)
    }

    fn render_outcome(&self, outcome: SubmitOutcome) -> Reply {
        match outcome {
            SubmitOutcome::Completed(_) | SubmitOutcome::Failed(_) => {
                let state = self.session.snapshot();
                Reply::stay(vec![ConsoleFormatter::format_as(self.output.format, &state)])
            }
            SubmitOutcome::Rejected(SubmitRejection::InvalidQuery)
                if !self.session.config().notify_empty_input() =>
            {
                Reply::silent()
            }
            SubmitOutcome::Rejected(rejection) => Reply::stay(vec![
                rejection_message(self.language(), &rejection)
                    .yellow()
                    .to_string(),
            ]),
            SubmitOutcome::Discarded => Reply::silent(),
        }
    }

    async fn voice(&self) -> Reply {
        match self.session.apply_voice(self.transcriber.as_ref()).await {
            Ok(transcript) => Reply::stay(vec![
                format!("\"{}\"", transcript),
                format!(
                    "{} {}",
                    self.text(TextKey::QuestionUpdated),
                    format!("/submit  {}", self.text(TextKey::GetAdvice)).dimmed()
                ),
            ]),
            Err(VoiceInputError::Voice(e)) => {
                tracing::warn!("Voice input failed: {}", e);
                Reply::stay(vec![
                    voice_error_message(self.language(), &e).yellow().to_string(),
                ])
            }
            Err(VoiceInputError::Session(e)) => self.session_error(e),
        }
    }

    async fn attach(&self, location: &str) -> Reply {
        if location.is_empty() {
            return Reply::stay(vec![format!(
                "{} {}",
                self.text(TextKey::UploadPrompt),
                "/image <path>".dimmed()
            )]);
        }

        match self.session.attach_from(self.images.as_ref(), location).await {
            Ok(image) => Reply::stay(vec![format!(
                "{} {} {}",
                "v".green(),
                self.text(TextKey::ImageUploaded).green(),
                format!("({})", image.file_name()).dimmed()
            )]),
            Err(ImageInputError::Source(e)) => {
                tracing::warn!("Image not attached: {}", e);
                Reply::stay(vec![
                    image_error_message(self.language(), &e).yellow().to_string(),
                ])
            }
            Err(ImageInputError::Session(e)) => self.session_error(e),
        }
    }

    fn edit(&self) -> Reply {
        match self.session.edit() {
            Ok(()) => {
                let state = self.session.snapshot();
                let mut lines = vec![format!(
                    "{} {}",
                    self.text(TextKey::TypeQuestion).cyan(),
                    state.draft().text()
                )];
                if let Some(image) = state.draft().image() {
                    lines.push(format!(
                        "{} {}",
                        self.text(TextKey::ImageAttachedNote),
                        format!("({})", image.file_name()).dimmed()
                    ));
                }
                Reply::stay(lines)
            }
            Err(_) if self.session.snapshot().is_idle() => Reply::silent(),
            Err(SessionError::NotFailed) => self.session_error(SessionError::NotEditable),
            Err(e) => self.session_error(e),
        }
    }

    fn session_error(&self, error: SessionError) -> Reply {
        Reply::stay(vec![
            session_error_message(self.language(), &error)
                .yellow()
                .to_string(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sahayak_application::{
        AdviceProvider, EmptyInputPolicy, ImageSourceError, ProviderError, SubmissionConfig,
        VoiceError,
    };
    use sahayak_domain::{ImageAttachment, MediaError, OutputFormat, Query};
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    struct EchoProvider {
        calls: AtomicUsize,
        fail_first: bool,
    }

    #[async_trait]
    impl AdviceProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn advise(&self, query: &Query) -> Result<String, ProviderError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_first && n == 0 {
                return Err(ProviderError::Timeout);
            }
            Ok(format!("advice for [{}]", query.text()))
        }
    }

    struct SampleTranscriber;

    #[async_trait]
    impl VoiceTranscriber for SampleTranscriber {
        async fn transcribe(&self, _language: Language) -> Result<String, VoiceError> {
            Ok("Brown spots on banana leaves".to_string())
        }
    }

    struct MuteTranscriber;

    #[async_trait]
    impl VoiceTranscriber for MuteTranscriber {
        async fn transcribe(&self, _language: Language) -> Result<String, VoiceError> {
            Err(VoiceError::NoSpeech)
        }
    }

    struct StubImages;

    #[async_trait]
    impl ImageSource for StubImages {
        async fn load(&self, location: &str) -> Result<ImageAttachment, ImageSourceError> {
            if location.ends_with(".jpg") {
                Ok(ImageAttachment::from_bytes(location, b"\xff\xd8\xff\xe0".to_vec(), 1024)?)
            } else {
                Err(MediaError::UnsupportedMedia {
                    file_name: location.to_string(),
                }
                .into())
            }
        }
    }

    fn repl_with(
        language: Language,
        fail_first: bool,
        transcriber: Arc<dyn VoiceTranscriber>,
    ) -> QueryRepl {
        let provider = Arc::new(EchoProvider {
            calls: AtomicUsize::new(0),
            fail_first,
        });
        QueryRepl::new(
            QuerySession::new(language, provider),
            transcriber,
            Arc::new(StubImages),
        )
        .with_output(OutputConfig {
            format: OutputFormat::Advice,
            color: false,
        })
        .with_config(ReplConfig {
            show_progress: false,
            history_file: None,
        })
    }

    fn repl(language: Language) -> QueryRepl {
        repl_with(language, false, Arc::new(SampleTranscriber))
    }

    async fn send(repl: &QueryRepl, line: &str) -> Reply {
        repl.handle(ReplCommand::parse(line).unwrap()).await
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_plain_text_submits() {
        let repl = repl(Language::English);

        let reply = send(&repl, "Yellow leaves").await;

        assert_eq!(reply.flow, Flow::Stay);
        assert_eq!(reply.lines, vec!["advice for [Yellow leaves]\n".to_string()]);
        assert!(repl.session().snapshot().response().is_some());
    }

    #[tokio::test]
    async fn test_empty_submit_shows_localized_message() {
        let repl = repl(Language::Malayalam);

        let reply = send(&repl, "/submit").await;

        assert_eq!(reply.lines.len(), 1);
        assert!(
            reply.lines[0].contains(LocaleText::get(Language::Malayalam, TextKey::EmptyQuery))
        );
        assert!(repl.session().snapshot().is_idle());
    }

    #[tokio::test]
    async fn test_empty_submit_silent_policy() {
        let provider = Arc::new(EchoProvider {
            calls: AtomicUsize::new(0),
            fail_first: false,
        });
        let session = QuerySession::new(Language::English, provider).with_config(
            SubmissionConfig::default().with_empty_input(EmptyInputPolicy::Silent),
        );
        let repl = QueryRepl::new(session, Arc::new(SampleTranscriber), Arc::new(StubImages))
            .with_config(ReplConfig {
                show_progress: false,
                history_file: None,
            });

        let reply = send(&repl, "/submit").await;

        assert!(reply.lines.is_empty());
    }

    #[tokio::test]
    async fn test_voice_then_submit() {
        let repl = repl(Language::English);

        let reply = send(&repl, "/voice").await;
        assert!(reply.lines[0].contains("Brown spots on banana leaves"));

        let reply = send(&repl, "/submit").await;
        assert_eq!(
            reply.lines,
            vec!["advice for [Brown spots on banana leaves]\n".to_string()]
        );
    }

    #[tokio::test]
    async fn test_voice_failure_is_reported() {
        let repl = repl_with(Language::English, false, Arc::new(MuteTranscriber));

        let reply = send(&repl, "/voice").await;

        assert!(reply.lines[0].contains("Voice input is not available"));
        assert_eq!(repl.session().snapshot().draft().text(), "");
    }

    #[tokio::test]
    async fn test_image_only_submission() {
        let repl = repl(Language::English);

        let reply = send(&repl, "/image vazha.jpg").await;
        assert!(reply.lines[0].contains("Image uploaded successfully!"));

        let reply = send(&repl, "/submit").await;
        assert_eq!(reply.lines, vec!["advice for []\n".to_string()]);
        assert!(repl.session().snapshot().query().unwrap().has_image());
    }

    #[tokio::test]
    async fn test_non_image_is_rejected() {
        let repl = repl(Language::English);

        let reply = send(&repl, "/image notes.txt").await;

        assert!(reply.lines[0].contains("not an image"));
        assert!(repl.session().snapshot().draft().image().is_none());
    }

    #[tokio::test]
    async fn test_image_without_path_prompts() {
        let repl = repl(Language::English);
        let reply = send(&repl, "/image").await;
        assert!(reply.lines[0].contains("Upload a photo"));
    }

    #[tokio::test]
    async fn test_clear_image() {
        let repl = repl(Language::English);
        send(&repl, "/image vazha.jpg").await;

        let reply = send(&repl, "/clear-image").await;
        assert_eq!(reply.lines, vec!["Image removed.".to_string()]);

        let reply = send(&repl, "/clear-image").await;
        assert!(reply.lines.is_empty());
    }

    #[tokio::test]
    async fn test_input_locked_while_answer_shown() {
        let repl = repl(Language::English);
        send(&repl, "first").await;

        let reply = send(&repl, "second").await;

        assert!(reply.lines[0].contains("/new"));
        assert_eq!(repl.session().snapshot().query().unwrap().text(), "first");
    }

    #[tokio::test]
    async fn test_new_clears_everything() {
        let repl = repl(Language::English);
        send(&repl, "/image vazha.jpg").await;
        send(&repl, "Spots").await;

        send(&repl, "/new").await;

        let state = repl.session().snapshot();
        assert!(state.is_idle());
        assert!(state.draft().is_empty());
        assert!(state.response().is_none());
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let repl = repl_with(Language::English, true, Arc::new(SampleTranscriber));

        let reply = send(&repl, "Wilting pepper").await;
        assert!(reply.lines[0].contains("took too long"));

        let reply = send(&repl, "/retry").await;
        assert_eq!(reply.lines, vec!["advice for [Wilting pepper]\n".to_string()]);
    }

    #[tokio::test]
    async fn test_retry_without_failure() {
        let repl = repl(Language::English);
        let reply = send(&repl, "/retry").await;
        assert!(reply.lines[0].contains("no failed question"));
    }

    #[tokio::test]
    async fn test_edit_after_failure_restores_draft() {
        let repl = repl_with(Language::English, true, Arc::new(SampleTranscriber));
        send(&repl, "Wilting pepper").await;

        let reply = send(&repl, "/edit").await;

        assert!(reply.lines[0].contains("Wilting pepper"));
        assert!(repl.session().snapshot().is_idle());
    }

    #[tokio::test]
    async fn test_navigation() {
        let repl = repl(Language::English);

        assert_eq!(send(&repl, "/home").await.flow, Flow::Home);
        assert_eq!(send(&repl, "/quit").await.flow, Flow::Quit);
    }

    #[tokio::test]
    async fn test_officer_and_unknown_command() {
        let repl = repl(Language::Malayalam);

        let reply = send(&repl, "/officer").await;
        assert_eq!(
            reply.lines,
            vec![LocaleText::get(Language::Malayalam, TextKey::OfficerInfo).to_string()]
        );

        let reply = send(&repl, "/weather").await;
        assert_eq!(reply.flow, Flow::Stay);
        assert!(
            reply.lines[0].contains(LocaleText::get(Language::Malayalam, TextKey::NotFound))
        );
        assert!(reply.lines[1].contains("/voice"));
    }
}
