//! Console output formatter for query sessions

use crate::output::messages::failure_message;
use colored::Colorize;
use sahayak_domain::{
    AdvisoryResponse, Language, LocaleText, OutputFormat, Query, SessionState,
    SubmissionFailure, TextKey,
};
use serde::Serialize;

/// JSON view of a session.
#[derive(Serialize)]
struct SessionReport<'a> {
    language: Language,
    status: &'static str,
    query: Option<&'a Query>,
    response: Option<&'a AdvisoryResponse>,
    failure: Option<&'a SubmissionFailure>,
}

/// Formats query screens and results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a session in the requested output format
    pub fn format_as(format: OutputFormat, state: &SessionState) -> String {
        match format {
            OutputFormat::Full => Self::format(state),
            OutputFormat::Advice => Self::format_advice_only(state),
            OutputFormat::Json => Self::format_json(state),
        }
    }

    /// Query summary followed by the advice (or the failure)
    pub fn format(state: &SessionState) -> String {
        let language = state.language();
        let t = |key| LocaleText::get(language, key);
        let mut output = String::new();

        if let Some(query) = state.query() {
            output.push_str(&format!("{}\n", t(TextKey::YourQuery).cyan().bold()));
            if !query.text().trim().is_empty() {
                output.push_str(&format!("{}\n", query.text()));
            }
            if let Some(image) = query.image() {
                output.push_str(&format!(
                    "{} {}\n",
                    t(TextKey::ImageAttachedNote).green(),
                    format!("({})", image.file_name()).dimmed()
                ));
            }
            output.push('\n');
        }

        if let Some(response) = state.response() {
            output.push_str(&Self::section_header(t(TextKey::ExpertAdvice)));
            output.push_str(&format!("{}\n\n", t(TextKey::AiPowered).dimmed()));
            output.push_str(response.text());
            output.push('\n');
            output.push_str(&format!(
                "\n{}  {}\n",
                format!("/new  {}", t(TextKey::AskAnother)).yellow(),
                format!("/officer  {}", t(TextKey::ContactOfficer)).yellow()
            ));
        } else if let Some(failure) = state.failure() {
            output.push_str(&format!(
                "{} {}\n",
                "x".red().bold(),
                failure_message(language, failure).red()
            ));
            output.push_str(&format!("{}\n", t(TextKey::RetryHint).dimmed()));
        }

        output
    }

    /// Only the advice text (or the failure message)
    pub fn format_advice_only(state: &SessionState) -> String {
        if let Some(response) = state.response() {
            return format!("{}\n", response.text());
        }
        match state.failure() {
            Some(failure) => format!("{}\n", failure_message(state.language(), failure)),
            None => String::new(),
        }
    }

    /// Format as JSON
    pub fn format_json(state: &SessionState) -> String {
        let report = SessionReport {
            language: state.language(),
            status: state.phase().as_str(),
            query: state.query(),
            response: state.response(),
            failure: state.failure(),
        };
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Greeting and instructions shown when the query screen opens
    pub fn query_screen_intro(language: Language) -> String {
        let t = |key| LocaleText::get(language, key);
        let mut output = String::new();
        output.push_str(&Self::header(t(TextKey::AppTitle), t(TextKey::AppSubtitle)));
        output.push_str(&format!("\n{}\n", t(TextKey::Greeting).bold()));
        output.push_str(&format!("{}\n\n", t(TextKey::Instructions)));
        output.push_str(&format!(
            "{} {}\n",
            t(TextKey::TypeQuestion).cyan(),
            format!("({})", t(TextKey::QuestionPlaceholder)).dimmed()
        ));
        output.push_str(&format!(
            "{}\n",
            format!("/help  {}", t(TextKey::ShowHelp)).dimmed()
        ));
        output
    }

    /// Localized command reference
    pub fn help(language: Language) -> String {
        let t = |key| LocaleText::get(language, key);
        let rows = [
            ("<text>", t(TextKey::GetAdvice)),
            ("/voice", t(TextKey::TapToSpeak)),
            ("/image <path>", t(TextKey::UploadPhoto)),
            ("/clear-image", t(TextKey::RemoveImage)),
            ("/submit", t(TextKey::GetAdvice)),
            ("/retry", t(TextKey::TryAgain)),
            ("/edit", t(TextKey::EditQuestion)),
            ("/new", t(TextKey::AskAnother)),
            ("/home", t(TextKey::BackToHome)),
            ("/officer", t(TextKey::ContactOfficer)),
            ("/help", t(TextKey::ShowHelp)),
            ("/quit", t(TextKey::Quit)),
        ];

        let mut output = String::new();
        for (command, description) in rows {
            output.push_str(&format!("  {:<15} - {}\n", command, description));
        }
        output
    }

    fn header(title: &str, subtitle: &str) -> String {
        let line = "=".repeat(60);
        format!(
            "{}\n{:^60}\n{:^60}\n{}\n",
            line.green(),
            title.bold(),
            subtitle,
            line.green()
        )
    }

    fn section_header(title: &str) -> String {
        format!("{}\n{}\n", title.green().bold(), "-".repeat(40))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sahayak_domain::ImageAttachment;

    fn completed(language: Language, text: &str, with_image: bool) -> SessionState {
        let mut state = SessionState::new(language);
        state.set_text(text).unwrap();
        if with_image {
            let image =
                ImageAttachment::from_bytes("vazha.jpg", b"\xff\xd8\xff\xe0".to_vec(), 1024)
                    .unwrap();
            state.attach_image(image).unwrap();
        }
        let (ticket, _) = state.begin_submit().unwrap();
        state
            .complete(ticket, AdvisoryResponse::new("Remove affected leaves"))
            .unwrap();
        state
    }

    #[test]
    fn test_full_shows_query_and_advice() {
        let state = completed(Language::English, "Brown spots on banana", false);
        let output = ConsoleFormatter::format(&state);

        assert!(output.contains("Your Query:"));
        assert!(output.contains("Brown spots on banana"));
        assert!(output.contains("Expert Advice"));
        assert!(output.contains("Remove affected leaves"));
        assert!(!output.contains("+ Image uploaded"));
    }

    #[test]
    fn test_full_notes_attached_image_in_session_language() {
        let state = completed(Language::Malayalam, "", true);
        let output = ConsoleFormatter::format(&state);

        assert!(output.contains("+ ചിത്രം അപ്‌ലോഡ് ചെയ്തു"));
        assert!(output.contains("വിദഗ്ധ ഉപദേശം"));
    }

    #[test]
    fn test_failure_is_rendered_with_retry_hint() {
        let mut state = SessionState::new(Language::English);
        state.set_text("Pepper wilt").unwrap();
        let (ticket, _) = state.begin_submit().unwrap();
        state.fail(ticket, SubmissionFailure::Timeout).unwrap();

        let output = ConsoleFormatter::format(&state);
        assert!(output.contains("took too long"));
        assert!(output.contains("/retry"));

        let advice = ConsoleFormatter::format_advice_only(&state);
        assert_eq!(advice, "The advice service took too long to respond.\n");
    }

    #[test]
    fn test_advice_only() {
        let state = completed(Language::English, "q", false);
        assert_eq!(
            ConsoleFormatter::format_as(OutputFormat::Advice, &state),
            "Remove affected leaves\n"
        );
    }

    #[test]
    fn test_json_report() {
        let state = completed(Language::Malayalam, "Vazha", true);
        let json = ConsoleFormatter::format_json(&state);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["language"], "malayalam");
        assert_eq!(value["status"], state.phase().as_str());
        assert_eq!(value["query"]["text"], "Vazha");
        assert_eq!(value["query"]["image"]["file_name"], "vazha.jpg");
        assert_eq!(value["response"]["text"], "Remove affected leaves");
        assert!(value["failure"].is_null());
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = ConsoleFormatter::help(Language::English);
        for command in [
            "/voice", "/image", "/clear-image", "/submit", "/retry", "/edit", "/new", "/home",
            "/officer", "/help", "/quit",
        ] {
            assert!(help.contains(command), "missing {}", command);
        }
    }
}
