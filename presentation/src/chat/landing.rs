//! Language selection screen

use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use sahayak_domain::{Language, LocaleText, TextKey};
use std::io;

/// Landing screen: branding, language list and choice prompt
pub struct LandingScreen;

impl LandingScreen {
    /// Text shown before the language prompt.
    pub fn render() -> String {
        // Branding is identical in both languages.
        let t = |key| LocaleText::get(Language::English, key);
        let line = "=".repeat(60);

        let mut output = String::new();
        output.push_str(&format!("{}\n", line.green()));
        output.push_str(&format!("{:^60}\n", t(TextKey::AppTitle).bold()));
        output.push_str(&format!(
            "{:^60}\n",
            format!("{} ({})", t(TextKey::AppSubtitle), t(TextKey::AppTranslation))
        ));
        output.push_str(&format!("{}\n\n", line.green()));
        output.push_str(&format!("{}\n\n", t(TextKey::Tagline)));
        output.push_str(&format!("{}\n", t(TextKey::ChooseLanguage).cyan().bold()));
        for (index, language) in Language::ALL.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", index + 1, language.native_name()));
        }
        output.push_str(&format!("\n{}\n", t(TextKey::Footer).dimmed()));
        output
    }

    /// Interpret one answer to the language prompt.
    pub fn parse_choice(input: &str) -> Option<Language> {
        input.trim().parse().ok()
    }

    /// Show the screen and read a choice, re-prompting on invalid input.
    ///
    /// Returns `None` when the user closes input (Ctrl-D).
    pub fn prompt_language(editor: &mut Reedline) -> io::Result<Option<Language>> {
        println!("{}", Self::render());
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("1/2".to_string()),
            DefaultPromptSegment::Empty,
        );

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => match Self::parse_choice(&line) {
                    Some(language) => {
                        tracing::info!("Language selected: {}", language);
                        return Ok(Some(language));
                    }
                    None if line.trim().is_empty() => continue,
                    None => {
                        println!(
                            "{}",
                            LocaleText::get(Language::English, TextKey::InvalidChoice).yellow()
                        );
                    }
                },
                Signal::CtrlD => return Ok(None),
                #[allow(unreachable_patterns)]
                _ => continue,
            }
        }
    }
}
