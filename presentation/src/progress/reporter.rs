//! Progress reporting for query submissions

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use sahayak_application::SubmissionProgress;
use sahayak_domain::{Language, LocaleText, Query, SubmissionPhase, TextKey};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Shows a spinner with the localized "Analyzing..." label
pub struct ProgressReporter {
    language: Language,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn end_label(phase: &SubmissionPhase) -> Option<String> {
        match phase {
            SubmissionPhase::Completed { .. } => Some(format!("{}", "v".green())),
            SubmissionPhase::Failed { .. } => Some(format!("{}", "x".red())),
            _ => None,
        }
    }
}

impl SubmissionProgress for ProgressReporter {
    fn on_submit_start(&self, _query: &Query) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(LocaleText::get(self.language, TextKey::Analyzing));
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.spinner.lock().unwrap_or_else(PoisonError::into_inner) = Some(pb);
    }

    fn on_submit_end(&self, phase: &SubmissionPhase) {
        let spinner = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(pb) = spinner {
            match Self::end_label(phase) {
                Some(label) => pb.finish_with_message(label),
                None => pb.finish_and_clear(),
            }
        }
    }
}

/// Plain one-line progress for when stderr is not a terminal
pub struct SimpleProgress {
    language: Language,
}

impl SimpleProgress {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl SubmissionProgress for SimpleProgress {
    fn on_submit_start(&self, _query: &Query) {
        eprintln!(
            "{} {}",
            "->".cyan(),
            LocaleText::get(self.language, TextKey::Analyzing)
        );
    }

    fn on_submit_end(&self, _phase: &SubmissionPhase) {}
}
