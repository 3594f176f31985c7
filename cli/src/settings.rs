//! Effective settings: config files overridden by command-line flags

use sahayak_application::SubmissionConfig;
use sahayak_domain::Language;
use sahayak_infrastructure::{FileConfig, FileProviderConfig};
use sahayak_presentation::{Cli, OutputConfig, ReplConfig, expand_home};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Settings {
    pub language: Option<Language>,
    pub provider: FileProviderConfig,
    pub submission: SubmissionConfig,
    pub max_image_bytes: usize,
    pub output: OutputConfig,
    pub repl: ReplConfig,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Merge a validated file config with CLI flags (flags win).
    pub fn resolve(cli: &Cli, file: FileConfig) -> Self {
        let language = cli
            .language
            .or_else(|| file.session.parse_language().ok().flatten());

        let mut provider = file.provider;
        if let Some(delay_ms) = cli.delay_ms {
            provider.delay_ms = delay_ms;
        }

        let mut submission = file.submission.to_submission_config();
        if let Some(secs) = cli.timeout_secs.filter(|s| *s > 0) {
            submission = submission.with_timeout(Duration::from_secs(secs));
        }

        let output = OutputConfig {
            format: cli.output.or(file.output.format).unwrap_or_default(),
            color: file.output.color,
        };

        let repl = ReplConfig {
            show_progress: file.repl.show_progress && !cli.quiet,
            history_file: file.repl.history_file.as_deref().map(expand_home),
        };

        let log_file = cli
            .log_file
            .clone()
            .or_else(|| file.logging.file.as_deref().map(expand_home));

        Self {
            language,
            provider,
            submission,
            max_image_bytes: file.media.max_image_bytes,
            output,
            repl,
            log_file,
        }
    }
}
