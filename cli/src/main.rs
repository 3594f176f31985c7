//! CLI entrypoint for Haritha Sahayak
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;
mod settings;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use colored::Colorize;
use sahayak_application::{
    ImageInputError, NoProgress, QuerySession, SubmissionProgress, SubmitOutcome,
    VoiceInputError,
};
use sahayak_domain::{Language, OutputFormat};
use sahayak_infrastructure::{
    ConfigLoader, FileConfig, ImageLoader, SimulatedTranscriber, provider_from_config,
};
use sahayak_presentation::{
    Cli, ConsoleFormatter, ProgressReporter, SahayakApp, SimpleProgress, image_error_message,
    rejection_message, session_error_message, voice_error_message,
};
use settings::Settings;
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        return show_config(&cli);
    }

    // === Configuration ===
    let mut file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    for issue in file_config.sanitize() {
        eprintln!("{} {} (using default)", "warning:".yellow().bold(), issue);
    }
    let settings = Settings::resolve(&cli, file_config);

    let _log_guard = logging::init(cli.verbose, settings.log_file.as_deref())?;
    if !settings.output.color {
        colored::control::set_override(false);
    }

    info!("Starting Haritha Sahayak");

    // === Dependency Injection ===
    let provider = provider_from_config(&settings.provider)
        .map_err(|e| anyhow!("Cannot set up advice provider: {}", e))?;
    info!("Using '{}' advice provider", provider.name());
    let transcriber = Arc::new(SimulatedTranscriber::new());
    let images = Arc::new(ImageLoader::new(settings.max_image_bytes));

    if cli.is_one_shot() {
        let session = QuerySession::new(
            settings.language.unwrap_or(Language::English),
            provider,
        )
        .with_config(settings.submission.clone());
        return run_one_shot(&cli, &settings, &session, &transcriber, &images).await;
    }

    SahayakApp::new(provider, transcriber, images)
        .with_submission(settings.submission.clone())
        .with_output(settings.output.clone())
        .with_repl(settings.repl.clone())
        .with_language(settings.language)
        .run()
        .await
        .context("Terminal error")?;

    Ok(ExitCode::SUCCESS)
}

fn show_config(cli: &Cli) -> Result<ExitCode> {
    ConfigLoader::print_config_sources(cli.config.as_ref());

    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    println!();
    println!("Effective configuration:");
    println!("{}", toml::to_string_pretty(&config)?);
    for issue in config.validate() {
        println!("{} {}", "warning:".yellow().bold(), issue);
    }
    Ok(ExitCode::SUCCESS)
}

/// Answer one query from the command line and exit.
///
/// Exits non-zero when the query is rejected or the provider fails.
async fn run_one_shot(
    cli: &Cli,
    settings: &Settings,
    session: &QuerySession,
    transcriber: &SimulatedTranscriber,
    images: &ImageLoader,
) -> Result<ExitCode> {
    let language = session.language();
    let machine_output = settings.output.format == OutputFormat::Json;

    if let Some(question) = &cli.question {
        session
            .set_text(question.as_str())
            .map_err(|e| anyhow!(session_error_message(language, &e)))?;
    }

    if let Some(path) = &cli.image {
        match session
            .attach_from(images, &path.to_string_lossy())
            .await
        {
            Ok(_) => {}
            Err(ImageInputError::Source(e)) => {
                info!("Image rejected: {}", e);
                eprintln!("{}", image_error_message(language, &e).red());
                return Ok(ExitCode::FAILURE);
            }
            Err(ImageInputError::Session(e)) => {
                return Err(anyhow!(session_error_message(language, &e)));
            }
        }
    }

    if cli.voice {
        match session.apply_voice(transcriber).await {
            Ok(transcript) if !machine_output => println!("\"{}\"", transcript),
            Ok(_) => {}
            Err(VoiceInputError::Voice(e)) => {
                eprintln!("{}", voice_error_message(language, &e).red());
                return Ok(ExitCode::FAILURE);
            }
            Err(VoiceInputError::Session(e)) => {
                return Err(anyhow!(session_error_message(language, &e)));
            }
        }
    }

    let progress: Box<dyn SubmissionProgress> = if !settings.repl.show_progress {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new(language))
    } else {
        Box::new(SimpleProgress::new(language))
    };

    let outcome = session.submit(progress.as_ref()).await;
    let state = session.snapshot();

    match outcome {
        SubmitOutcome::Completed(_) => {
            print!("{}", ConsoleFormatter::format_as(settings.output.format, &state));
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Failed(_) => {
            print!("{}", ConsoleFormatter::format_as(settings.output.format, &state));
            Ok(ExitCode::FAILURE)
        }
        SubmitOutcome::Rejected(rejection) => {
            if session.config().notify_empty_input() {
                eprintln!("{}", rejection_message(language, &rejection).yellow());
            }
            Ok(ExitCode::FAILURE)
        }
        SubmitOutcome::Discarded => Ok(ExitCode::FAILURE),
    }
}
