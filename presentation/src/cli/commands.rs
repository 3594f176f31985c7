//! CLI command definitions

use clap::Parser;
use sahayak_domain::{Language, OutputFormat};
use std::path::PathBuf;

/// CLI arguments for haritha-sahayak
#[derive(Parser, Debug)]
#[command(name = "haritha-sahayak")]
#[command(author, version, about = "Haritha Sahayak - farming advice in English and Malayalam")]
#[command(long_about = r#"
Haritha Sahayak answers farming questions about crops, pests, weather and
fertilizers. Ask by typing, by (simulated) voice, or by attaching a photo of
your plant.

Without a question, an interactive session starts: choose a language, then
type questions or use slash commands (/voice, /image <path>, /help).

Configuration sources (highest priority first):
1. SAHAYAK_* environment variables, `__` between section and key
   (e.g. SAHAYAK_PROVIDER__DELAY_MS=0)
2. --config <path>     Explicit config file
3. ./sahayak.toml or ./.sahayak.toml   Project-level config
4. ~/.config/haritha-sahayak/config.toml   Global config
5. Built-in defaults
Command-line flags override all of them.

Example:
  haritha-sahayak
  haritha-sahayak -l english "My banana plants have brown spots on the leaves"
  haritha-sahayak -l malayalam --image vazha.jpg
"#)]
pub struct Cli {
    /// The question to ask (starts interactive mode when omitted)
    pub question: Option<String>,

    /// Session language: english (en, 1) or malayalam (ml, 2)
    #[arg(short, long, value_name = "LANGUAGE")]
    pub language: Option<Language>,

    /// Attach a photo of the plant
    #[arg(short, long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Ask by voice instead of typing
    #[arg(long)]
    pub voice: bool,

    /// Output format: full, advice or json
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Simulated processing time of the built-in advisor, in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Give up on a request after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// One-shot mode runs when any query input is given on the command line.
    pub fn is_one_shot(&self) -> bool {
        self.question.is_some() || self.image.is_some() || self.voice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_long_help_lists_config_sources_by_priority() {
        let help = Cli::command().render_long_help().to_string();

        let env = help.find("SAHAYAK_*").unwrap();
        let explicit = help.find("--config <path>").unwrap();
        let global = help.find("Global config").unwrap();
        assert!(env < explicit && explicit < global);
    }

    #[test]
    fn test_parse_one_shot() {
        let cli = Cli::try_parse_from([
            "haritha-sahayak",
            "-l",
            "ml",
            "--image",
            "vazha.jpg",
            "-o",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.language, Some(Language::Malayalam));
        assert_eq!(cli.image, Some(PathBuf::from("vazha.jpg")));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(cli.is_one_shot());
    }

    #[test]
    fn test_no_arguments_is_interactive() {
        let cli = Cli::try_parse_from(["haritha-sahayak"]).unwrap();
        assert!(!cli.is_one_shot());
        assert!(cli.language.is_none());
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        assert!(Cli::try_parse_from(["haritha-sahayak", "-l", "tamil", "hi"]).is_err());
    }
}
