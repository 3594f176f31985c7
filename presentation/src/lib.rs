//! Presentation layer for haritha-sahayak
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive landing and query screens.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{Flow, LandingScreen, QueryRepl, ReplCommand, SahayakApp, Screen};
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig, expand_home};
pub use output::console::ConsoleFormatter;
pub use output::messages::{
    failure_message, image_error_message, rejection_message, session_error_message,
    voice_error_message,
};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
