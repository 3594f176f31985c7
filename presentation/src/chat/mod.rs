//! Interactive screens: language landing and the query REPL

pub mod app;
pub mod command;
pub mod landing;
pub mod repl;

pub use app::{SahayakApp, Screen};
pub use command::ReplCommand;
pub use landing::LandingScreen;
pub use repl::{Flow, QueryRepl, Reply};
