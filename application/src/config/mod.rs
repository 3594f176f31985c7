//! Application-level configuration.
//!
//! - [`SubmissionConfig`] - provider timeout and empty-input policy

pub mod submission;

pub use submission::{EmptyInputPolicy, SubmissionConfig};
