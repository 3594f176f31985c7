//! Progress notification port
//!
//! Defines the interface for reporting a submission's pending state.

use sahayak_domain::{Query, SubmissionPhase};

/// Callback for progress updates while a query is being answered
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, etc.)
pub trait SubmissionProgress: Send + Sync {
    /// Called once the submission is accepted and the provider is invoked
    fn on_submit_start(&self, query: &Query);

    /// Called when the submission settles; `phase` is the resulting phase
    fn on_submit_end(&self, phase: &SubmissionPhase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SubmissionProgress for NoProgress {
    fn on_submit_start(&self, _query: &Query) {}
    fn on_submit_end(&self, _phase: &SubmissionPhase) {}
}
