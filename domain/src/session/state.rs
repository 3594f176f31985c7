//! Query submission state machine.
//!
//! ```text
//!            begin_submit            complete
//!   Idle ───────────────▶ Submitting ─────────▶ Completed
//!    ▲  ▲                  │    ▲                   │
//!    │  │ reset            │fail│ retry             │ reset
//!    │  └──────────────────┤    │                   │
//!    │       edit/reset    ▼    │                   │
//!    └──────────────────── Failed                   │
//!    └──────────────────────────────────────────────┘
//! ```
//!
//! Every accepted submission is stamped with a [`Ticket`]. Results are
//! only applied when they carry the ticket of the submission currently in
//! flight, so a result arriving after a reset is dropped.

use super::response::{AdvisoryResponse, SubmissionFailure};
use crate::locale::language::Language;
use crate::query::draft::Draft;
use crate::query::media::ImageAttachment;
use crate::query::query::Query;
use serde::Serialize;
use thiserror::Error;

/// Identifies one accepted submission within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Why a submit request was not accepted. State is left unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    #[error("Nothing to submit: enter a question or attach an image")]
    InvalidQuery,

    #[error("A submission is already in progress")]
    InFlight,

    #[error("A result is being shown; start a new query first")]
    NotIdle,
}

/// Errors for session operations other than submit.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("Input is locked while a submission is in progress")]
    Busy,

    #[error("Input cannot be edited while a result is shown")]
    NotEditable,

    #[error("No failed submission to retry or edit")]
    NotFailed,

    #[error("Result belongs to a submission that is no longer current")]
    StaleTicket,
}

/// Current step of the submission lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SubmissionPhase {
    Idle,
    Submitting {
        query: Query,
        ticket: Ticket,
    },
    Completed {
        query: Query,
        response: AdvisoryResponse,
    },
    Failed {
        query: Query,
        failure: SubmissionFailure,
    },
}

impl SubmissionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Submitting { .. } => "submitting",
            SubmissionPhase::Completed { .. } => "completed",
            SubmissionPhase::Failed { .. } => "failed",
        }
    }
}

/// Everything one session owns: its language, the draft being composed,
/// and where the current submission stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    language: Language,
    draft: Draft,
    phase: SubmissionPhase,
    next_ticket: u64,
}

impl SessionState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            draft: Draft::new(),
            phase: SubmissionPhase::Idle,
            next_ticket: 1,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Submitting { .. })
    }

    /// Query of the current (or last settled) submission, if any.
    pub fn query(&self) -> Option<&Query> {
        match &self.phase {
            SubmissionPhase::Idle => None,
            SubmissionPhase::Submitting { query, .. }
            | SubmissionPhase::Completed { query, .. }
            | SubmissionPhase::Failed { query, .. } => Some(query),
        }
    }

    pub fn response(&self) -> Option<&AdvisoryResponse> {
        match &self.phase {
            SubmissionPhase::Completed { response, .. } => Some(response),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&SubmissionFailure> {
        match &self.phase {
            SubmissionPhase::Failed { failure, .. } => Some(failure),
            _ => None,
        }
    }

    // ==================== Input Capture ====================

    fn ensure_editable(&self) -> Result<(), SessionError> {
        match self.phase {
            SubmissionPhase::Idle => Ok(()),
            SubmissionPhase::Submitting { .. } => Err(SessionError::Busy),
            SubmissionPhase::Completed { .. } | SubmissionPhase::Failed { .. } => {
                Err(SessionError::NotEditable)
            }
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_editable()?;
        self.draft.set_text(text);
        Ok(())
    }

    pub fn apply_transcript(&mut self, transcript: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_editable()?;
        self.draft.apply_transcript(transcript);
        Ok(())
    }

    pub fn attach_image(&mut self, image: ImageAttachment) -> Result<(), SessionError> {
        self.ensure_editable()?;
        self.draft.attach_image(image);
        Ok(())
    }

    pub fn clear_image(&mut self) -> Result<bool, SessionError> {
        self.ensure_editable()?;
        Ok(self.draft.clear_image().is_some())
    }

    // ==================== Transitions ====================

    fn issue_ticket(&mut self) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }

    /// `Idle → Submitting`, if the draft is submittable.
    pub fn begin_submit(&mut self) -> Result<(Ticket, Query), SubmitRejection> {
        match self.phase {
            SubmissionPhase::Idle => {}
            SubmissionPhase::Submitting { .. } => return Err(SubmitRejection::InFlight),
            SubmissionPhase::Completed { .. } | SubmissionPhase::Failed { .. } => {
                return Err(SubmitRejection::NotIdle);
            }
        }

        let query = self
            .draft
            .to_query(self.language)
            .ok_or(SubmitRejection::InvalidQuery)?;
        let ticket = self.issue_ticket();
        self.phase = SubmissionPhase::Submitting {
            query: query.clone(),
            ticket,
        };
        Ok((ticket, query))
    }

    fn take_in_flight(&mut self, ticket: Ticket) -> Result<Query, SessionError> {
        match std::mem::replace(&mut self.phase, SubmissionPhase::Idle) {
            SubmissionPhase::Submitting {
                query,
                ticket: current,
            } if current == ticket => Ok(query),
            other => {
                self.phase = other;
                Err(SessionError::StaleTicket)
            }
        }
    }

    /// `Submitting → Completed`.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        response: AdvisoryResponse,
    ) -> Result<(), SessionError> {
        let query = self.take_in_flight(ticket)?;
        self.phase = SubmissionPhase::Completed { query, response };
        Ok(())
    }

    /// `Submitting → Failed`. The query is retained for retry.
    pub fn fail(&mut self, ticket: Ticket, failure: SubmissionFailure) -> Result<(), SessionError> {
        let query = self.take_in_flight(ticket)?;
        self.phase = SubmissionPhase::Failed { query, failure };
        Ok(())
    }

    /// `Failed → Submitting` with the same query.
    pub fn retry(&mut self) -> Result<(Ticket, Query), SessionError> {
        let query = match &self.phase {
            SubmissionPhase::Failed { query, .. } => query.clone(),
            _ => return Err(SessionError::NotFailed),
        };
        let ticket = self.issue_ticket();
        self.phase = SubmissionPhase::Submitting {
            query: query.clone(),
            ticket,
        };
        Ok((ticket, query))
    }

    /// `Failed → Idle`, restoring the failed query into the draft.
    pub fn edit(&mut self) -> Result<(), SessionError> {
        match std::mem::replace(&mut self.phase, SubmissionPhase::Idle) {
            SubmissionPhase::Failed { query, .. } => {
                self.draft = Draft::from_query(&query);
                Ok(())
            }
            other => {
                self.phase = other;
                Err(SessionError::NotFailed)
            }
        }
    }

    /// "Ask another question": back to `Idle` with text, image and
    /// response all cleared together.
    ///
    /// Returns the ticket of a submission that was abandoned mid-flight.
    pub fn reset(&mut self) -> Option<Ticket> {
        let abandoned = match self.phase {
            SubmissionPhase::Submitting { ticket, .. } => Some(ticket),
            _ => None,
        };
        self.draft = Draft::new();
        self.phase = SubmissionPhase::Idle;
        abandoned
    }
}
