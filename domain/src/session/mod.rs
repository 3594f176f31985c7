//! Session: the per-user state carried from language selection through
//! zero or more query/response cycles.
//!
//! - [`state::SessionState`] - the submission state machine
//! - [`response::AdvisoryResponse`] - advice returned for a query

pub mod response;
pub mod state;
