//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod advice_provider;
pub mod image_source;
pub mod progress;
pub mod voice;
