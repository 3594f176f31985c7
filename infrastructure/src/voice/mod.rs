//! Voice input adapters

pub mod simulated;

pub use simulated::SimulatedTranscriber;
