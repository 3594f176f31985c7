//! Locale concepts: the two supported languages and their display text.
//!
//! - [`language::Language`] - session language, fixed per session
//! - [`text::LocaleText`] - static `(Language, TextKey)` → text table

pub mod language;
pub mod text;
