//! Query value object

use super::media::ImageAttachment;
use crate::locale::language::Language;
use serde::Serialize;

/// A question submitted for advice (Value Object)
///
/// Built from the current [`Draft`](super::draft::Draft) at submission
/// time. A query always carries non-blank text, an image, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    text: String,
    image: Option<ImageAttachment>,
    language: Language,
}

impl Query {
    /// Try to create a query, returning None when text is blank and no
    /// image is attached.
    pub fn try_new(
        text: impl Into<String>,
        image: Option<ImageAttachment>,
        language: Language,
    ) -> Option<Self> {
        let text = text.into();
        if !Self::is_submittable(&text, image.is_some()) {
            return None;
        }
        Some(Self {
            text,
            image,
            language,
        })
    }

    /// The accept/reject predicate for submissions.
    pub fn is_submittable(text: &str, has_image: bool) -> bool {
        !text.trim().is_empty() || has_image
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Option<&ImageAttachment> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.image {
            Some(image) if self.text.trim().is_empty() => write!(f, "[{}]", image.file_name()),
            Some(image) => write!(f, "{} [{}]", self.text, image.file_name()),
            None => write!(f, "{}", self.text),
        }
    }
}
