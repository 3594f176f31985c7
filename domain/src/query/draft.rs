//! Input capture: the editable draft behind the query screen.

use super::media::ImageAttachment;
use super::query::Query;
use crate::locale::language::Language;

/// What the user has typed, dictated or attached so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
    image: Option<ImageAttachment>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Option<&ImageAttachment> {
        self.image.as_ref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// A voice transcript replaces whatever was typed.
    pub fn apply_transcript(&mut self, transcript: impl Into<String>) {
        self.text = transcript.into();
    }

    /// Attach an image, replacing any previous one.
    pub fn attach_image(&mut self, image: ImageAttachment) -> Option<ImageAttachment> {
        self.image.replace(image)
    }

    pub fn clear_image(&mut self) -> Option<ImageAttachment> {
        self.image.take()
    }

    /// Snapshot the draft into a query, if it is submittable.
    pub fn to_query(&self, language: Language) -> Option<Query> {
        Query::try_new(self.text.clone(), self.image.clone(), language)
    }

    /// Rebuild a draft from a query (used when leaving a failed submission).
    pub fn from_query(query: &Query) -> Self {
        Self {
            text: query.text().to_string(),
            image: query.image().cloned(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.image.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(name: &str) -> ImageAttachment {
        ImageAttachment::from_bytes(name, b"\x89PNG\r\n\x1a\n".to_vec(), 1024).unwrap()
    }

    #[test]
    fn test_empty_draft_cannot_submit() {
        let draft = Draft::new();
        assert!(draft.to_query(Language::English).is_none());
    }

    #[test]
    fn test_transcript_replaces_text() {
        let mut draft = Draft::new();
        draft.set_text("typed");
        draft.apply_transcript("spoken");
        assert_eq!(draft.text(), "spoken");
    }

    #[test]
    fn test_new_image_replaces_previous() {
        let mut draft = Draft::new();
        assert!(draft.attach_image(png("a.png")).is_none());
        let previous = draft.attach_image(png("b.png")).unwrap();
        assert_eq!(previous.file_name(), "a.png");
        assert_eq!(draft.image().unwrap().file_name(), "b.png");
    }

    #[test]
    fn test_image_alone_is_submittable() {
        let mut draft = Draft::new();
        draft.set_text("   ");
        draft.attach_image(png("a.png"));
        let query = draft.to_query(Language::Malayalam).unwrap();
        assert_eq!(query.text(), "   ");
        assert!(query.has_image());
    }

    #[test]
    fn test_round_trip_through_query_keeps_inputs() {
        let mut draft = Draft::new();
        draft.set_text("Leaf curl on chilli");
        draft.attach_image(png("chilli.png"));
        let query = draft.to_query(Language::English).unwrap();
        assert_eq!(Draft::from_query(&query), draft);
    }
}
