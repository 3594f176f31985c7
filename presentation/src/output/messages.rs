//! Localized user messages for errors and rejections

use sahayak_application::{ImageSourceError, VoiceError};
use sahayak_domain::{
    Language, LocaleText, MediaError, SessionError, SubmissionFailure, SubmitRejection, TextKey,
};

pub fn failure_message(language: Language, failure: &SubmissionFailure) -> &'static str {
    let key = match failure {
        SubmissionFailure::Unavailable(_) => TextKey::ProviderUnavailable,
        SubmissionFailure::Timeout => TextKey::ProviderTimeout,
        SubmissionFailure::InvalidResponse(_) => TextKey::ProviderInvalidResponse,
    };
    LocaleText::get(language, key)
}

pub fn rejection_message(language: Language, rejection: &SubmitRejection) -> &'static str {
    let key = match rejection {
        SubmitRejection::InvalidQuery => TextKey::EmptyQuery,
        SubmitRejection::InFlight => TextKey::StillAnalyzing,
        SubmitRejection::NotIdle => TextKey::AnswerShown,
    };
    LocaleText::get(language, key)
}

pub fn session_error_message(language: Language, error: &SessionError) -> &'static str {
    let key = match error {
        SessionError::Busy => TextKey::StillAnalyzing,
        SessionError::NotEditable => TextKey::AnswerShown,
        SessionError::NotFailed => TextKey::NothingToRetry,
        // Dropped before reaching the user.
        SessionError::StaleTicket => TextKey::StillAnalyzing,
    };
    LocaleText::get(language, key)
}

pub fn image_error_message(language: Language, error: &ImageSourceError) -> &'static str {
    let key = match error {
        ImageSourceError::Unreadable { .. } => TextKey::ImageReadFailed,
        ImageSourceError::Media(MediaError::TooLarge { .. }) => TextKey::ImageTooLarge,
        ImageSourceError::Media(MediaError::UnsupportedMedia { .. })
        | ImageSourceError::Media(MediaError::Empty { .. }) => TextKey::UnsupportedMedia,
    };
    LocaleText::get(language, key)
}

pub fn voice_error_message(language: Language, _error: &VoiceError) -> &'static str {
    LocaleText::get(language, TextKey::VoiceUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_map_to_distinct_messages() {
        let lang = Language::English;
        let unavailable =
            failure_message(lang, &SubmissionFailure::Unavailable("503".to_string()));
        let timeout = failure_message(lang, &SubmissionFailure::Timeout);
        assert_ne!(unavailable, timeout);
        assert_eq!(timeout, "The advice service took too long to respond.");
    }

    #[test]
    fn test_empty_rejection_is_localized() {
        assert_eq!(
            rejection_message(Language::Malayalam, &SubmitRejection::InvalidQuery),
            LocaleText::get(Language::Malayalam, TextKey::EmptyQuery)
        );
    }

    #[test]
    fn test_image_errors() {
        let too_large = ImageSourceError::Media(MediaError::TooLarge {
            file_name: "big.png".to_string(),
            size: 20,
            limit: 10,
        });
        assert_eq!(
            image_error_message(Language::English, &too_large),
            "That image is too large to upload."
        );

        let unreadable = ImageSourceError::Unreadable {
            path: "x.png".to_string(),
            reason: "denied".to_string(),
        };
        assert_eq!(
            image_error_message(Language::English, &unreadable),
            "Could not read that file."
        );
    }
}
