//! Static display text for both supported languages.

use super::language::Language;

/// Identifies one user-visible string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    AppTitle,
    AppSubtitle,
    AppTranslation,
    Tagline,
    ChooseLanguage,
    Continue,
    BackToHome,
    Footer,
    Greeting,
    Instructions,
    TypeQuestion,
    QuestionPlaceholder,
    TapToSpeak,
    Recording,
    UploadPhoto,
    UploadPrompt,
    ImageUploaded,
    UploadDifferent,
    GetAdvice,
    Analyzing,
    YourQuery,
    ImageAttachedNote,
    ExpertAdvice,
    AiPowered,
    AskAnother,
    ContactOfficer,
    OfficerInfo,
    QuestionUpdated,
    ImageRemoved,
    EmptyQuery,
    UnsupportedMedia,
    ImageTooLarge,
    ImageReadFailed,
    ProviderUnavailable,
    ProviderTimeout,
    ProviderInvalidResponse,
    RetryHint,
    StillAnalyzing,
    AnswerShown,
    NotFound,
    VoiceUnavailable,
    NothingToRetry,
    RemoveImage,
    TryAgain,
    EditQuestion,
    ShowHelp,
    Quit,
    Goodbye,
    InvalidChoice,
}

impl TextKey {
    /// Every key, used to check the table is total.
    pub const ALL: [TextKey; 49] = [
        TextKey::AppTitle,
        TextKey::AppSubtitle,
        TextKey::AppTranslation,
        TextKey::Tagline,
        TextKey::ChooseLanguage,
        TextKey::Continue,
        TextKey::BackToHome,
        TextKey::Footer,
        TextKey::Greeting,
        TextKey::Instructions,
        TextKey::TypeQuestion,
        TextKey::QuestionPlaceholder,
        TextKey::TapToSpeak,
        TextKey::Recording,
        TextKey::UploadPhoto,
        TextKey::UploadPrompt,
        TextKey::ImageUploaded,
        TextKey::UploadDifferent,
        TextKey::GetAdvice,
        TextKey::Analyzing,
        TextKey::YourQuery,
        TextKey::ImageAttachedNote,
        TextKey::ExpertAdvice,
        TextKey::AiPowered,
        TextKey::AskAnother,
        TextKey::ContactOfficer,
        TextKey::OfficerInfo,
        TextKey::QuestionUpdated,
        TextKey::ImageRemoved,
        TextKey::EmptyQuery,
        TextKey::UnsupportedMedia,
        TextKey::ImageTooLarge,
        TextKey::ImageReadFailed,
        TextKey::ProviderUnavailable,
        TextKey::ProviderTimeout,
        TextKey::ProviderInvalidResponse,
        TextKey::RetryHint,
        TextKey::StillAnalyzing,
        TextKey::AnswerShown,
        TextKey::NotFound,
        TextKey::VoiceUnavailable,
        TextKey::NothingToRetry,
        TextKey::RemoveImage,
        TextKey::TryAgain,
        TextKey::EditQuestion,
        TextKey::ShowHelp,
        TextKey::Quit,
        TextKey::Goodbye,
        TextKey::InvalidChoice,
    ];

    /// `(english, malayalam)` pair for this key.
    fn pair(self) -> (&'static str, &'static str) {
        match self {
            TextKey::AppTitle => ("Haritha Sahayak", "Haritha Sahayak"),
            TextKey::AppSubtitle => ("ഹരിത സഹായി", "ഹരിത സഹായി"),
            TextKey::AppTranslation => ("Green Assistant", "Green Assistant"),
            TextKey::Tagline => (
                "Your AI-powered farming companion. Get instant expert advice on crops, pests, weather, and more in your preferred language.",
                "Your AI-powered farming companion. Get instant expert advice on crops, pests, weather, and more in your preferred language.",
            ),
            TextKey::ChooseLanguage => (
                "Choose Your Language / ഭാഷ തിരഞ്ഞെടുക്കുക",
                "Choose Your Language / ഭാഷ തിരഞ്ഞെടുക്കുക",
            ),
            TextKey::Continue => ("Continue", "തുടരുക"),
            TextKey::BackToHome => ("Back to Home", "ഹോമിലേക്ക് മടങ്ങുക"),
            TextKey::Footer => (
                "Government of Kerala • Department of Agriculture",
                "Government of Kerala • Department of Agriculture",
            ),
            TextKey::Greeting => (
                "How can I help you today?",
                "ഇന്ന് ഞാൻ നിങ്ങളെ എങ്ങനെ സഹായിക്കാം?",
            ),
            TextKey::Instructions => (
                "Ask questions about crops, pests, weather, fertilizers, or upload a photo of your plant for diagnosis.",
                "വിളകൾ, കീടങ്ങൾ, കാലാവസ്ഥ, വളങ്ങൾ എന്നിവയെക്കുറിച്ച് ചോദ്യങ്ങൾ ചോദിക്കുക അല്ലെങ്കിൽ രോഗനിർണയത്തിനായി നിങ്ങളുടെ ചെടിയുടെ ഫോട്ടോ അപ്‌ലോഡ് ചെയ്യുക.",
            ),
            TextKey::TypeQuestion => (
                "Type Your Question",
                "നിങ്ങളുടെ ചോദ്യം ടൈപ്പ് ചെയ്യുക",
            ),
            TextKey::QuestionPlaceholder => (
                "e.g., My tomato plants have yellow leaves. What should I do?",
                "ഉദാ: എന്റെ തക്കാളി ചെടികളുടെ ഇലകൾ മഞ്ഞയാണ്. എന്ത് ചെയ്യണം?",
            ),
            TextKey::TapToSpeak => ("Tap to speak", "സംസാരിക്കാൻ ടാപ്പ് ചെയ്യുക"),
            TextKey::Recording => (
                "Recording... Tap to stop",
                "റെക്കോർഡിംഗ്... നിർത്താൻ ടാപ്പ് ചെയ്യുക",
            ),
            TextKey::UploadPhoto => (
                "Upload Plant Photo",
                "ചെടിയുടെ ഫോട്ടോ അപ്‌ലോഡ് ചെയ്യുക",
            ),
            TextKey::UploadPrompt => (
                "Upload a photo of your crop or plant",
                "നിങ്ങളുടെ വിളയുടെയോ ചെടിയുടെയോ ഫോട്ടോ അപ്‌ലോഡ് ചെയ്യുക",
            ),
            TextKey::ImageUploaded => (
                "Image uploaded successfully!",
                "ചിത്രം വിജയകരമായി അപ്‌ലോഡ് ചെയ്തു!",
            ),
            TextKey::UploadDifferent => (
                "Upload different image",
                "മറ്റൊരു ചിത്രം അപ്‌ലോഡ് ചെയ്യുക",
            ),
            TextKey::GetAdvice => ("Get Expert Advice", "വിദഗ്ധ ഉപദേശം നേടുക"),
            TextKey::Analyzing => ("Analyzing...", "വിശകലനം ചെയ്യുന്നു..."),
            TextKey::YourQuery => ("Your Query:", "നിങ്ങളുടെ ചോദ്യം:"),
            TextKey::ImageAttachedNote => ("+ Image uploaded", "+ ചിത്രം അപ്‌ലോഡ് ചെയ്തു"),
            TextKey::ExpertAdvice => ("Expert Advice", "വിദഗ്ധ ഉപദേശം"),
            TextKey::AiPowered => ("AI-powered recommendation", "AI-പവർഡ് ശുപാർശ"),
            TextKey::AskAnother => ("Ask Another Question", "മറ്റൊരു ചോദ്യം ചോദിക്കുക"),
            TextKey::ContactOfficer => ("Contact Local Officer", "പ്രാദേശിക ഓഫീസറെ ബന്ധപ്പെടുക"),
            TextKey::OfficerInfo => (
                "Contact your local Krishi Bhavan officer for on-site help.",
                "നേരിട്ടുള്ള സഹായത്തിന് നിങ്ങളുടെ പ്രാദേശിക കൃഷിഭവൻ ഓഫീസറെ ബന്ധപ്പെടുക.",
            ),
            TextKey::QuestionUpdated => ("Question updated.", "ചോദ്യം പുതുക്കി."),
            TextKey::ImageRemoved => ("Image removed.", "ചിത്രം നീക്കം ചെയ്തു."),
            TextKey::EmptyQuery => (
                "Please type a question, use voice input, or attach a photo before asking.",
                "ചോദിക്കുന്നതിന് മുമ്പ് ഒരു ചോദ്യം ടൈപ്പ് ചെയ്യുക, ശബ്ദം ഉപയോഗിക്കുക, അല്ലെങ്കിൽ ഒരു ഫോട്ടോ ചേർക്കുക.",
            ),
            TextKey::UnsupportedMedia => (
                "That file is not an image. Please choose a photo.",
                "ഈ ഫയൽ ഒരു ചിത്രമല്ല. ദയവായി ഒരു ഫോട്ടോ തിരഞ്ഞെടുക്കുക.",
            ),
            TextKey::ImageTooLarge => (
                "That image is too large to upload.",
                "ഈ ചിത്രം അപ്‌ലോഡ് ചെയ്യാൻ വളരെ വലുതാണ്.",
            ),
            TextKey::ImageReadFailed => (
                "Could not read that file.",
                "ആ ഫയൽ വായിക്കാൻ കഴിഞ്ഞില്ല.",
            ),
            TextKey::ProviderUnavailable => (
                "The advice service is unavailable right now.",
                "ഉപദേശ സേവനം ഇപ്പോൾ ലഭ്യമല്ല.",
            ),
            TextKey::ProviderTimeout => (
                "The advice service took too long to respond.",
                "ഉപദേശ സേവനം പ്രതികരിക്കാൻ വളരെ സമയമെടുത്തു.",
            ),
            TextKey::ProviderInvalidResponse => (
                "The advice service sent a response that could not be read.",
                "ഉപദേശ സേവനത്തിൽ നിന്നുള്ള മറുപടി വായിക്കാൻ കഴിഞ്ഞില്ല.",
            ),
            TextKey::RetryHint => (
                "Use /retry to try again or /edit to change your question.",
                "വീണ്ടും ശ്രമിക്കാൻ /retry, ചോദ്യം മാറ്റാൻ /edit ഉപയോഗിക്കുക.",
            ),
            TextKey::StillAnalyzing => (
                "Your question is still being analyzed.",
                "നിങ്ങളുടെ ചോദ്യം ഇപ്പോഴും വിശകലനം ചെയ്യുന്നു.",
            ),
            TextKey::AnswerShown => (
                "Ask another question (/new) before changing the query.",
                "ചോദ്യം മാറ്റുന്നതിന് മുമ്പ് മറ്റൊരു ചോദ്യം ചോദിക്കുക (/new).",
            ),
            TextKey::NotFound => (
                "Page not found. Type /help for available commands.",
                "പേജ് കണ്ടെത്തിയില്ല. ലഭ്യമായ കമാൻഡുകൾക്ക് /help ടൈപ്പ് ചെയ്യുക.",
            ),
            TextKey::VoiceUnavailable => (
                "Voice input is not available right now.",
                "ശബ്ദ ഇൻപുട്ട് ഇപ്പോൾ ലഭ്യമല്ല.",
            ),
            TextKey::NothingToRetry => (
                "There is no failed question to retry.",
                "വീണ്ടും ശ്രമിക്കാൻ പരാജയപ്പെട്ട ചോദ്യമൊന്നുമില്ല.",
            ),
            TextKey::RemoveImage => ("Remove image", "ചിത്രം നീക്കം ചെയ്യുക"),
            TextKey::TryAgain => ("Try again", "വീണ്ടും ശ്രമിക്കുക"),
            TextKey::EditQuestion => ("Edit question", "ചോദ്യം തിരുത്തുക"),
            TextKey::ShowHelp => ("Show commands", "കമാൻഡുകൾ കാണിക്കുക"),
            TextKey::Quit => ("Quit", "പുറത്തുകടക്കുക"),
            TextKey::Goodbye => ("Goodbye!", "വിട!"),
            TextKey::InvalidChoice => (
                "Please choose 1 or 2 / ദയവായി 1 അല്ലെങ്കിൽ 2 തിരഞ്ഞെടുക്കുക",
                "Please choose 1 or 2 / ദയവായി 1 അല്ലെങ്കിൽ 2 തിരഞ്ഞെടുക്കുക",
            ),
        }
    }
}

/// Lookup into the static locale table.
pub struct LocaleText;

impl LocaleText {
    /// Text for `key` in `language`.
    pub fn get(language: Language, key: TextKey) -> &'static str {
        let (english, malayalam) = key.pair();
        match language {
            Language::English => english,
            Language::Malayalam => malayalam,
        }
    }
}
