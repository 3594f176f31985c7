//! Query Session use case.
//!
//! Drives one [`SessionState`] against an [`AdviceProvider`]:
//!
//! 1. Validate the draft and enter `Submitting` (under the lock)
//! 2. Call the provider with a timeout, racing a cancellation token
//! 3. Record the result as `Completed` / `Failed` (under the lock)
//!
//! The lock is never held across an `.await`. A `reset()` while a call is
//! in flight cancels it, and any result that still arrives is discarded
//! because its [`Ticket`] is no longer current.

use crate::config::SubmissionConfig;
use crate::ports::advice_provider::{AdviceProvider, ProviderError};
use crate::ports::image_source::{ImageSource, ImageSourceError};
use crate::ports::progress::SubmissionProgress;
use crate::ports::voice::{VoiceError, VoiceTranscriber};
use sahayak_domain::{
    AdvisoryResponse, ImageAttachment, Language, Query, SessionError, SessionState,
    SubmissionFailure, SubmitRejection, Ticket,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Result of a submit or retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The provider answered; the session is now `Completed`.
    Completed(AdvisoryResponse),
    /// The provider failed; the session is now `Failed` and can be retried.
    Failed(SubmissionFailure),
    /// The submission was not accepted; the session is unchanged.
    Rejected(SubmitRejection),
    /// The submission was abandoned (reset) before its result arrived.
    Discarded,
}

impl SubmitOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SubmitOutcome::Completed(_))
    }
}

/// Errors from capturing voice input into the draft.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoiceInputError {
    #[error(transparent)]
    Voice(#[from] VoiceError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors from attaching an image to the draft.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageInputError {
    #[error(transparent)]
    Source(#[from] ImageSourceError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

struct Inner {
    state: SessionState,
    in_flight: Option<(Ticket, CancellationToken)>,
}

/// One user's session: language, draft, and submission lifecycle.
pub struct QuerySession {
    inner: Mutex<Inner>,
    provider: Arc<dyn AdviceProvider>,
    config: SubmissionConfig,
}

impl QuerySession {
    pub fn new(language: Language, provider: Arc<dyn AdviceProvider>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: SessionState::new(language),
                in_flight: None,
            }),
            provider,
            config: SubmissionConfig::default(),
        }
    }

    /// Set submission parameters.
    pub fn with_config(mut self, config: SubmissionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SubmissionConfig {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current session state, for rendering.
    pub fn snapshot(&self) -> SessionState {
        self.lock().state.clone()
    }

    pub fn language(&self) -> Language {
        self.lock().state.language()
    }

    // ==================== Input Capture ====================

    pub fn set_text(&self, text: impl Into<String>) -> Result<(), SessionError> {
        self.lock().state.set_text(text)
    }

    pub fn attach_image(&self, image: ImageAttachment) -> Result<(), SessionError> {
        debug!(
            "Attaching image {} ({}, {} bytes)",
            image.file_name(),
            image.media_type(),
            image.size()
        );
        self.lock().state.attach_image(image)
    }

    /// Remove the attached image. Returns whether one was attached.
    pub fn clear_image(&self) -> Result<bool, SessionError> {
        self.lock().state.clear_image()
    }

    /// Record a question by voice; the transcript replaces the draft text.
    pub async fn apply_voice(
        &self,
        transcriber: &dyn VoiceTranscriber,
    ) -> Result<String, VoiceInputError> {
        let language = self.ensure_editable()?;

        let transcript = transcriber.transcribe(language).await?;
        self.lock().state.apply_transcript(transcript.clone())?;
        debug!("Voice transcript applied ({} chars)", transcript.chars().count());
        Ok(transcript)
    }

    /// Load an image from `location` and attach it, replacing any previous one.
    ///
    /// On any error the draft is left unchanged.
    pub async fn attach_from(
        &self,
        source: &dyn ImageSource,
        location: &str,
    ) -> Result<ImageAttachment, ImageInputError> {
        self.ensure_editable()?;
        let image = source.load(location).await?;
        self.attach_image(image.clone())?;
        Ok(image)
    }

    fn ensure_editable(&self) -> Result<Language, SessionError> {
        let inner = self.lock();
        if inner.state.is_submitting() {
            return Err(SessionError::Busy);
        }
        if !inner.state.is_idle() {
            return Err(SessionError::NotEditable);
        }
        Ok(inner.state.language())
    }

    // ==================== Submission ====================

    /// Submit the current draft.
    ///
    /// While a submission is in flight this is a no-op returning
    /// `Rejected(InFlight)`; the provider is not called again.
    pub async fn submit(&self, progress: &dyn SubmissionProgress) -> SubmitOutcome {
        let started = {
            let mut inner = self.lock();
            match inner.state.begin_submit() {
                Ok((ticket, query)) => {
                    let token = CancellationToken::new();
                    inner.in_flight = Some((ticket, token.clone()));
                    (ticket, query, token)
                }
                Err(rejection) => {
                    debug!("Submission rejected: {}", rejection);
                    return SubmitOutcome::Rejected(rejection);
                }
            }
        };

        let (ticket, query, token) = started;
        self.run(ticket, query, token, progress).await
    }

    /// Resubmit the query of a failed submission unchanged.
    pub async fn retry(
        &self,
        progress: &dyn SubmissionProgress,
    ) -> Result<SubmitOutcome, SessionError> {
        let (ticket, query, token) = {
            let mut inner = self.lock();
            let (ticket, query) = inner.state.retry()?;
            let token = CancellationToken::new();
            inner.in_flight = Some((ticket, token.clone()));
            (ticket, query, token)
        };

        info!("Retrying submission as #{}", ticket.value());
        Ok(self.run(ticket, query, token, progress).await)
    }

    async fn run(
        &self,
        ticket: Ticket,
        query: Query,
        token: CancellationToken,
        progress: &dyn SubmissionProgress,
    ) -> SubmitOutcome {
        info!(
            "Submission #{} to '{}' provider (language: {}, image: {})",
            ticket.value(),
            self.provider.name(),
            query.language(),
            query.has_image()
        );
        progress.on_submit_start(&query);

        let result = tokio::select! {
            _ = token.cancelled() => Err(ProviderError::Cancelled),
            timed = tokio::time::timeout(self.config.timeout, self.provider.advise(&query)) => {
                timed.unwrap_or(Err(ProviderError::Timeout))
            }
        };

        let (outcome, phase) = {
            let mut inner = self.lock();
            if inner
                .in_flight
                .as_ref()
                .is_some_and(|(current, _)| *current == ticket)
            {
                inner.in_flight = None;
            }
            let outcome = Self::settle(&mut inner.state, ticket, result);
            (outcome, inner.state.phase().clone())
        };

        progress.on_submit_end(&phase);
        outcome
    }

    fn settle(
        state: &mut SessionState,
        ticket: Ticket,
        result: Result<String, ProviderError>,
    ) -> SubmitOutcome {
        match result {
            Ok(text) => {
                let response = AdvisoryResponse::new(text);
                match state.complete(ticket, response.clone()) {
                    Ok(()) => {
                        info!(
                            "Submission #{} completed ({} bytes)",
                            ticket.value(),
                            response.text().len()
                        );
                        SubmitOutcome::Completed(response)
                    }
                    Err(e) => {
                        debug!("Dropping result of submission #{}: {}", ticket.value(), e);
                        SubmitOutcome::Discarded
                    }
                }
            }
            Err(error) => {
                let Some(failure) = error.to_failure() else {
                    debug!("Submission #{} cancelled", ticket.value());
                    return SubmitOutcome::Discarded;
                };
                match state.fail(ticket, failure.clone()) {
                    Ok(()) => {
                        warn!("Submission #{} failed: {}", ticket.value(), failure);
                        SubmitOutcome::Failed(failure)
                    }
                    Err(e) => {
                        debug!("Dropping failure of submission #{}: {}", ticket.value(), e);
                        SubmitOutcome::Discarded
                    }
                }
            }
        }
    }

    /// Leave a failed submission and go back to editing its query.
    pub fn edit(&self) -> Result<(), SessionError> {
        self.lock().state.edit()
    }

    /// "Ask another question": clear text, image and response together.
    ///
    /// An in-flight provider call is cancelled and its result discarded.
    pub fn reset(&self) {
        let mut inner = self.lock();
        if let Some(abandoned) = inner.state.reset() {
            info!("Abandoning submission #{}", abandoned.value());
        }
        if let Some((_, token)) = inner.in_flight.take() {
            token.cancel();
        }
    }
}
