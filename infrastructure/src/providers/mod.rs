//! Advice provider adapters
//!
//! - [`canned::CannedAdviceProvider`] - fixed per-language advisory after a delay
//! - `http::HttpAdviceProvider` - remote advice service (feature `http-provider`)

pub mod canned;
#[cfg(feature = "http-provider")]
pub mod http;

pub use canned::CannedAdviceProvider;
#[cfg(feature = "http-provider")]
pub use http::HttpAdviceProvider;

use crate::config::{FileProviderConfig, ProviderKind};
use sahayak_application::{AdviceProvider, ProviderError};
use std::sync::Arc;
use std::time::Duration;

/// Build the advice provider selected by the `[provider]` section.
pub fn provider_from_config(
    config: &FileProviderConfig,
) -> Result<Arc<dyn AdviceProvider>, ProviderError> {
    match config.kind {
        ProviderKind::Canned => Ok(Arc::new(
            CannedAdviceProvider::new().with_delay(Duration::from_millis(config.delay_ms)),
        )),
        ProviderKind::Http => http_provider(config),
    }
}

#[cfg(feature = "http-provider")]
fn http_provider(config: &FileProviderConfig) -> Result<Arc<dyn AdviceProvider>, ProviderError> {
    let endpoint = config
        .endpoint
        .as_deref()
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| ProviderError::Unavailable("provider.endpoint is not set".to_string()))?;
    let provider = HttpAdviceProvider::new(
        endpoint,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    Ok(Arc::new(provider))
}

#[cfg(not(feature = "http-provider"))]
fn http_provider(_config: &FileProviderConfig) -> Result<Arc<dyn AdviceProvider>, ProviderError> {
    Err(ProviderError::Unavailable(
        "built without the http-provider feature".to_string(),
    ))
}
