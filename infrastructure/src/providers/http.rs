//! HTTP advice provider.
//!
//! Posts the query as a multipart form to a remote advice service:
//!
//! ```text
//! POST {endpoint}
//!   text=<question>  language=english|malayalam  image=<file, optional>
//!
//! 200 OK  {"advisoryText": "..."}
//! ```

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use sahayak_application::{AdviceProvider, ProviderError};
use sahayak_domain::Query;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdviceBody {
    advisory_text: String,
}

/// Parse a success body into advisory text.
fn parse_body(body: &[u8]) -> Result<String, ProviderError> {
    let parsed: AdviceBody = serde_json::from_slice(body)
        .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;
    if parsed.advisory_text.trim().is_empty() {
        return Err(ProviderError::InvalidResponse(
            "advisoryText is empty".to_string(),
        ));
    }
    Ok(parsed.advisory_text)
}

fn map_transport_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Unavailable(error.to_string())
    }
}

/// Advice provider backed by a remote HTTP service.
pub struct HttpAdviceProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAdviceProvider {
    pub fn new(
        endpoint: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(query: &Query) -> Result<Form, ProviderError> {
        let mut form = Form::new()
            .text("text", query.text().to_string())
            .text("language", query.language().as_str());

        if let Some(image) = query.image() {
            let part = Part::bytes(image.bytes().to_vec())
                .file_name(image.file_name().to_string())
                .mime_str(image.media_type())
                .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;
            form = form.part("image", part);
        }
        Ok(form)
    }
}

#[async_trait]
impl AdviceProvider for HttpAdviceProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn advise(&self, query: &Query) -> Result<String, ProviderError> {
        let form = Self::build_form(query)?;
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Advice service returned {}", status);
            return Err(ProviderError::Unavailable(format!("HTTP {}", status)));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        parse_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body() {
        let text = parse_body(br#"{"advisoryText": "Spray neem oil"}"#).unwrap();
        assert_eq!(text, "Spray neem oil");
    }

    #[test]
    fn test_parse_body_rejects_missing_or_blank_text() {
        assert!(matches!(
            parse_body(br#"{"advice": "x"}"#),
            Err(ProviderError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_body(br#"{"advisoryText": "  "}"#),
            Err(ProviderError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_body(b"<html>"),
            Err(ProviderError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_unavailable() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let provider =
            HttpAdviceProvider::new("http://127.0.0.1:9/advice", Duration::from_secs(2)).unwrap();
        let query = Query::try_new("Leaf curl", None, sahayak_domain::Language::English).unwrap();

        let err = provider.advise(&query).await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Unavailable(_) | ProviderError::Timeout
        ));
    }
}
