//! HTTP client for the Devnagri machine-translation API.
//!
//! The client is a thin adapter: one form-encoded POST per call, status 200
//! means success, and every other outcome (non-200 status, network failure,
//! malformed body) is normalized into [`Error::Upstream`]. There are no
//! retries, no caching, and no internally-enforced timeout; callers that
//! need cancellation apply their own.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

use devnagri_mcp_core::{ApiConfig, Error, Result, TranslationRequest, TranslationResult};
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::debug;

/// Fixed upstream translation endpoint.
pub const DEVNAGRI_API_URL: &str = "https://api.devnagri.com/machine-translation/v2/translate";

/// Client for the upstream translation API.
///
/// Holds only read-only configuration and a connection pool; safe to share
/// across concurrent tool calls behind an `Arc`.
///
/// # Examples
///
/// ```no_run
/// use devnagri_mcp_client::TranslationClient;
/// use devnagri_mcp_core::{ApiConfig, TranslationRequest, TranslationType};
///
/// # async fn example() -> devnagri_mcp_core::Result<()> {
/// let client = TranslationClient::new(ApiConfig::new("api-key"));
/// let request =
///     TranslationRequest::new("Hello world", "en", "hi", TranslationType::Literal)?;
/// let result = client.translate(&request).await?;
/// println!("{}", result.translated_text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TranslationClient {
    http: reqwest::Client,
    endpoint: String,
    config: ApiConfig,
}

/// Upstream response body.
///
/// Success carries `translated_text`; failure responses carry a `msg` field
/// with the upstream reason.
#[derive(Debug, Deserialize)]
struct UpstreamResponse {
    translated_text: Option<String>,
    msg: Option<String>,
}

impl TranslationClient {
    /// Creates a client against the fixed production endpoint.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self::with_endpoint(config, DEVNAGRI_API_URL)
    }

    /// Creates a client against a custom endpoint.
    ///
    /// Used by tests to point the client at a stub server.
    #[must_use]
    pub fn with_endpoint(config: ApiConfig, endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            config,
        }
    }

    /// Translates the request's source text via the upstream API.
    ///
    /// Makes exactly one upstream attempt. The `translation_type` from the
    /// request is echoed into the result; the upstream API does not consume
    /// it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Upstream`] on any non-200 status, network failure,
    /// or malformed response body. The message includes the upstream-provided
    /// reason when one is available.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        debug!(
            source = %request.source_language,
            target = %request.target_language,
            "sending translation request"
        );

        let form = [
            ("key", self.config.api_key().expose_secret()),
            ("sentence", request.source_text.as_str()),
            ("src_lang", request.source_language.as_str()),
            ("dest_lang", request.target_language.as_str()),
        ];

        let response = self
            .http
            .post(&self.endpoint)
            .form(&form)
            .send()
            .await
            .map_err(|e| Error::Upstream {
                message: format!("network error: {e}"),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| Error::Upstream {
            message: format!("failed to read response from translation API: {e}"),
        })?;

        if status != reqwest::StatusCode::OK {
            // Failure bodies are JSON with a `msg` field when the upstream
            // produced a reason; anything else falls back to a generic one.
            let reason = serde_json::from_str::<UpstreamResponse>(&body)
                .ok()
                .and_then(|r| r.msg)
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(Error::Upstream {
                message: format!("translation API returned {status}: {reason}"),
            });
        }

        let parsed: UpstreamResponse =
            serde_json::from_str(&body).map_err(|e| Error::Upstream {
                message: format!("malformed response from translation API: {e}"),
            })?;

        let translated_text = parsed.translated_text.ok_or_else(|| Error::Upstream {
            message: "translation API response missing translated_text".to_string(),
        })?;

        Ok(TranslationResult {
            translated_text,
            source_language: request.source_language.clone(),
            target_language: request.target_language.clone(),
            translation_type: request.translation_type,
        })
    }
}
