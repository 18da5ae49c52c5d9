//! MCP service implementation for the translation tools.
//!
//! The `TranslatorService` exposes three tools:
//! 1. `translate` - translate text via the upstream Devnagri API
//! 2. `detect_language` - script-based language detection, no I/O
//! 3. `list_supported_languages` - enumerate the supported-language table
//!
//! Each call is independent and stateless; the service holds only the
//! read-only API client behind an `Arc`. Tool results are returned as a
//! single pretty-printed JSON text block.

use crate::types::{DetectLanguageParams, ListSupportedLanguagesResult, TranslateParams};
use devnagri_mcp_client::TranslationClient;
use devnagri_mcp_core::{TranslationRequest, detect, languages};
use rmcp::handler::server::ServerHandler;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{ErrorData as McpError, tool, tool_handler, tool_router};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

/// MCP server for Devnagri translation services.
///
/// # Examples
///
/// ```no_run
/// use devnagri_mcp_client::TranslationClient;
/// use devnagri_mcp_core::ApiConfig;
/// use devnagri_mcp_server::service::TranslatorService;
/// use rmcp::ServiceExt;
/// use rmcp::transport::stdio;
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = TranslationClient::new(ApiConfig::new("api-key"));
/// let service = TranslatorService::new(client).serve(stdio()).await?;
/// service.waiting().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TranslatorService {
    /// Upstream API client (read-only configuration, shared across calls)
    client: Arc<TranslationClient>,

    /// Tool router for the MCP protocol
    tool_router: ToolRouter<Self>,
}

impl TranslatorService {
    /// Creates a new translator service around an API client.
    #[must_use]
    pub fn new(client: TranslationClient) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl TranslatorService {
    /// Translate text from a source language to a target language.
    ///
    /// Argument validation happens here at the boundary; the upstream call
    /// makes exactly one attempt and its failure is surfaced verbatim.
    #[tool(
        description = "Translate text from a source language to a target language using the Devnagri machine-translation API. Language codes follow list_supported_languages (e.g., \"en\", \"hi\")."
    )]
    async fn translate(
        &self,
        Parameters(params): Parameters<TranslateParams>,
    ) -> Result<CallToolResult, McpError> {
        let request = TranslationRequest::new(
            params.source_text,
            params.source_language,
            params.target_language,
            params.translation_type,
        )
        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        info!(
            source = %request.source_language,
            target = %request.target_language,
            "translating"
        );

        let result = self.client.translate(&request).await.map_err(|e| {
            error!("translation failed: {e}");
            McpError::internal_error(e.to_string(), None)
        })?;

        to_text_result(&result)
    }

    /// Detect the language of a text by its dominant Unicode script.
    #[tool(
        description = "Detect the language of a text using script-based analysis. Returns the detected language code, a confidence score in [0, 1], and whether the language is supported for translation."
    )]
    async fn detect_language(
        &self,
        Parameters(params): Parameters<DetectLanguageParams>,
    ) -> Result<CallToolResult, McpError> {
        info!("detecting language");
        let result = detect::detect(&params.text);
        to_text_result(&result)
    }

    /// List all languages supported by the translation service.
    #[tool(
        description = "List all languages supported by the translation service, with English name, native name, and language code."
    )]
    async fn list_supported_languages(&self) -> Result<CallToolResult, McpError> {
        info!("listing supported languages");
        let languages = languages::supported_languages();
        let result = ListSupportedLanguagesResult {
            languages,
            total_languages: languages.len(),
        };
        to_text_result(&result)
    }
}

#[tool_handler]
impl ServerHandler for TranslatorService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Translation service with a focus on Indic languages. Use translate \
                 to convert text between languages, detect_language to identify the \
                 language of a text, and list_supported_languages to see valid \
                 language codes."
                    .to_string(),
            ),
        }
    }
}

/// Serializes a tool result as a single pretty-printed JSON text block.
fn to_text_result<T: Serialize>(result: &T) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(result).map_err(|e| {
            McpError::internal_error(format!("Failed to serialize result: {e}"), None)
        })?,
    )]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use devnagri_mcp_core::ApiConfig;
    use rmcp::model::ErrorCode;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_service() -> TranslatorService {
        TranslatorService::new(TranslationClient::new(ApiConfig::new("test-key")))
    }

    /// Extracts the JSON payload from a single-text-block tool result.
    fn payload(result: &CallToolResult) -> serde_json::Value {
        let value = serde_json::to_value(result).unwrap();
        let text = value["content"][0]["text"].as_str().unwrap();
        serde_json::from_str(text).unwrap()
    }

    #[tokio::test]
    async fn test_detect_language_tool_english() {
        let service = test_service();
        let result = service
            .detect_language(Parameters(DetectLanguageParams {
                text: "Hello world".to_string(),
            }))
            .await
            .unwrap();

        let json = payload(&result);
        assert_eq!(json["detected_language"], "en");
        assert_eq!(json["supported"], true);
        assert!(json["confidence_score"].as_f64().unwrap() > 0.0);
    }

    #[tokio::test]
    async fn test_detect_language_tool_empty_text_is_well_formed() {
        let service = test_service();
        let result = service
            .detect_language(Parameters(DetectLanguageParams {
                text: String::new(),
            }))
            .await
            .unwrap();

        let json = payload(&result);
        assert!(json["confidence_score"].as_f64().unwrap().abs() < f64::EPSILON);
        assert!(json["detected_language"].is_string());
    }

    #[tokio::test]
    async fn test_list_supported_languages_tool() {
        let service = test_service();
        let first = payload(&service.list_supported_languages().await.unwrap());
        let second = payload(&service.list_supported_languages().await.unwrap());

        assert_eq!(first, second);
        assert_eq!(
            first["languages"].as_array().unwrap().len(),
            languages::supported_languages().len()
        );
        assert!(
            first["languages"]
                .as_array()
                .unwrap()
                .iter()
                .any(|l| l["code"] == "hi")
        );
    }

    #[tokio::test]
    async fn test_translate_tool_rejects_empty_text() {
        let service = test_service();
        let err = service
            .translate(Parameters(TranslateParams {
                source_text: String::new(),
                source_language: "en".to_string(),
                target_language: "hi".to_string(),
                translation_type: devnagri_mcp_core::TranslationType::Literal,
            }))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("source_text"));
    }

    #[tokio::test]
    async fn test_translate_tool_happy_path_against_stub() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "translated_text": "नमस्ते दुनिया" })),
            )
            .mount(&upstream)
            .await;

        let client = TranslationClient::with_endpoint(ApiConfig::new("test-key"), upstream.uri());
        let service = TranslatorService::new(client);

        let result = service
            .translate(Parameters(TranslateParams {
                source_text: "Hello world".to_string(),
                source_language: "en".to_string(),
                target_language: "hi".to_string(),
                translation_type: devnagri_mcp_core::TranslationType::Literal,
            }))
            .await
            .unwrap();

        let json = payload(&result);
        assert_eq!(json["translated_text"], "नमस्ते दुनिया");
        assert_eq!(json["source_language"], "en");
        assert_eq!(json["target_language"], "hi");
        assert_eq!(json["translation_type"], "literal");
    }

    #[tokio::test]
    async fn test_translate_tool_surfaces_upstream_failure() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({ "msg": "service unavailable" })),
            )
            .mount(&upstream)
            .await;

        let client = TranslationClient::with_endpoint(ApiConfig::new("test-key"), upstream.uri());
        let service = TranslatorService::new(client);

        let err = service
            .translate(Parameters(TranslateParams {
                source_text: "Hello world".to_string(),
                source_language: "en".to_string(),
                target_language: "hi".to_string(),
                translation_type: devnagri_mcp_core::TranslationType::Literal,
            }))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("service unavailable"));
    }

    #[tokio::test]
    async fn test_translate_tool_rejects_bad_language_code() {
        let service = test_service();
        let err = service
            .translate(Parameters(TranslateParams {
                source_text: "Hello".to_string(),
                source_language: "e".to_string(),
                target_language: "hi".to_string(),
                translation_type: devnagri_mcp_core::TranslationType::Literal,
            }))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("source_language"));
    }
}
