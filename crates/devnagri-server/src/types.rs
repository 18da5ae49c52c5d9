//! Parameter and result types for the MCP tool surface.
//!
//! This module defines the wire types for the three tools:
//! - `translate`: translate text between languages
//! - `detect_language`: script-based language detection
//! - `list_supported_languages`: enumerate the supported-language table

use devnagri_mcp_core::{SupportedLanguage, TranslationType};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `translate` tool.
///
/// # Examples
///
/// ```
/// use devnagri_mcp_server::types::TranslateParams;
/// use devnagri_mcp_core::TranslationType;
///
/// let params = TranslateParams {
///     source_text: "Hello world".to_string(),
///     source_language: "en".to_string(),
///     target_language: "hi".to_string(),
///     translation_type: TranslationType::Literal,
/// };
/// ```
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TranslateParams {
    /// The text to be translated
    pub source_text: String,

    /// The source language code (e.g., "en")
    pub source_language: String,

    /// The target language code (e.g., "hi")
    pub target_language: String,

    /// Type of translation requested (defaults to "literal")
    #[serde(default)]
    pub translation_type: TranslationType,
}

/// Parameters for the `detect_language` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DetectLanguageParams {
    /// The text for language detection
    pub text: String,
}

/// Result of the `list_supported_languages` tool.
#[derive(Debug, Serialize)]
pub struct ListSupportedLanguagesResult {
    /// Entries from the static supported-language table
    pub languages: &'static [SupportedLanguage],

    /// Total number of supported languages
    pub total_languages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_params_default_translation_type() {
        let params: TranslateParams = serde_json::from_value(serde_json::json!({
            "source_text": "Hello",
            "source_language": "en",
            "target_language": "hi"
        }))
        .unwrap();
        assert_eq!(params.translation_type, TranslationType::Literal);
    }

    #[test]
    fn test_translate_params_explicit_translation_type() {
        let params: TranslateParams = serde_json::from_value(serde_json::json!({
            "source_text": "Hello",
            "source_language": "en",
            "target_language": "hi",
            "translation_type": "base"
        }))
        .unwrap();
        assert_eq!(params.translation_type, TranslationType::Base);
    }

    #[test]
    fn test_listing_result_serializes_entries() {
        let result = ListSupportedLanguagesResult {
            languages: devnagri_mcp_core::languages::supported_languages(),
            total_languages: devnagri_mcp_core::languages::supported_languages().len(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json["languages"].as_array().unwrap().len(),
            usize::try_from(json["total_languages"].as_u64().unwrap()).unwrap()
        );
        assert_eq!(json["languages"][0]["code"], "hi");
    }
}
