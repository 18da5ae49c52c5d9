//! Domain types for translation and language detection.
//!
//! All entities here are constructed per call and discarded after the
//! response; nothing outlives a single request.

use crate::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Language code length bounds (inclusive).
///
/// Covers plain ISO 639-1 codes ("en"), region-tagged codes ("zh-CN"), and
/// the longer provider-specific codes ("snthl", "zh-TW").
const CODE_MIN_LEN: usize = 2;
const CODE_MAX_LEN: usize = 7;

/// Kind of translation requested from the upstream API.
///
/// Carried through request and result unchanged; the upstream endpoint does
/// not currently consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TranslationType {
    /// Literal, word-faithful translation (the default).
    #[default]
    Literal,
    /// Base translation, allowing freer phrasing.
    Base,
}

/// A validated translation request.
///
/// Construct via [`TranslationRequest::new`], which enforces the argument
/// contract: non-empty source text and language codes of 2-7 characters.
///
/// # Examples
///
/// ```
/// use devnagri_mcp_core::{TranslationRequest, TranslationType};
///
/// let request = TranslationRequest::new(
///     "Hello world",
///     "en",
///     "hi",
///     TranslationType::Literal,
/// )
/// .unwrap();
///
/// assert_eq!(request.source_language, "en");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// The text to be translated
    pub source_text: String,

    /// The source language code (e.g., "en")
    pub source_language: String,

    /// The target language code (e.g., "hi")
    pub target_language: String,

    /// Type of translation requested
    pub translation_type: TranslationType,
}

impl TranslationRequest {
    /// Creates a validated translation request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the offending field if the source
    /// text is empty or either language code falls outside the 2-7 character
    /// bounds.
    pub fn new(
        source_text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        translation_type: TranslationType,
    ) -> Result<Self> {
        let source_text = source_text.into();
        let source_language = source_language.into();
        let target_language = target_language.into();

        if source_text.trim().is_empty() {
            return Err(Error::Validation {
                field: "source_text".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        validate_language_code("source_language", &source_language)?;
        validate_language_code("target_language", &target_language)?;

        Ok(Self {
            source_text,
            source_language,
            target_language,
            translation_type,
        })
    }
}

/// Result of a completed translation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TranslationResult {
    /// The translated text returned by the upstream API
    pub translated_text: String,

    /// The source language code from the request
    pub source_language: String,

    /// The target language code from the request
    pub target_language: String,

    /// Type of translation that was requested
    pub translation_type: TranslationType,
}

/// Result of script-based language detection.
///
/// `confidence_score` is the winning script's raw character count divided by
/// the total character count of the input. It is not normalized against
/// competing scripts, so whitespace and punctuation pull it down even for a
/// clear winner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LanguageDetectionResult {
    /// Detected language code (e.g., "hi")
    pub detected_language: String,

    /// Ratio of matched characters to total characters, in `[0, 1]`
    pub confidence_score: f64,

    /// Whether the detected code appears in the supported-language table
    pub supported: bool,
}

/// An entry in the static supported-language table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportedLanguage {
    /// English display name (e.g., "Hindi")
    pub name: &'static str,

    /// Native-script name (e.g., "हिंदी")
    pub native_name: &'static str,

    /// Language code accepted by the upstream API (e.g., "hi")
    pub code: &'static str,
}

fn validate_language_code(field: &str, code: &str) -> Result<()> {
    let len = code.chars().count();
    if !(CODE_MIN_LEN..=CODE_MAX_LEN).contains(&len) {
        return Err(Error::Validation {
            field: field.to_string(),
            reason: format!("language code must be {CODE_MIN_LEN}-{CODE_MAX_LEN} characters"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_valid_arguments() {
        let request =
            TranslationRequest::new("Hello world", "en", "hi", TranslationType::default());
        assert!(request.is_ok());
    }

    #[test]
    fn test_request_rejects_empty_text() {
        let err = TranslationRequest::new("   ", "en", "hi", TranslationType::Literal).unwrap_err();
        assert!(err.is_validation_error());
        assert!(err.to_string().contains("source_text"));
    }

    #[test]
    fn test_request_rejects_short_language_code() {
        let err = TranslationRequest::new("Hello", "e", "hi", TranslationType::Literal).unwrap_err();
        assert!(err.is_validation_error());
        assert!(err.to_string().contains("source_language"));
    }

    #[test]
    fn test_request_rejects_long_language_code() {
        let err = TranslationRequest::new("Hello", "en", "mni-Mtei-x", TranslationType::Literal)
            .unwrap_err();
        assert!(err.is_validation_error());
        assert!(err.to_string().contains("target_language"));
    }

    #[test]
    fn test_request_accepts_region_tagged_code() {
        let request = TranslationRequest::new("Hello", "en", "zh-CN", TranslationType::Base);
        assert!(request.is_ok());
    }

    #[test]
    fn test_translation_type_serializes_lowercase() {
        let json = serde_json::to_string(&TranslationType::Literal).unwrap();
        assert_eq!(json, "\"literal\"");

        let parsed: TranslationType = serde_json::from_str("\"base\"").unwrap();
        assert_eq!(parsed, TranslationType::Base);
    }

    #[test]
    fn test_translation_type_defaults_to_literal() {
        assert_eq!(TranslationType::default(), TranslationType::Literal);
    }
}
