//! Static supported-language table.
//!
//! This table is the single source of truth for the `supported` flag in
//! detection results and for the `list_supported_languages` tool. It is a
//! process-wide constant, initialized once and never mutated, so it is safe
//! to share across concurrent tool calls without locking.

use crate::SupportedLanguage;

/// Languages accepted by the upstream translation API.
///
/// Ordering matches the upstream provider's published list and is part of
/// the tool's observable output; do not reorder casually.
pub static SUPPORTED_LANGUAGES: &[SupportedLanguage] = &[
    SupportedLanguage { name: "Hindi", native_name: "हिंदी", code: "hi" },
    SupportedLanguage { name: "Punjabi", native_name: "ਪੰਜਾਬੀ", code: "pa" },
    SupportedLanguage { name: "Tamil", native_name: "தமிழ்", code: "ta" },
    SupportedLanguage { name: "Gujarati", native_name: "ગુજરાતી", code: "gu" },
    SupportedLanguage { name: "Kannada", native_name: "ಕನ್ನಡ", code: "kn" },
    SupportedLanguage { name: "Bengali", native_name: "বাংলা", code: "bn" },
    SupportedLanguage { name: "Marathi", native_name: "मराठी", code: "mr" },
    SupportedLanguage { name: "Telugu", native_name: "తెలుగు", code: "te" },
    SupportedLanguage { name: "English", native_name: "English", code: "en" },
    SupportedLanguage { name: "Malayalam", native_name: "മലയാളം", code: "ml" },
    SupportedLanguage { name: "Assamese", native_name: "অসমীয়া", code: "as" },
    SupportedLanguage { name: "Odia", native_name: "ଓଡ଼ିଆ", code: "or" },
    SupportedLanguage { name: "French", native_name: "français", code: "fr" },
    SupportedLanguage { name: "Arabic", native_name: "عربى", code: "ar" },
    SupportedLanguage { name: "German", native_name: "Deutsche", code: "de" },
    SupportedLanguage { name: "Spanish", native_name: "Español", code: "es" },
    SupportedLanguage { name: "Japanese", native_name: "日本人", code: "ja" },
    SupportedLanguage { name: "Italian", native_name: "italiano", code: "it" },
    SupportedLanguage { name: "Dutch", native_name: "Nederlands", code: "nl" },
    SupportedLanguage { name: "Portuguese", native_name: "Português", code: "pt" },
    SupportedLanguage { name: "Vietnamese", native_name: "Tiếng Việt", code: "vi" },
    SupportedLanguage { name: "Indonesian", native_name: "Bahasa Indonesia", code: "id" },
    SupportedLanguage { name: "Urdu", native_name: "اردو", code: "ur" },
    SupportedLanguage { name: "Chinese (Simplified)", native_name: "简体中文", code: "zh-CN" },
    SupportedLanguage { name: "Chinese (Traditional)", native_name: "中國傳統的", code: "zh-TW" },
    SupportedLanguage { name: "Kashmiri", native_name: "कॉशुर", code: "ksm" },
    SupportedLanguage { name: "Konkani", native_name: "कोंकणी", code: "gom" },
    SupportedLanguage { name: "Manipuri", native_name: "ꯃꯅꯤꯄꯨꯔꯤꯗꯥ ꯂꯩꯕꯥ꯫", code: "mni-Mtei" },
    SupportedLanguage { name: "Nepali", native_name: "नेपाली", code: "ne" },
    SupportedLanguage { name: "Sanskrit", native_name: "संस्कृत", code: "sa" },
    SupportedLanguage { name: "Sindhi", native_name: "سنڌي", code: "sd" },
    SupportedLanguage { name: "Bodo", native_name: "बड़ो", code: "bodo" },
    SupportedLanguage { name: "Santhali", native_name: "ᱥᱟᱱᱛᱟᱲᱤ", code: "snthl" },
    SupportedLanguage { name: "Maithili", native_name: "मैथिली", code: "mai" },
    SupportedLanguage { name: "Dogri", native_name: "डोगरी", code: "doi" },
    SupportedLanguage { name: "Malay", native_name: "Melayu", code: "ms" },
    SupportedLanguage { name: "Filipino", native_name: "Filipino", code: "tl" },
];

/// Returns the full supported-language table.
///
/// Deterministic and length-stable across calls; the returned slice refers
/// to the process-wide constant table.
///
/// # Examples
///
/// ```
/// let languages = devnagri_mcp_core::languages::supported_languages();
/// assert!(languages.iter().any(|l| l.code == "hi"));
/// ```
#[must_use]
pub fn supported_languages() -> &'static [SupportedLanguage] {
    SUPPORTED_LANGUAGES
}

/// Returns `true` if `code` appears in the supported-language table.
///
/// # Examples
///
/// ```
/// use devnagri_mcp_core::languages::is_supported;
///
/// assert!(is_supported("en"));
/// assert!(!is_supported("xx"));
/// ```
#[must_use]
pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|lang| lang.code == code)
}
