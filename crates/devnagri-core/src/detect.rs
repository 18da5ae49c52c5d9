//! Script-based language identification.
//!
//! A heuristic, pure-function detector: the input text is scanned against a
//! fixed table of Unicode script ranges, matches are tallied per rule, and
//! the best-scoring rule's language code wins. There is no I/O and no
//! failure mode; every input, including the empty string, yields a
//! well-formed result.

use crate::{LanguageDetectionResult, languages};

/// A single script-detection rule.
///
/// Each rule owns one or more inclusive code-point ranges. Ranges are probed
/// independently per rule; a character may count toward several rules when
/// their ranges overlap.
#[derive(Debug, Clone, Copy)]
pub struct ScriptRule {
    /// Inclusive `(start, end)` code-point ranges belonging to this script
    pub ranges: &'static [(char, char)],

    /// Language code reported when this rule wins (e.g., "hi")
    pub code: &'static str,

    /// Display name of the language (e.g., "Hindi")
    pub name: &'static str,
}

impl ScriptRule {
    /// Returns `true` if `c` falls in any of this rule's ranges.
    #[must_use]
    pub fn matches(&self, c: char) -> bool {
        self.ranges.iter().any(|&(start, end)| (start..=end).contains(&c))
    }
}

/// Fixed, ordered script-rule table.
///
/// Order is significant for tie-breaking only: equal counts resolve to the
/// earlier entry. The broad Latin-letter class sits last so that it cannot
/// shadow a script with an equal tally.
pub static SCRIPT_RULES: &[ScriptRule] = &[
    ScriptRule { ranges: &[('\u{0900}', '\u{097F}')], code: "hi", name: "Hindi" },
    ScriptRule { ranges: &[('\u{0A80}', '\u{0AFF}')], code: "gu", name: "Gujarati" },
    ScriptRule { ranges: &[('\u{0B00}', '\u{0B7F}')], code: "or", name: "Odia" },
    ScriptRule { ranges: &[('\u{0B80}', '\u{0BFF}')], code: "ta", name: "Tamil" },
    ScriptRule { ranges: &[('\u{0C00}', '\u{0C7F}')], code: "te", name: "Telugu" },
    ScriptRule { ranges: &[('\u{0C80}', '\u{0CFF}')], code: "kn", name: "Kannada" },
    ScriptRule { ranges: &[('\u{0D00}', '\u{0D7F}')], code: "ml", name: "Malayalam" },
    ScriptRule { ranges: &[('\u{0A00}', '\u{0A7F}')], code: "pa", name: "Punjabi" },
    ScriptRule { ranges: &[('\u{0980}', '\u{09FF}')], code: "bn", name: "Bengali" },
    ScriptRule { ranges: &[('\u{0600}', '\u{06FF}')], code: "ar", name: "Arabic" },
    ScriptRule { ranges: &[('\u{0F00}', '\u{0FFF}')], code: "bo", name: "Tibetan" },
    ScriptRule { ranges: &[('\u{0400}', '\u{04FF}')], code: "ru", name: "Russian" },
    ScriptRule { ranges: &[('\u{0590}', '\u{05FF}')], code: "he", name: "Hebrew" },
    ScriptRule { ranges: &[('\u{4E00}', '\u{9FFF}')], code: "zh-CN", name: "Chinese" },
    ScriptRule {
        ranges: &[('\u{3040}', '\u{309F}'), ('\u{30A0}', '\u{30FF}')],
        code: "ja",
        name: "Japanese",
    },
    ScriptRule { ranges: &[('\u{AC00}', '\u{D7AF}')], code: "ko", name: "Korean" },
    ScriptRule { ranges: &[('A', 'Z'), ('a', 'z')], code: "en", name: "English" },
];

/// Detects the dominant script of `text` and maps it to a language code.
///
/// The confidence score is the winning rule's match count divided by the
/// total character count of the input. It is a raw ratio, not normalized
/// against competing scripts, so punctuation-heavy text scores low even for
/// a clear winner.
///
/// Empty input yields confidence 0 rather than dividing by zero. Input that
/// matches no rule at all still reports the first-listed rule's code with
/// confidence 0; callers that need to distinguish "no signal" from a
/// low-confidence match must check the score.
///
/// # Examples
///
/// ```
/// use devnagri_mcp_core::detect::detect;
///
/// let result = detect("नमस्ते दुनिया");
/// assert_eq!(result.detected_language, "hi");
/// assert!(result.supported);
/// assert!(result.confidence_score > 0.0);
/// ```
#[must_use]
pub fn detect(text: &str) -> LanguageDetectionResult {
    let total_chars = text.chars().count();

    let mut winner = &SCRIPT_RULES[0];
    let mut winner_count = 0usize;
    for rule in SCRIPT_RULES {
        let count = text.chars().filter(|&c| rule.matches(c)).count();
        // Strict inequality keeps ties on the earlier table entry.
        if count > winner_count {
            winner = rule;
            winner_count = count;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let confidence_score = if total_chars == 0 {
        0.0
    } else {
        winner_count as f64 / total_chars as f64
    };

    LanguageDetectionResult {
        detected_language: winner.code.to_string(),
        confidence_score,
        supported: languages::is_supported(winner.code),
    }
}
