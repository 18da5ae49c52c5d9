//! Error types for the Devnagri translation MCP server.
//!
//! All fallible operations in the workspace return [`Result`], built on a
//! single error enum with contextual information.
//!
//! # Examples
//!
//! ```
//! use devnagri_mcp_core::{Error, Result};
//!
//! fn check_code(code: &str) -> Result<()> {
//!     if code.is_empty() {
//!         return Err(Error::Validation {
//!             field: "source_language".to_string(),
//!             reason: "language code cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_code("").unwrap_err();
//! assert!(err.is_validation_error());
//! ```

use thiserror::Error;

/// Main error type for the Devnagri translation workspace.
#[derive(Error, Debug)]
pub enum Error {
    /// Upstream translation API failure.
    ///
    /// Covers non-200 responses, network failures, and malformed response
    /// bodies. The message includes the upstream-provided reason when one is
    /// available. Upstream failures are never retried; exactly one attempt is
    /// made per call.
    #[error("Translation failed: {message}")]
    Upstream {
        /// Human-readable description of the upstream failure
        message: String,
    },

    /// Validation error for tool arguments.
    ///
    /// Raised at the boundary when a required argument is missing or
    /// malformed, such as empty source text or a language code outside the
    /// 2-7 character bounds.
    #[error("Validation error in {field}: {reason}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },

    /// Configuration error.
    ///
    /// Raised when the API key cannot be resolved or the configuration file
    /// is unreadable or malformed.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },
}

impl Error {
    /// Returns `true` if this is an upstream API error.
    ///
    /// # Examples
    ///
    /// ```
    /// use devnagri_mcp_core::Error;
    ///
    /// let err = Error::Upstream {
    ///     message: "HTTP 500".to_string(),
    /// };
    /// assert!(err.is_upstream_error());
    /// ```
    #[must_use]
    pub const fn is_upstream_error(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }

    /// Returns `true` if this is a validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use devnagri_mcp_core::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "source_text".to_string(),
    ///     reason: "must not be empty".to_string(),
    /// };
    /// assert!(err.is_validation_error());
    /// ```
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use devnagri_mcp_core::Error;
    ///
    /// let err = Error::Config {
    ///     message: "API key not set".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

/// Convenience result type used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_display_includes_message() {
        let err = Error::Upstream {
            message: "Translation failed: quota exceeded".to_string(),
        };
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_validation_error_display_names_field() {
        let err = Error::Validation {
            field: "target_language".to_string(),
            reason: "must be 2-7 characters".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("target_language"));
        assert!(rendered.contains("2-7 characters"));
    }

    #[test]
    fn test_error_predicates_are_exclusive() {
        let err = Error::Config {
            message: "missing key".to_string(),
        };
        assert!(err.is_config_error());
        assert!(!err.is_upstream_error());
        assert!(!err.is_validation_error());
    }
}
