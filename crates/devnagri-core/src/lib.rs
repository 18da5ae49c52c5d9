//! Core types, tables, and detection logic for the Devnagri translation MCP server.
//!
//! This crate provides the foundational pieces shared by the client and
//! server crates:
//! - Domain types (`TranslationRequest`, `TranslationResult`, `LanguageDetectionResult`)
//! - Error hierarchy with contextual information
//! - The static supported-language table
//! - The script-based language identifier
//! - API configuration and key resolution

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub mod detect;
pub mod languages;

pub use config::{API_KEY_ENV, ApiConfig};
pub use error::{Error, Result};
pub use types::{
    LanguageDetectionResult, SupportedLanguage, TranslationRequest, TranslationResult,
    TranslationType,
};
