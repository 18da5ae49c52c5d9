//! MCP server library for Devnagri translation services.
//!
//! This crate wires the translation client and the script-based language
//! identifier into an MCP tool surface over stdio.
//!
//! # Tools
//!
//! 1. **`translate`** - translate text between languages via the upstream API
//! 2. **`detect_language`** - heuristic script-based language detection
//! 3. **`list_supported_languages`** - enumerate the supported-language table
//!
//! # Examples
//!
//! ```no_run
//! use devnagri_mcp_client::TranslationClient;
//! use devnagri_mcp_core::ApiConfig;
//! use devnagri_mcp_server::TranslatorService;
//! use rmcp::ServiceExt;
//! use rmcp::transport::stdio;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ApiConfig::resolve(None)?;
//! let service = TranslatorService::new(TranslationClient::new(config))
//!     .serve(stdio())
//!     .await?;
//! service.waiting().await?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod service;
pub mod types;

pub use service::TranslatorService;
pub use types::{DetectLanguageParams, ListSupportedLanguagesResult, TranslateParams};
