//! API configuration and key resolution.
//!
//! The upstream API key is resolved once at startup and injected into the
//! translation client at construction time; nothing reads it ambiently
//! afterwards. Resolution order:
//!
//! 1. Explicit value passed by the caller
//! 2. `DEVNAGRI_API_KEY` environment variable
//! 3. `api.key` in the TOML config file:
//!    - Linux/macOS: `~/.config/devnagri-mcp/config.toml`
//!    - Windows: `%APPDATA%\devnagri-mcp\config.toml`

use crate::{Error, Result};
use secrecy::SecretString;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable consulted when no explicit key is given.
pub const API_KEY_ENV: &str = "DEVNAGRI_API_KEY";

/// Immutable per-process API configuration.
///
/// The key is wrapped in [`SecretString`] so it is redacted from `Debug`
/// output and log lines.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    api_key: SecretString,
}

/// On-disk config file shape.
#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    api: ApiSection,
}

#[derive(Debug, Default, Deserialize)]
struct ApiSection {
    key: Option<String>,
}

impl ApiConfig {
    /// Creates a configuration from an already-resolved key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// Resolves the API key from the explicit value, the environment, or the
    /// config file, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no source yields a non-empty key, or if
    /// the config file exists but cannot be read or parsed.
    pub fn resolve(explicit: Option<String>) -> Result<Self> {
        let file_key = read_key_from_file(config_file_path())?;
        Self::resolve_from(explicit, std::env::var(API_KEY_ENV).ok(), file_key)
    }

    /// Pure resolution over the three candidate sources.
    fn resolve_from(
        explicit: Option<String>,
        env: Option<String>,
        file: Option<String>,
    ) -> Result<Self> {
        let non_empty = |s: Option<String>| s.filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty(explicit) {
            debug!("API key resolved from explicit argument");
            return Ok(Self::new(key));
        }
        if let Some(key) = non_empty(env) {
            debug!("API key resolved from {API_KEY_ENV}");
            return Ok(Self::new(key));
        }
        if let Some(key) = non_empty(file) {
            debug!("API key resolved from config file");
            return Ok(Self::new(key));
        }

        Err(Error::Config {
            message: format!(
                "no API key found: pass one explicitly, set {API_KEY_ENV}, \
                 or add api.key to the config file"
            ),
        })
    }

    /// The resolved API key.
    ///
    /// Expose the inner value only at request-build time via
    /// [`secrecy::ExposeSecret`].
    #[must_use]
    pub const fn api_key(&self) -> &SecretString {
        &self.api_key
    }
}

/// Default config file location, if a config directory exists.
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("devnagri-mcp").join("config.toml"))
}

/// Reads `api.key` from the config file, if the file exists.
fn read_key_from_file(path: Option<PathBuf>) -> Result<Option<String>> {
    let Some(path) = path else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }

    let raw = std::fs::read_to_string(&path).map_err(|e| Error::Config {
        message: format!("failed to read {}: {e}", path.display()),
    })?;
    let parsed: FileConfig = toml::from_str(&raw).map_err(|e| Error::Config {
        message: format!("failed to parse {}: {e}", path.display()),
    })?;

    Ok(parsed.api.key)
}
