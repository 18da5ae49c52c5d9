//! MCP server entry point for Devnagri translation services.
//!
//! # Usage
//!
//! Run the server via stdio transport with the API key in the environment:
//!
//! ```bash
//! DEVNAGRI_API_KEY=... devnagri-mcp
//! ```
//!
//! Or configure in `~/.config/claude/mcp.json`:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "devnagri-translation": {
//!       "command": "devnagri-mcp",
//!       "env": { "DEVNAGRI_API_KEY": "..." }
//!     }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use devnagri_mcp_client::TranslationClient;
use devnagri_mcp_core::ApiConfig;
use devnagri_mcp_server::TranslatorService;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging goes to stderr; stdout carries the MCP protocol.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,devnagri_mcp_server=debug")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();

    tracing::info!("Starting devnagri-mcp v{}", env!("CARGO_PKG_VERSION"));

    let config = ApiConfig::resolve(None).context("failed to resolve API configuration")?;
    let client = TranslationClient::new(config);

    let service = TranslatorService::new(client).serve(stdio()).await?;
    service.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
