//! `lingua serve` command.
//!
//! Starts the MCP server over stdio, exposing the corpus resources,
//! analysis tools and prompts via JSON-RPC 2.0.

use clap::Args;

use lingua_config::LinguaConfig;
use lingua_transport_stdio::{McpServer, StdioTransport};
use lingua_types::LinguaError;

use crate::shared;

/// Start the MCP server on stdio.
#[derive(Debug, Args)]
pub struct ServeArgs {}

/// Executes the serve command.
pub async fn execute(_args: &ServeArgs, config: &LinguaConfig) -> anyhow::Result<()> {
    let handler = shared::build_handler(config)?;
    let transport = StdioTransport::new(tokio::io::stdin(), tokio::io::stdout());
    let mut server = McpServer::new(transport, handler);
    tracing::info!(name = %config.server.name, "MCP server ready on stdio");

    tokio::select! {
        result = server.run() => {
            result.map_err(|e| LinguaError::from(e).with_context("stdio server"))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
