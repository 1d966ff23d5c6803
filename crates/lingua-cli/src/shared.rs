//! Shared helpers used across CLI commands.
//!
//! Centralises building the corpus, the capability registry and the MCP
//! handler from a loaded configuration, so every command sees the same texts.

use std::sync::Arc;

use lingua_config::LinguaConfig;
use lingua_corpus::{Corpus, ResourceProvider};
use lingua_mcp::{CapabilityRegistry, McpHandler, ServerIdentity};
use lingua_types::{DiagnosticError, LinguaError};

use crate::output;

/// Builds the capability registry over the configured corpus.
///
/// # Errors
///
/// Returns an error if configured texts have invalid or duplicate ids.
pub fn build_registry(config: &LinguaConfig) -> anyhow::Result<Arc<CapabilityRegistry>> {
    let corpus = Corpus::from_config(&config.corpus).map_err(report)?;
    tracing::debug!(texts = corpus.len(), "corpus ready");
    let provider = ResourceProvider::new(Arc::new(corpus));
    Ok(Arc::new(CapabilityRegistry::standard(provider)))
}

/// Server identity advertised in `initialize`.
pub fn identity(config: &LinguaConfig) -> ServerIdentity {
    ServerIdentity {
        name: config.server.name.clone(),
        instructions: config.server.instructions.clone(),
        ..ServerIdentity::default()
    }
}

/// Builds the MCP handler the `serve` command runs.
///
/// # Errors
///
/// See [`build_registry`].
pub fn build_handler(config: &LinguaConfig) -> anyhow::Result<McpHandler> {
    Ok(McpHandler::new(build_registry(config)?, identity(config)))
}

/// Prints a diagnosed error and converts it into the unified [`LinguaError`].
pub fn report<E>(err: E) -> anyhow::Error
where
    E: DiagnosticError + Into<LinguaError>,
{
    output::print_diagnostic(&err);
    anyhow::Error::new(err.into())
}
