//! Configuration schema types.

use serde::{Deserialize, Serialize};

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinguaConfig {
    /// MCP server identity.
    #[serde(default)]
    pub server: ServerConfig,
    /// Corpus contents.
    #[serde(default)]
    pub corpus: CorpusConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server identity reported in the `initialize` handshake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Name sent as `serverInfo.name`.
    #[serde(default = "default_server_name")]
    pub name: String,
    /// Optional usage instructions sent to the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            instructions: None,
        }
    }
}

fn default_server_name() -> String {
    "LinguistHelper".to_string()
}

/// Corpus settings.
///
/// `texts = None` selects the built-in sample texts; a list replaces them
/// entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Ordered texts; iteration order of the corpus follows this list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texts: Option<Vec<TextConfig>>,
}

/// One configured text. Identifier rules are enforced when the corpus is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextConfig {
    /// Text identifier.
    pub id: String,
    /// Text body.
    pub body: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "lingua_mcp=trace").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
