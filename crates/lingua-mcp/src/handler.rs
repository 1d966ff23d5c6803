//! MCP request router.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use lingua_protocol::mcp::methods;
use lingua_protocol::{
    error_codes, JsonRpcErrorResponse, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse,
};

use crate::dispatch;
use crate::registry::CapabilityRegistry;

/// Either kind of JSON-RPC reply.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum JsonRpcOutput {
    /// `result` response.
    Success(JsonRpcResponse),
    /// `error` response.
    Error(JsonRpcErrorResponse),
}

impl JsonRpcOutput {
    /// Serializes the reply to a single JSON line (no trailing newline).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Whether this is an error reply.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Name, version and instructions reported by `initialize`.
#[derive(Debug, Clone)]
pub struct ServerIdentity {
    /// `serverInfo.name`.
    pub name: String,
    /// `serverInfo.version`.
    pub version: String,
    /// Optional client instructions.
    pub instructions: Option<String>,
}

impl Default for ServerIdentity {
    fn default() -> Self {
        Self {
            name: "LinguistHelper".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: None,
        }
    }
}

/// Routes JSON-RPC requests to the capability registry.
#[derive(Debug, Clone)]
pub struct McpHandler {
    registry: Arc<CapabilityRegistry>,
    identity: ServerIdentity,
}

impl McpHandler {
    /// Creates a handler over a registry.
    pub fn new(registry: Arc<CapabilityRegistry>, identity: ServerIdentity) -> Self {
        Self { registry, identity }
    }

    /// The registry this handler serves.
    pub fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }

    /// Handles one request and produces exactly one reply.
    pub fn dispatch(&self, request: &JsonRpcRequest) -> JsonRpcOutput {
        let id = request.id.clone();
        let params = &request.params;
        let registry = self.registry.as_ref();

        match request.method.as_str() {
            methods::INITIALIZE => dispatch::initialize::handle_initialize(id, params, &self.identity),
            methods::PING => dispatch::respond(id, serde_json::json!({})),
            methods::TOOLS_LIST => dispatch::tools::handle_tools_list(id, registry),
            methods::TOOLS_CALL => dispatch::tools::handle_tools_call(id, params, registry),
            methods::RESOURCES_LIST => dispatch::resources::handle_resources_list(id, registry),
            methods::RESOURCES_TEMPLATES_LIST => {
                dispatch::resources::handle_templates_list(id, registry)
            }
            methods::RESOURCES_READ => {
                dispatch::resources::handle_resources_read(id, params, registry)
            }
            methods::PROMPTS_LIST => dispatch::prompts::handle_prompts_list(id, registry),
            methods::PROMPTS_GET => dispatch::prompts::handle_prompts_get(id, params, registry),
            other => {
                debug!(method = other, "unknown method");
                JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("method not found: {other}"),
                ))
            }
        }
    }

    /// Handles a notification. Notifications never produce a reply.
    pub fn handle_notification(&self, notification: &JsonRpcNotification) {
        match notification.method.as_str() {
            methods::NOTIFICATIONS_INITIALIZED => info!("client initialized"),
            methods::NOTIFICATIONS_CANCELLED => {
                debug!("cancellation ignored; requests complete synchronously")
            }
            other => debug!(method = other, "ignoring notification"),
        }
    }
}
