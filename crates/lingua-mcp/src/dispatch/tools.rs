//! Handles the `tools/list` and `tools/call` MCP methods.

use serde_json::Value;
use tracing::debug;

use lingua_protocol::mcp::methods;
use lingua_protocol::mcp::tools::{McpToolDefinition, ToolsCallParams, ToolsCallResult, ToolsListResult};
use lingua_protocol::RequestId;

use crate::dispatch::{invalid_params, parse_params, respond};
use crate::handler::JsonRpcOutput;
use crate::registry::CapabilityRegistry;

/// Handles the `tools/list` request.
pub(crate) fn handle_tools_list(id: RequestId, registry: &CapabilityRegistry) -> JsonRpcOutput {
    let tools = registry
        .tools()
        .iter()
        .map(|t| McpToolDefinition {
            name: t.name.to_string(),
            description: Some(t.description.to_string()),
            input_schema: t.input_schema(),
        })
        .collect();

    respond(
        id,
        ToolsListResult {
            tools,
            next_cursor: None,
        },
    )
}

/// Handles the `tools/call` request.
///
/// Unknown tools and bad arguments are protocol errors; tools themselves
/// never fail, so `isError` is always false.
pub(crate) fn handle_tools_call(
    id: RequestId,
    params: &Option<Value>,
    registry: &CapabilityRegistry,
) -> JsonRpcOutput {
    // 1. Parse params
    let call: ToolsCallParams = match parse_params(&id, params, methods::TOOLS_CALL) {
        Ok(p) => p,
        Err(reply) => return reply,
    };

    // 2. Run via the registry
    debug!(tool = %call.name, "calling tool");
    match registry.call_tool(&call.name, &call.arguments) {
        Ok(output) => respond(id, ToolsCallResult::text(output.render())),
        Err(e) => invalid_params(id, e.to_string()),
    }
}
