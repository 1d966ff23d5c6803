//! Handles the `prompts/list` and `prompts/get` MCP methods.

use serde_json::Value;
use tracing::debug;

use lingua_protocol::mcp::methods;
use lingua_protocol::mcp::prompts::{
    McpPromptArgument, McpPromptDefinition, PromptContent, PromptMessage, PromptsGetParams,
    PromptsGetResult, PromptsListResult, Role,
};
use lingua_protocol::RequestId;

use crate::dispatch::{invalid_params, parse_params, respond};
use crate::handler::JsonRpcOutput;
use crate::registry::CapabilityRegistry;

/// Handles `prompts/list`.
pub(crate) fn handle_prompts_list(id: RequestId, registry: &CapabilityRegistry) -> JsonRpcOutput {
    let prompts = registry
        .prompts()
        .iter()
        .map(|p| McpPromptDefinition {
            name: p.name.to_string(),
            description: Some(p.description.to_string()),
            arguments: p
                .arguments
                .iter()
                .map(|a| McpPromptArgument {
                    name: a.name.to_string(),
                    description: Some(a.description.to_string()),
                    required: a.required,
                })
                .collect(),
        })
        .collect();
    respond(id, PromptsListResult { prompts })
}

/// Handles `prompts/get`: renders the prompt as a single user message.
pub(crate) fn handle_prompts_get(
    id: RequestId,
    params: &Option<Value>,
    registry: &CapabilityRegistry,
) -> JsonRpcOutput {
    let get: PromptsGetParams = match parse_params(&id, params, methods::PROMPTS_GET) {
        Ok(p) => p,
        Err(reply) => return reply,
    };

    debug!(prompt = %get.name, "rendering prompt");
    let text = match registry.get_prompt(&get.name, &get.arguments) {
        Ok(t) => t,
        Err(e) => return invalid_params(id, e.to_string()),
    };
    let description = registry
        .prompt(&get.name)
        .ok()
        .map(|p| p.description.to_string());

    respond(
        id,
        PromptsGetResult {
            description,
            messages: vec![PromptMessage {
                role: Role::User,
                content: PromptContent::Text { text },
            }],
        },
    )
}
