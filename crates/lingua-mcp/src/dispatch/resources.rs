//! Handles the `resources/*` MCP methods.

use serde_json::{json, Value};
use tracing::debug;

use lingua_corpus::fallback_message;
use lingua_protocol::mcp::methods;
use lingua_protocol::mcp::resources::{
    McpResourceDefinition, McpResourceTemplate, ResourceTemplatesListResult, ResourcesListResult,
    ResourcesReadParams, ResourcesReadResult, TextResourceContents,
};
use lingua_protocol::{error_codes, JsonRpcErrorResponse, RequestId};

use crate::dispatch::{invalid_params, parse_params, respond};
use crate::handler::JsonRpcOutput;
use crate::registry::{CapabilityRegistry, RegistryError, TEXT_MIME};

/// Handles `resources/list`.
pub(crate) fn handle_resources_list(id: RequestId, registry: &CapabilityRegistry) -> JsonRpcOutput {
    let resources = registry
        .resources()
        .iter()
        .map(|r| McpResourceDefinition {
            uri: r.uri.to_string(),
            name: r.name.to_string(),
            description: Some(r.description.to_string()),
            mime_type: Some(TEXT_MIME.to_string()),
        })
        .collect();
    respond(id, ResourcesListResult { resources })
}

/// Handles `resources/templates/list`.
pub(crate) fn handle_templates_list(id: RequestId, registry: &CapabilityRegistry) -> JsonRpcOutput {
    let resource_templates = registry
        .resource_templates()
        .iter()
        .map(|t| McpResourceTemplate {
            uri_template: t.uri_template.to_string(),
            name: t.name.to_string(),
            description: Some(t.description.to_string()),
            mime_type: Some(TEXT_MIME.to_string()),
        })
        .collect();
    respond(id, ResourceTemplatesListResult { resource_templates })
}

/// Handles `resources/read`.
///
/// A missing text is reported as `RESOURCE_NOT_FOUND` with the ids that
/// do exist in `data.available`.
pub(crate) fn handle_resources_read(
    id: RequestId,
    params: &Option<Value>,
    registry: &CapabilityRegistry,
) -> JsonRpcOutput {
    let read: ResourcesReadParams = match parse_params(&id, params, methods::RESOURCES_READ) {
        Ok(p) => p,
        Err(reply) => return reply,
    };

    debug!(uri = %read.uri, "reading resource");
    match registry.read_resource(&read.uri) {
        Ok(text) => respond(
            id,
            ResourcesReadResult {
                contents: vec![TextResourceContents {
                    uri: read.uri,
                    mime_type: Some(TEXT_MIME.to_string()),
                    text,
                }],
            },
        ),
        Err(RegistryError::Resource(err)) if err.is_not_found() => {
            let data = json!({"uri": read.uri, "available": err.available_ids()});
            JsonRpcOutput::Error(
                JsonRpcErrorResponse::error(
                    id,
                    error_codes::RESOURCE_NOT_FOUND,
                    fallback_message(&err),
                )
                .with_data(data),
            )
        }
        Err(e) => invalid_params(id, e.to_string()),
    }
}
