//! Handles the `initialize` MCP method.

use serde_json::Value;
use tracing::info;

use lingua_protocol::mcp::initialize::{
    Implementation, InitializeParams, InitializeResult, PromptCapability, ResourceCapability,
    ServerCapabilities, ToolCapability, PROTOCOL_VERSION,
};
use lingua_protocol::RequestId;

use crate::dispatch::{invalid_params, respond};
use crate::handler::{JsonRpcOutput, ServerIdentity};

/// Handles the `initialize` request and returns the server capabilities.
///
/// Params are optional; when present they must be well-formed.
pub(crate) fn handle_initialize(
    id: RequestId,
    params: &Option<Value>,
    identity: &ServerIdentity,
) -> JsonRpcOutput {
    if let Some(p) = params {
        match serde_json::from_value::<InitializeParams>(p.clone()) {
            Ok(init) => info!(
                client = %init.client_info.name,
                client_version = %init.client_info.version,
                requested = %init.protocol_version,
                "initialize"
            ),
            Err(e) => return invalid_params(id, format!("invalid initialize params: {e}")),
        }
    }

    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolCapability::default()),
            resources: Some(ResourceCapability::default()),
            prompts: Some(PromptCapability::default()),
        },
        server_info: Implementation {
            name: identity.name.clone(),
            version: identity.version.clone(),
        },
        instructions: identity.instructions.clone(),
    };

    respond(id, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result_of(output: JsonRpcOutput) -> Value {
        match output {
            JsonRpcOutput::Success(r) => r.result,
            JsonRpcOutput::Error(e) => panic!("unexpected error: {}", e.error.message),
        }
    }

    #[test]
    fn advertises_all_three_capability_kinds() {
        let v = result_of(handle_initialize(
            RequestId::Number(1),
            &None,
            &ServerIdentity::default(),
        ));
        assert!(v["capabilities"]["tools"].is_object());
        assert!(v["capabilities"]["resources"].is_object());
        assert!(v["capabilities"]["prompts"].is_object());
        assert_eq!(v["serverInfo"]["name"], "LinguistHelper");
        assert_eq!(v["protocolVersion"], PROTOCOL_VERSION);
    }

    #[test]
    fn reports_configured_identity() {
        let identity = ServerIdentity {
            name: "Corpus Lab".into(),
            version: "9.9.9".into(),
            instructions: Some("Start with corpus://list.".into()),
        };
        let v = result_of(handle_initialize(RequestId::Number(2), &None, &identity));
        assert_eq!(v["serverInfo"]["name"], "Corpus Lab");
        assert_eq!(v["serverInfo"]["version"], "9.9.9");
        assert_eq!(v["instructions"], "Start with corpus://list.");
    }

    #[test]
    fn accepts_well_formed_params() {
        let params = Some(json!({
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {"name": "inspector", "version": "0.1"}
        }));
        let out = handle_initialize(RequestId::Number(3), &params, &ServerIdentity::default());
        assert!(!out.is_error());
    }

    #[test]
    fn rejects_malformed_params() {
        let params = Some(json!({"protocolVersion": 123}));
        let out = handle_initialize(RequestId::Number(4), &params, &ServerIdentity::default());
        assert!(out.is_error());
    }
}
