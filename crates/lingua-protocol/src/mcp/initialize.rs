//! MCP initialize method types.
//!
//! The initialize handshake is the first message exchanged between
//! client and server to negotiate capabilities and protocol version.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Client capabilities declared during initialization.
///
/// The server does not act on any of them, so they are kept opaque.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientCapabilities {
    /// Raw capability map as sent by the client.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Tools capability advertised by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolCapability {
    /// Whether the tool list may change at runtime.
    #[serde(rename = "listChanged")]
    pub list_changed: bool,
}

/// Resources capability advertised by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceCapability {
    /// Whether clients may subscribe to resource updates.
    pub subscribe: bool,
    /// Whether the resource list may change at runtime.
    #[serde(rename = "listChanged")]
    pub list_changed: bool,
}

/// Prompts capability advertised by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptCapability {
    /// Whether the prompt list may change at runtime.
    #[serde(rename = "listChanged")]
    pub list_changed: bool,
}

/// Server capabilities returned during initialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// Present if the server exposes tools.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolCapability>,
    /// Present if the server exposes resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceCapability>,
    /// Present if the server exposes prompts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompts: Option<PromptCapability>,
}

/// Client or server implementation info.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Implementation {
    /// Implementation name.
    pub name: String,
    /// Implementation version.
    pub version: String,
}

/// Request params for `initialize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeParams {
    /// Protocol version requested by client.
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Client capabilities.
    #[serde(default)]
    pub capabilities: ClientCapabilities,
    /// Client info.
    #[serde(rename = "clientInfo")]
    pub client_info: Implementation,
}

/// Response for `initialize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResult {
    /// Protocol version agreed by server.
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server capabilities.
    pub capabilities: ServerCapabilities,
    /// Server info.
    #[serde(rename = "serverInfo")]
    pub server_info: Implementation,
    /// Optional usage instructions for the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// MCP protocol version supported by this implementation.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_params_accept_arbitrary_client_capabilities() {
        let json = r#"{
            "protocolVersion": "2024-11-05",
            "capabilities": {"roots": {"listChanged": true}, "sampling": {}},
            "clientInfo": {"name": "test-client", "version": "1.0.0"}
        }"#;
        let params: InitializeParams = serde_json::from_str(json).expect("deserialize");
        assert_eq!(params.protocol_version, PROTOCOL_VERSION);
        assert_eq!(params.client_info.name, "test-client");
        assert!(params.capabilities.extra.contains_key("roots"));
    }

    #[test]
    fn initialize_params_capabilities_optional() {
        let json = r#"{"protocolVersion":"2024-11-05","clientInfo":{"name":"c","version":"0"}}"#;
        let params: InitializeParams = serde_json::from_str(json).expect("deserialize");
        assert!(params.capabilities.extra.is_empty());
    }

    #[test]
    fn initialize_result_uses_camel_case_keys() {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolCapability::default()),
                resources: Some(ResourceCapability::default()),
                prompts: Some(PromptCapability::default()),
            },
            server_info: Implementation {
                name: "LinguistHelper".to_string(),
                version: "0.1.0".to_string(),
            },
            instructions: None,
        };
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["serverInfo"]["name"], "LinguistHelper");
        assert_eq!(json["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(json["capabilities"]["resources"]["subscribe"], false);
        assert!(json.get("instructions").is_none());
    }

    #[test]
    fn absent_capabilities_are_skipped() {
        let caps = ServerCapabilities::default();
        let s = serde_json::to_string(&caps).expect("ser");
        assert_eq!(s, "{}");
    }
}
