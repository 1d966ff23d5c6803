//! MCP method dispatch functions.
//!
//! Each sub-module handles one family of MCP methods as free functions,
//! keeping `McpHandler` itself thin (struct + routing only).

pub(crate) mod initialize;
pub(crate) mod prompts;
pub(crate) mod resources;
pub(crate) mod tools;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use lingua_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcResponse, RequestId};

use crate::handler::JsonRpcOutput;

/// Wraps a serializable result in a success reply.
pub(crate) fn respond<T: Serialize>(id: RequestId, result: T) -> JsonRpcOutput {
    match serde_json::to_value(result) {
        Ok(v) => JsonRpcOutput::Success(JsonRpcResponse::success(id, v)),
        Err(e) => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            e.to_string(),
        )),
    }
}

/// Builds an `INVALID_PARAMS` reply.
pub(crate) fn invalid_params(id: RequestId, message: impl Into<String>) -> JsonRpcOutput {
    JsonRpcOutput::Error(JsonRpcErrorResponse::error(
        id,
        error_codes::INVALID_PARAMS,
        message,
    ))
}

/// Deserializes required params, or returns the error reply to send.
pub(crate) fn parse_params<T: DeserializeOwned>(
    id: &RequestId,
    params: &Option<Value>,
    method: &str,
) -> Result<T, JsonRpcOutput> {
    match params {
        Some(p) => serde_json::from_value::<T>(p.clone())
            .map_err(|e| invalid_params(id.clone(), format!("invalid {method} params: {e}"))),
        None => Err(invalid_params(id.clone(), format!("{method} requires params"))),
    }
}
