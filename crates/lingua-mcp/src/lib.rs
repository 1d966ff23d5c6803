//! # lingua-mcp
//!
//! MCP method dispatch (APPLICATION layer).
//!
//! Provides the [`CapabilityRegistry`] (what the server exposes) and
//! [`McpHandler`] (how JSON-RPC requests reach it).

mod dispatch;
pub mod handler;
pub mod registry;

pub use handler::{JsonRpcOutput, McpHandler, ServerIdentity};
pub use registry::{CapabilityKind, CapabilityRegistry, RegistryError, ToolOutput};
