//! MCP method dispatch functions.
//!
//! Each sub-module handles one MCP method as a free function, keeping
//! `McpHandler` itself thin (struct + routing only).

pub(crate) mod initialize;
pub(crate) mod tools_call;
pub(crate) mod tools_list;

use serde::Serialize;

use templar_protocol::{JsonRpcErrorResponse, JsonRpcResponse, RequestId};

use crate::handler::JsonRpcOutput;

/// Wraps a serializable result, mapping serialization failure to an
/// internal error.
pub(crate) fn success<T: Serialize>(id: RequestId, result: T) -> JsonRpcOutput {
    match serde_json::to_value(result) {
        Ok(v) => JsonRpcOutput::Success(JsonRpcResponse::success(id, v)),
        Err(e) => JsonRpcOutput::Error(JsonRpcErrorResponse::internal(id, e.to_string())),
    }
}
