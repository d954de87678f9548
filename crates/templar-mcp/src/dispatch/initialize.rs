//! Handles the `initialize` MCP method.

use serde_json::Value;

use templar_protocol::mcp::initialize::{InitializeParams, InitializeResult};
use templar_protocol::{JsonRpcErrorResponse, RequestId};

use crate::handler::JsonRpcOutput;

/// Name reported in `serverInfo`.
pub(crate) const SERVER_NAME: &str = "templar";

/// Handles the `initialize` request and returns the server capabilities.
pub(crate) fn handle_initialize(id: RequestId, params: &Option<Value>) -> JsonRpcOutput {
    if let Some(p) = params {
        match serde_json::from_value::<InitializeParams>(p.clone()) {
            Ok(init) => tracing::info!(
                client = %init.client_info.name,
                version = %init.client_info.version,
                protocol = %init.protocol_version,
                "client connected"
            ),
            Err(e) => {
                return JsonRpcOutput::Error(JsonRpcErrorResponse::invalid_params(
                    id,
                    format!("invalid initialize params: {e}"),
                ));
            }
        }
    }

    let result = InitializeResult::tools_server(SERVER_NAME, env!("CARGO_PKG_VERSION"));
    super::success(id, result)
}
