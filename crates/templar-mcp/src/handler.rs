//! MCP request handler: owns the repository and routes methods.

use std::sync::Arc;

use serde_json::json;

use templar_protocol::methods;
use templar_protocol::{
    error_codes, JsonRpcErrorResponse, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse,
};
use templar_registry::TemplateRepository;

use crate::dispatch;

/// Result of dispatching one JSON-RPC request.
#[derive(Debug, Clone)]
pub enum JsonRpcOutput {
    Success(JsonRpcResponse),
    Error(JsonRpcErrorResponse),
}

impl JsonRpcOutput {
    /// Serializes the output as a single-line JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Success(r) => serde_json::to_string(r),
            Self::Error(e) => serde_json::to_string(e),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Routes MCP methods to their implementations.
///
/// Cheap to share: wrap in an `Arc` and hand the same handler to every
/// transport.
pub struct McpHandler {
    repository: Arc<dyn TemplateRepository>,
}

impl McpHandler {
    /// Creates a handler backed by the given repository.
    pub fn new(repository: Arc<dyn TemplateRepository>) -> Self {
        Self { repository }
    }

    /// The repository tools run against.
    pub fn repository(&self) -> &Arc<dyn TemplateRepository> {
        &self.repository
    }

    /// Dispatches a request and produces exactly one response.
    pub async fn dispatch(&self, request: &JsonRpcRequest) -> JsonRpcOutput {
        let id = request.id.clone();
        match request.method.as_str() {
            methods::INITIALIZE => dispatch::initialize::handle_initialize(id, &request.params),
            methods::PING => JsonRpcOutput::Success(JsonRpcResponse::success(id, json!({}))),
            methods::TOOLS_LIST => dispatch::tools_list::handle_tools_list(id),
            methods::TOOLS_CALL => {
                dispatch::tools_call::handle_tools_call(id, &request.params, self.repository.as_ref())
                    .await
            }
            other => {
                tracing::debug!(method = other, "unknown method");
                JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("method not found: {other}"),
                ))
            }
        }
    }

    /// Handles a notification. Notifications never produce a response.
    pub fn handle_notification(&self, notification: &JsonRpcNotification) {
        match notification.method.as_str() {
            methods::NOTIFICATIONS_INITIALIZED => tracing::info!("client initialized"),
            other => tracing::debug!(method = other, "ignoring notification"),
        }
    }
}
