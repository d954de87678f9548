//! Handles the `tools/call` MCP method.

use serde_json::Value;

use templar_protocol::mcp::tools::{ToolsCallParams, ToolsCallResult};
use templar_protocol::schema::{string_arg, validate_arguments};
use templar_protocol::{JsonRpcErrorResponse, RequestId};
use templar_registry::TemplateRepository;

use crate::catalog::{self, CatalogTool};
use crate::handler::JsonRpcOutput;

/// Handles the `tools/call` request.
pub(crate) async fn handle_tools_call(
    id: RequestId,
    params: &Option<Value>,
    repository: &dyn TemplateRepository,
) -> JsonRpcOutput {
    // 1. Parse params
    let call_params = match params {
        Some(p) => match serde_json::from_value::<ToolsCallParams>(p.clone()) {
            Ok(cp) => cp,
            Err(e) => {
                return JsonRpcOutput::Error(JsonRpcErrorResponse::invalid_params(
                    id,
                    format!("invalid tools/call params: {e}"),
                ));
            }
        },
        None => {
            return JsonRpcOutput::Error(JsonRpcErrorResponse::invalid_params(
                id,
                "tools/call requires params",
            ));
        }
    };

    // 2. Resolve tool
    let Some(tool) = CatalogTool::from_name(&call_params.name) else {
        return JsonRpcOutput::Error(JsonRpcErrorResponse::invalid_params(
            id,
            format!("unknown tool: {}", call_params.name),
        ));
    };

    // 3. Check arguments
    let args = &call_params.arguments;
    if let Err(e) = validate_arguments(&tool.input_schema(), args) {
        return JsonRpcOutput::Error(JsonRpcErrorResponse::invalid_params(id, e.to_string()));
    }

    // 4. Run
    tracing::debug!(tool = tool.name(), "executing tool via MCP");
    let outcome = match tool {
        CatalogTool::List => catalog::list_templates(repository).await,
        CatalogTool::Get => {
            let template_id = string_arg(args, "template_id").unwrap_or_default();
            catalog::get_template(repository, template_id).await
        }
        CatalogTool::Search => {
            let query = string_arg(args, "query").unwrap_or_default();
            catalog::search_templates(repository, query).await
        }
    };

    let call_result = match outcome {
        Ok(document) => ToolsCallResult::json(&document),
        Err(e) => {
            tracing::warn!(tool = tool.name(), error = %e, "tool failed");
            ToolsCallResult::error(e.to_string())
        }
    };
    super::success(id, call_result)
}
