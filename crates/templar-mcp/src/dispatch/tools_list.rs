//! Handles the `tools/list` MCP method.

use templar_protocol::mcp::tools::ToolsListResult;
use templar_protocol::RequestId;

use crate::catalog::CatalogTool;
use crate::handler::JsonRpcOutput;

/// Handles the `tools/list` request. The tool set is fixed, so this never
/// touches the repository.
pub(crate) fn handle_tools_list(id: RequestId) -> JsonRpcOutput {
    let result = ToolsListResult {
        tools: CatalogTool::ALL.iter().map(|t| t.definition()).collect(),
        next_cursor: None,
    };
    super::success(id, result)
}
