//! The catalog tools exposed to MCP clients.
//!
//! Each tool maps onto one repository lookup and produces a plain JSON
//! document. A missing template is reported inside the document, never
//! as a protocol error.

use serde_json::{json, Value};

use templar_protocol::mcp::tools::McpToolDefinition;
use templar_registry::{RepositoryError, TemplateRepository};
use templar_types::Template;

/// Tool names as advertised by `tools/list`.
pub const LIST_TEMPLATES: &str = "list_templates";
pub const GET_TEMPLATE: &str = "get_template";
pub const SEARCH_TEMPLATES: &str = "search_templates";

/// A tool the catalog knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogTool {
    List,
    Get,
    Search,
}

impl CatalogTool {
    /// Every tool, in advertised order.
    pub const ALL: [CatalogTool; 3] = [Self::List, Self::Get, Self::Search];

    /// Resolves a tool by its advertised name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            LIST_TEMPLATES => Some(Self::List),
            GET_TEMPLATE => Some(Self::Get),
            SEARCH_TEMPLATES => Some(Self::Search),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::List => LIST_TEMPLATES,
            Self::Get => GET_TEMPLATE,
            Self::Search => SEARCH_TEMPLATES,
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::List => "Lists all code templates (id, name, description, tags).",
            Self::Get => "Returns a code template by id, including its source code (field `code`).",
            Self::Search => "Searches templates by keyword in name, description and tags.",
        }
    }

    /// JSON Schema for the tool's arguments.
    pub fn input_schema(self) -> Value {
        match self {
            Self::List => json!({"type": "object", "properties": {}}),
            Self::Get => json!({
                "type": "object",
                "properties": {
                    "template_id": {"type": "string", "description": "Template id"}
                },
                "required": ["template_id"]
            }),
            Self::Search => json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "description": "Case-insensitive search text"}
                },
                "required": ["query"]
            }),
        }
    }

    pub fn definition(self) -> McpToolDefinition {
        McpToolDefinition {
            name: self.name().to_string(),
            description: Some(self.description().to_string()),
            input_schema: self.input_schema(),
        }
    }
}

/// Outcome of a single-template lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(Template),
    NotFound(String),
}

impl Lookup {
    /// The document returned to tool callers.
    pub fn to_document(&self) -> Value {
        match self {
            Self::Found(template) => json!(template),
            Self::NotFound(id) => json!({"error": format!("Template '{id}' not found")}),
        }
    }
}

/// `list_templates`: every summary, sorted by id.
pub async fn list_templates(repository: &dyn TemplateRepository) -> Result<Value, RepositoryError> {
    let summaries = repository.list().await?;
    Ok(json!(summaries))
}

/// `get_template`: the full record, or an `{"error": ...}` document.
pub async fn get_template(
    repository: &dyn TemplateRepository,
    template_id: &str,
) -> Result<Value, RepositoryError> {
    let lookup = match repository.get(template_id).await? {
        Some(template) => Lookup::Found(template),
        None => Lookup::NotFound(template_id.to_string()),
    };
    Ok(lookup.to_document())
}

/// `search_templates`: summaries whose text contains `query`.
pub async fn search_templates(
    repository: &dyn TemplateRepository,
    query: &str,
) -> Result<Value, RepositoryError> {
    let summaries = repository.search(query).await?;
    Ok(json!(summaries))
}
