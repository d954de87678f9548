//! Template record, listing summary and editable draft.

use serde::{Deserialize, Serialize};

use crate::error::TemplarError;

/// A stored code template, including its body.
///
/// The `id` is assigned once at creation and doubles as the storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Filesystem-safe identifier derived from the original name.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Free-form description (may be empty).
    pub description: String,
    /// Ordered tags; duplicates are kept.
    pub tags: Vec<String>,
    /// Template body. Opaque to the catalog.
    pub code: String,
}

impl Template {
    /// Builds a record from a draft under the given id.
    pub fn from_draft(id: impl Into<String>, draft: TemplateDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            description: draft.description,
            tags: draft.tags,
            code: draft.code,
        }
    }

    /// Returns the listing projection of this template (no `code`).
    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// Listing view of a template: every field except `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl TemplateSummary {
    /// Case-insensitive substring match against name, description and
    /// space-joined tags. An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let haystack = format!("{} {} {}", self.name, self.description, self.tags.join(" "));
        haystack.to_lowercase().contains(&query.to_lowercase())
    }
}

impl From<Template> for TemplateSummary {
    fn from(t: Template) -> Self {
        Self {
            id: t.id,
            name: t.name,
            description: t.description,
            tags: t.tags,
        }
    }
}

/// Caller-supplied fields for create and update.
///
/// The catalog trusts its callers: drafts should be [`validate`](Self::validate)d
/// at the boundary before they reach a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub code: String,
}

impl TemplateDraft {
    /// Creates a new draft.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            tags,
            code: code.into(),
        }
    }

    /// Builds a draft from raw text inputs.
    ///
    /// Name and description are trimmed, tags are parsed from a
    /// comma-separated list, and the code is kept verbatim.
    pub fn from_input(name: &str, description: &str, tags: &str, code: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            tags: parse_tags(tags),
            code: code.to_string(),
        }
    }

    /// Checks that the name is non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error when the name is blank.
    pub fn validate(&self) -> Result<(), TemplarError> {
        if self.name.trim().is_empty() {
            return Err(TemplarError::invalid_input("Name cannot be empty"));
        }
        Ok(())
    }
}

/// Splits a comma-separated tag list, trimming each piece and dropping
/// empty ones. Order and duplicates are preserved.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Joins tags back into the comma-separated form used by input fields.
pub fn format_tags(tags: &[String]) -> String {
    tags.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice() -> TemplateSummary {
        TemplateSummary {
            id: "invoice_printer".into(),
            name: "Invoice Printer".into(),
            description: "Prints invoices".into(),
            tags: vec!["finance".into(), "print".into()],
        }
    }

    #[test]
    fn parse_tags_trims_and_drops_empty() {
        assert_eq!(parse_tags(" a, b ,, c ,"), vec!["a", "b", "c"]);
    }

    #[test]
    fn parse_tags_keeps_duplicates_and_order() {
        assert_eq!(parse_tags("z,a,z"), vec!["z", "a", "z"]);
    }

    #[test]
    fn parse_tags_empty_input() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn format_tags_joins_with_comma() {
        let tags = vec!["a".to_string(), "b".to_string()];
        assert_eq!(format_tags(&tags), "a, b");
        assert_eq!(parse_tags(&format_tags(&tags)), tags);
    }

    #[test]
    fn matches_is_case_insensitive() {
        let s = invoice();
        assert!(s.matches("invoice"));
        assert!(s.matches("INVOICE"));
        assert!(s.matches("Printer"));
        assert!(s.matches("finance"));
        assert!(!s.matches("payroll"));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(invoice().matches(""));
    }

    #[test]
    fn matches_across_joined_fields() {
        // name and description are joined by a single space
        assert!(invoice().matches("printer prints"));
    }

    #[test]
    fn summary_drops_code() {
        let t = Template {
            id: "x".into(),
            name: "X".into(),
            description: String::new(),
            tags: vec![],
            code: "body".into(),
        };
        let json = serde_json::to_value(t.summary()).expect("ser");
        assert!(json.get("code").is_none());
        assert_eq!(json["id"], "x");
    }

    #[test]
    fn from_input_trims_name_and_description_only() {
        let d = TemplateDraft::from_input("  Name ", " desc ", "a, b", "  code  ");
        assert_eq!(d.name, "Name");
        assert_eq!(d.description, "desc");
        assert_eq!(d.tags, vec!["a", "b"]);
        assert_eq!(d.code, "  code  ");
    }

    #[test]
    fn validate_rejects_blank_name() {
        assert!(TemplateDraft::from_input("   ", "", "", "").validate().is_err());
        assert!(TemplateDraft::from_input("ok", "", "", "").validate().is_ok());
    }

    #[test]
    fn from_draft_keeps_fields() {
        let draft = TemplateDraft::new("N", "D", vec!["t".into()], "C");
        let t = Template::from_draft("n", draft);
        assert_eq!(t.id, "n");
        assert_eq!(t.name, "N");
        assert_eq!(t.tags, vec!["t"]);
        assert_eq!(t.code, "C");
    }
}
