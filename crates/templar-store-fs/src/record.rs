//! On-disk record format.
//!
//! Converts JSON documents into `Template` domain objects. Missing fields
//! default to empty values and a missing `id` falls back to the file stem.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use templar_registry::RepositoryError;
use templar_types::Template;

/// File extension of record documents.
pub const RECORD_EXTENSION: &str = "json";

/// Outcome of loading a single record file.
///
/// Bulk listings drop `Skipped` entries; callers that want visibility into
/// corrupt records can inspect them through
/// [`FsTemplateRepository::scan`](crate::FsTemplateRepository::scan).
#[derive(Debug, Clone, PartialEq)]
pub enum RecordLoad {
    /// The document parsed into a template.
    Loaded(Template),
    /// The file could not be read or parsed.
    Skipped {
        /// Path of the offending file.
        path: PathBuf,
        /// Why it was skipped.
        reason: String,
    },
}

/// Lenient mirror of the record document.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    code: String,
}

impl RawRecord {
    fn into_template(self, fallback_id: &str) -> Template {
        Template {
            id: self.id.unwrap_or_else(|| fallback_id.to_string()),
            name: self.name,
            description: self.description,
            tags: self.tags,
            code: self.code,
        }
    }
}

/// Returns the file stem used as the default id.
pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Parses a record document. `fallback_id` is used when `id` is absent.
pub fn parse_record(content: &str, fallback_id: &str) -> Result<Template, serde_json::Error> {
    let raw: RawRecord = serde_json::from_str(content)?;
    Ok(raw.into_template(fallback_id))
}

/// Reads and parses the record at `path`.
pub fn load_record(path: &Path) -> RecordLoad {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            return RecordLoad::Skipped {
                path: path.to_path_buf(),
                reason: format!("read failed: {e}"),
            }
        }
    };
    match parse_record(&content, &file_stem(path)) {
        Ok(template) => RecordLoad::Loaded(template),
        Err(e) => RecordLoad::Skipped {
            path: path.to_path_buf(),
            reason: format!("invalid record: {e}"),
        },
    }
}

/// Serializes a template as a human-readable JSON document.
pub fn encode_record(template: &Template) -> Result<String, RepositoryError> {
    serde_json::to_string_pretty(template).map_err(|e| RepositoryError::Encode {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_record() {
        let json = r#"{"id":"a","name":"A","description":"d","tags":["x"],"code":"c"}"#;
        let t = parse_record(json, "ignored").expect("parse");
        assert_eq!(t.id, "a");
        assert_eq!(t.tags, vec!["x"]);
        assert_eq!(t.code, "c");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let t = parse_record("{}", "stem").expect("parse");
        assert_eq!(t.id, "stem");
        assert!(t.name.is_empty());
        assert!(t.description.is_empty());
        assert!(t.tags.is_empty());
        assert!(t.code.is_empty());
    }

    #[test]
    fn non_object_document_is_rejected() {
        assert!(parse_record("[1, 2]", "x").is_err());
        assert!(parse_record("not json", "x").is_err());
    }

    #[test]
    fn encode_is_pretty_and_keeps_unicode() {
        let t = Template {
            id: "счёт".into(),
            name: "Счёт".into(),
            description: String::new(),
            tags: vec![],
            code: "<code/>".into(),
        };
        let doc = encode_record(&t).expect("encode");
        assert!(doc.contains("\n  \"id\": \"счёт\""));
        assert!(!doc.contains("\\u"));
        assert_eq!(parse_record(&doc, "x").expect("parse"), t);
    }

    #[test]
    fn missing_file_is_skipped() {
        let dir = tempfile::tempdir().expect("tmp");
        let path = dir.path().join("ghost.json");
        assert!(matches!(load_record(&path), RecordLoad::Skipped { .. }));
    }

    #[test]
    fn file_stem_strips_extension() {
        assert_eq!(file_stem(Path::new("/tmp/abc.json")), "abc");
    }
}
