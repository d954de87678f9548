//! Output formatting for CLI responses.

use serde_json::Value;

use templar_types::{format_tags, Template, TemplateSummary};

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("[OK] {message}");
}

/// Prints a JSON document, pretty-printed.
pub fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Formats summaries as an aligned table, one template per line.
pub fn summary_table(items: &[TemplateSummary]) -> String {
    if items.is_empty() {
        return "(no templates)".to_string();
    }
    let id_width = items.iter().map(|t| t.id.chars().count()).max().unwrap_or(0).max(2);
    let name_width = items.iter().map(|t| t.name.chars().count()).max().unwrap_or(0).max(4);
    let mut out = format!("{:<id_width$}  {:<name_width$}  TAGS", "ID", "NAME");
    for t in items {
        out.push('\n');
        out.push_str(&format!(
            "{:<id_width$}  {:<name_width$}  {}",
            t.id,
            t.name,
            format_tags(&t.tags)
        ));
    }
    out
}

/// Formats a full record for the terminal.
pub fn template_detail(t: &Template) -> String {
    let mut out = format!("id:          {}\nname:        {}\n", t.id, t.name);
    if !t.description.is_empty() {
        out.push_str(&format!("description: {}\n", t.description));
    }
    if !t.tags.is_empty() {
        out.push_str(&format!("tags:        {}\n", format_tags(&t.tags)));
    }
    out.push_str("---\n");
    out.push_str(&t.code);
    out
}
