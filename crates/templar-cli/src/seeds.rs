//! Demo templates created on first start.

use templar_types::TemplateDraft;

/// The built-in demo set.
pub fn demo_templates() -> Vec<TemplateDraft> {
    vec![
        TemplateDraft::new(
            "Invoice Template",
            "Builds a plain-text invoice from line items",
            tags(&["finance", "report"]),
            INVOICE,
        ),
        TemplateDraft::new(
            "HTTP Health Check",
            "Polls a URL until it answers 200 or the retries run out",
            tags(&["http", "ops"]),
            HEALTH_CHECK,
        ),
        TemplateDraft::new(
            "CSV Export",
            "Writes rows to a CSV file with a header line",
            tags(&["export", "csv"]),
            CSV_EXPORT,
        ),
    ]
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

const INVOICE: &str = r#"def render_invoice(number, customer, lines):
    total = sum(qty * price for _, qty, price in lines)
    out = [f"Invoice #{number}", f"Customer: {customer}", ""]
    for name, qty, price in lines:
        out.append(f"{name:<30} {qty:>4} x {price:>10.2f}")
    out.append("")
    out.append(f"{'Total':<30} {total:>17.2f}")
    return "\n".join(out)
"#;

const HEALTH_CHECK: &str = r#"#!/bin/sh
url="$1"
retries="${2:-10}"
for i in $(seq 1 "$retries"); do
    code=$(curl -s -o /dev/null -w '%{http_code}' "$url")
    [ "$code" = "200" ] && exit 0
    sleep 2
done
echo "service at $url is not healthy" >&2
exit 1
"#;

const CSV_EXPORT: &str = r#"import csv

def export_rows(path, header, rows):
    with open(path, "w", newline="", encoding="utf-8") as f:
        writer = csv.writer(f)
        writer.writerow(header)
        writer.writerows(rows)
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use templar_store_fs::repository::base_id;

    #[test]
    fn demo_templates_are_valid_and_distinct() {
        let drafts = demo_templates();
        assert!(drafts.iter().all(|d| d.validate().is_ok()));
        let mut ids: Vec<String> = drafts.iter().map(|d| base_id(&d.name)).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), drafts.len());
    }
}
