//! Splitting of issue-form bodies into fields
//!
//! Issue forms render each question as a `### Header` line followed by the
//! answer. Blank lines are dropped and the remaining lines of a section are
//! trimmed and joined with `\n`. Text before the first header is ignored.
//! A reporter who types `### ` at the start of a line inside an answer
//! starts a new field.

use std::collections::BTreeMap;

/// Parse an issue body into `header -> text` pairs
#[must_use]
pub fn parse_issue_body(body: &str) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    let mut current: Option<String> = None;
    let mut lines: Vec<&str> = Vec::new();

    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(header) = line.strip_prefix("### ") {
            if let Some(key) = current.take() {
                fields.insert(key, lines.join("\n"));
            }
            lines.clear();
            current = Some(header.trim().to_string());
        } else if current.is_some() {
            lines.push(line);
        }
    }
    if let Some(key) = current {
        fields.insert(key, lines.join("\n"));
    }
    fields
}
