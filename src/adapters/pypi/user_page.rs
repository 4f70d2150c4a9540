//! Scraping of the package index's per-user HTML page
//!
//! The index offers no API listing an account's packages. The user page
//! states the project count in its first `<h2>` ("3 projects", "1 project",
//! "No projects") and lists one `<a class="package-snippet">` per package.
//! There is no pagination handling: a count that disagrees with the
//! listing is reported as an error instead of returning a partial set.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, TriageError};

fn heading_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<h2\b[^>]*>(.*?)</h2>").expect("h2 regex"))
}

fn project_count_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(\d+)\s*projects?").expect("project count regex"))
}

fn anchor_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<a\b([^>]*)>(.*?)</a>").expect("anchor regex"))
}

fn class_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)\bclass\s*=\s*["']([^"']*)["']"#).expect("class regex"))
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag regex"))
}

/// Package names listed on a user page, checked against the declared count
pub fn parse_user_page(user: &str, html: &str) -> Result<Vec<String>> {
    let declared = declared_project_count(html).ok_or_else(|| TriageError::ListingParse {
        user: user.to_string(),
    })?;
    let packages = package_names(html);
    if packages.len() != declared {
        return Err(TriageError::InconsistentCount {
            user: user.to_string(),
            declared,
            parsed: packages.len(),
        });
    }
    Ok(packages)
}

/// Project count stated in the first `<h2>`
#[must_use]
pub fn declared_project_count(html: &str) -> Option<usize> {
    let heading = heading_regex().captures(html)?.get(1)?.as_str();
    let text = tag_regex()
        .replace_all(heading, "")
        .to_lowercase()
        .replace("no projects", "0 projects");
    project_count_regex().captures(&text)?.get(1)?.as_str().parse().ok()
}

/// Names from every `package-snippet` anchor, in page order
#[must_use]
pub fn package_names(html: &str) -> Vec<String> {
    anchor_regex()
        .captures_iter(html)
        .filter(|caps| caps.get(1).is_some_and(|attrs| is_package_snippet(attrs.as_str())))
        .filter_map(|caps| caps.get(2))
        .map(|inner| {
            let text = tag_regex().replace_all(inner.as_str(), "");
            text.trim().lines().next().unwrap_or_default().trim().to_string()
        })
        .collect()
}

fn is_package_snippet(attrs: &str) -> bool {
    class_regex()
        .captures(attrs)
        .and_then(|caps| caps.get(1))
        .is_some_and(|classes| classes.as_str().split_whitespace().any(|c| c == "package-snippet"))
}
