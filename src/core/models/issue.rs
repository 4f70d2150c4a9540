//! Support-issue references and parsed reports

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Result, TriageError};

/// Location of a support issue on the hosting platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRef {
    /// Repository owner (e.g. "pypi")
    pub owner: String,
    /// Repository name (e.g. "support")
    pub repo: String,
    /// Issue number
    pub number: u64,
}

impl IssueRef {
    /// Create an issue reference
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, number: u64) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            number,
        }
    }
}

impl std::fmt::Display for IssueRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

/// A fetched issue with its body split into header fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueReport {
    /// Login of the account that opened the issue
    pub reporter: String,
    /// Body sections keyed by their `### ` header
    pub fields: BTreeMap<String, String>,
    /// Browser URL of the issue
    pub url: Option<String>,
    /// When the issue was opened
    pub created_at: Option<DateTime<Utc>>,
}

impl IssueReport {
    /// Look up a required body field
    pub fn require_field(&self, field: &str) -> Result<&str> {
        self.fields
            .get(field)
            .map(String::as_str)
            .ok_or_else(|| TriageError::MissingField {
                field: field.to_string(),
            })
    }
}
