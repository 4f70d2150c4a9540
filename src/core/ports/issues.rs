//! Issue tracker ports
//!
//! Reading a support issue and writing the triage result back to it.

use std::future::Future;

use crate::core::models::{IssueRef, IssueReport};
use crate::error::Result;

/// Source of support-issue reports
pub trait IssueSource: Send + Sync {
    /// Fetch an issue and split its body into fields
    fn fetch_report(&self, issue: &IssueRef) -> impl Future<Output = Result<IssueReport>> + Send;
}

/// Destination for the rendered triage report
///
/// Chosen at composition time: the hosting platform for real runs, a
/// no-op sink for dry runs and tests.
pub trait ReportSink: Send + Sync {
    /// Post the markdown report as an issue comment
    fn post_report(&self, issue: &IssueRef, markdown: &str)
    -> impl Future<Output = Result<()>> + Send;

    /// Attach a label to the issue
    fn apply_label(&self, issue: &IssueRef, label: &str) -> impl Future<Output = Result<()>> + Send;
}
