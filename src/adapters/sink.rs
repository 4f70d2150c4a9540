//! Sinks that publish nothing
//!
//! Selected for dry runs: the CLI prints the report instead of posting it.

use log::info;

use crate::core::models::IssueRef;
use crate::core::ports::ReportSink;
use crate::error::Result;

/// Report sink that only logs what it would have done
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ReportSink for NoopSink {
    async fn post_report(&self, issue: &IssueRef, markdown: &str) -> Result<()> {
        info!("dry run: not posting {} byte report to {issue}", markdown.len());
        Ok(())
    }

    async fn apply_label(&self, issue: &IssueRef, label: &str) -> Result<()> {
        info!("dry run: not labeling {issue} with {label:?}");
        Ok(())
    }
}
