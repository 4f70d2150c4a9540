//! End-to-end triage of one support issue
//!
//! Fetch the issue, read the claimed index account, aggregate ownership,
//! render the report and hand it to the sink. Any error before the report
//! is rendered aborts the run without touching the sink.

use log::{error, info};
use serde::Serialize;

use crate::core::models::{IssueRef, RecoveryClaim, TriageOutcome};
use crate::core::ports::{IssueSource, OrgMembership, PackageDirectory, PackageMetadata, ReportSink};
use crate::core::services::aggregator::OwnershipAggregator;
use crate::core::services::report::format_report;
use crate::error::Result;

/// Issue field holding the package-index username
pub const DEFAULT_USERNAME_FIELD: &str = "PyPI Username";

/// Label applied to fast-tracked issues
pub const DEFAULT_FAST_TRACK_LABEL: &str = "fasttrack";

/// Issue-facing settings of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageSettings {
    /// Body header holding the claimed index account
    pub username_field: String,
    /// Label applied when the outcome is fast-track
    pub fast_track_label: String,
}

impl Default for TriageSettings {
    fn default() -> Self {
        Self {
            username_field: DEFAULT_USERNAME_FIELD.to_string(),
            fast_track_label: DEFAULT_FAST_TRACK_LABEL.to_string(),
        }
    }
}

/// Everything a completed run produced
#[derive(Debug, Clone, Serialize)]
pub struct TriageRun {
    /// The triaged issue
    pub issue: IssueRef,
    /// Accounts the issue links
    pub claim: RecoveryClaim,
    /// Aggregated classification
    pub outcome: TriageOutcome,
    /// Markdown handed to the sink
    pub report: String,
    /// Label applied, if any
    pub label: Option<String>,
}

/// Read the claim out of an issue
pub async fn read_claim<S: IssueSource>(
    source: &S,
    issue: &IssueRef,
    settings: &TriageSettings,
) -> Result<RecoveryClaim> {
    let report = source.fetch_report(issue).await?;
    let index_account = report.require_field(&settings.username_field)?;
    Ok(RecoveryClaim::new(index_account, &report.reporter))
}

/// Triage one issue and publish the result to `sink`
pub async fn run_triage<S, K, D, M, H>(
    source: &S,
    sink: &K,
    aggregator: &OwnershipAggregator<'_, D, M, H>,
    issue: &IssueRef,
    settings: &TriageSettings,
) -> Result<TriageRun>
where
    S: IssueSource,
    K: ReportSink,
    D: PackageDirectory,
    M: PackageMetadata,
    H: OrgMembership,
{
    let claim = read_claim(source, issue, settings).await?;
    info!(
        "{issue}: {} claims index account {}",
        claim.hosting_account, claim.index_account
    );

    let outcome = aggregator.aggregate(&claim).await?;
    let report = format_report(&claim, &outcome);

    if let Err(e) = sink.post_report(issue, &report).await {
        error!("failed to post report to {issue}: {e}");
        return Err(e);
    }

    let label = if outcome.is_fast_track() {
        if let Err(e) = sink.apply_label(issue, &settings.fast_track_label).await {
            error!("failed to label {issue}: {e}");
            return Err(e);
        }
        Some(settings.fast_track_label.clone())
    } else {
        None
    };

    Ok(TriageRun {
        issue: issue.clone(),
        claim,
        outcome,
        report,
        label,
    })
}
