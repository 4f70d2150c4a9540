//! Check-user command - triage an account pair without an issue

use recovery_triage::config::TriageConfig;
use recovery_triage::core::models::RecoveryClaim;
use recovery_triage::core::services::{OwnershipAggregator, format_report};
use recovery_triage::output::{OutputMode, TriageReport};

use super::clients;

/// Classify every package of `index_user` against `github_user`
pub async fn check_user(
    config: &TriageConfig,
    token: Option<&str>,
    index_user: &str,
    github_user: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let pypi = clients::pypi(config)?;
    let github = clients::github(config, token)?;
    let aggregator = OwnershipAggregator::new(&pypi, &pypi, &github)
        .with_classifier(config.hosting.classifier())
        .with_admin_role(config.hosting.admin_role.clone())
        .with_policy(config.triage.policy);

    let claim = RecoveryClaim::new(index_user, github_user.unwrap_or(index_user));
    let outcome = aggregator.aggregate(&claim).await?;
    let report = format_report(&claim, &outcome);

    TriageReport {
        issue: None,
        claim,
        outcome,
        report,
        label: None,
        posted: false,
    }
    .render(mode);
    Ok(())
}
