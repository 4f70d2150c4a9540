//! Triage command - classify an issue's claim and comment the result

use recovery_triage::adapters::NoopSink;
use recovery_triage::config::TriageConfig;
use recovery_triage::core::models::IssueRef;
use recovery_triage::core::services::{OwnershipAggregator, run_triage};
use recovery_triage::output::{OutputMode, TriageReport};

use super::clients;

/// Which issue to triage and whether to publish
#[derive(Debug)]
pub struct IssueArgs {
    /// Issue repository owner
    pub owner: String,
    /// Issue repository
    pub repo: String,
    /// Issue number
    pub number: u64,
    /// Skip posting
    pub dry_run: bool,
}

/// Triage one support issue
pub async fn triage(
    config: &TriageConfig,
    token: Option<&str>,
    args: &IssueArgs,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let pypi = clients::pypi(config)?;
    let github = clients::github(config, token)?;
    let aggregator = OwnershipAggregator::new(&pypi, &pypi, &github)
        .with_classifier(config.hosting.classifier())
        .with_admin_role(config.hosting.admin_role.clone())
        .with_policy(config.triage.policy);

    let issue = IssueRef::new(args.owner.clone(), args.repo.clone(), args.number);
    let settings = config.triage.settings();

    let run = if args.dry_run {
        run_triage(&github, &NoopSink, &aggregator, &issue, &settings).await?
    } else {
        run_triage(&github, &github, &aggregator, &issue, &settings).await?
    };

    TriageReport::from_run(run, !args.dry_run).render(mode);
    Ok(())
}
