//! Packages command - list an index account's packages

use recovery_triage::config::TriageConfig;
use recovery_triage::core::models::ClaimedIdentity;
use recovery_triage::core::ports::PackageDirectory;
use recovery_triage::output::{OutputMode, PackageListResult};

use super::clients;

/// List the packages `user` maintains
pub async fn packages(config: &TriageConfig, user: &str, mode: OutputMode) -> anyhow::Result<()> {
    let user = ClaimedIdentity::new(user);
    let pypi = clients::pypi(config)?;
    let packages = pypi.list_packages(user.as_str()).await?;
    PackageListResult {
        user: user.to_string(),
        packages,
    }
    .render(mode);
    Ok(())
}
