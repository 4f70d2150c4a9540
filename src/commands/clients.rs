//! Client construction from config

use anyhow::Context;
use recovery_triage::adapters::{GithubClient, PypiClient};
use recovery_triage::config::TriageConfig;

/// Package index client for the configured index
pub fn pypi(config: &TriageConfig) -> anyhow::Result<PypiClient> {
    let index = &config.package_index;
    PypiClient::new(&index.base_url, &index.http_settings())
        .with_context(|| format!("cannot use package index at {}", index.base_url))
}

/// GitHub client for the configured API
pub fn github(config: &TriageConfig, token: Option<&str>) -> anyhow::Result<GithubClient> {
    let hosting = &config.hosting;
    if token.is_none() {
        log::warn!("no GITHUB_TOKEN set; private memberships are invisible and posting will fail");
    }
    GithubClient::new(&hosting.api_url, token, &hosting.http_settings())
        .with_context(|| format!("cannot use GitHub API at {}", hosting.api_url))
}
