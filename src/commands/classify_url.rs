//! Classify-url command - offline URL classification

use recovery_triage::config::TriageConfig;
use recovery_triage::core::models::ClaimedIdentity;
use recovery_triage::output::{OutputMode, UrlClassResult};

/// Classify `url` against `identity` using the configured domains
pub fn classify_url(config: &TriageConfig, url: &str, identity: &str, mode: OutputMode) {
    let identity = ClaimedIdentity::new(identity);
    UrlClassResult {
        url: url.to_string(),
        identity: identity.to_string(),
        class: config.hosting.classifier().classify(url, identity.as_str()),
    }
    .render(mode);
}
