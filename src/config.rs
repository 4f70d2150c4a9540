//! Run configuration
//!
//! Every field has a default matching the public services, so a missing
//! config file is not an error. When no path is given, the file is looked
//! up at `~/.config/recovery-triage/config.toml`.
//!
//! ```toml
//! [package_index]
//! base_url = "https://pypi.org"
//! min_interval_ms = 1000
//!
//! [package_index.transport]
//! timeout_secs = 30
//! max_retries = 2
//!
//! [hosting]
//! api_url = "https://api.github.com"
//!
//! [triage]
//! policy = "owner-only"
//! ```
//!
//! The GitHub token is never read from this file; it comes from the
//! `GITHUB_TOKEN` environment variable.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::adapters::github::DEFAULT_API_URL;
use crate::adapters::http::HttpSettings;
use crate::adapters::pypi::DEFAULT_INDEX_URL;
use crate::core::models::FastTrackPolicy;
use crate::core::services::role_resolver::DEFAULT_ADMIN_ROLE;
use crate::core::services::triage::{DEFAULT_FAST_TRACK_LABEL, DEFAULT_USERNAME_FIELD};
use crate::core::services::url_classifier::{DEFAULT_PAGES_SUFFIX, DEFAULT_WEB_DOMAIN};
use crate::core::services::{TriageSettings, UrlClassifier};

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "recovery-triage";

/// Config filename
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Complete run configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TriageConfig {
    /// Package index connection
    pub package_index: PackageIndexConfig,
    /// Hosting platform connection and domains
    pub hosting: HostingConfig,
    /// Issue handling and verdict policy
    pub triage: PolicyConfig,
}

/// Timeout and retry for one service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransportConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Retries for failed GETs (0 disables retrying)
    pub max_retries: u32,
    /// First retry delay in milliseconds, doubled per retry
    pub retry_backoff_ms: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_retries: 0,
            retry_backoff_ms: 500,
        }
    }
}

impl TransportConfig {
    /// Client settings with requests spaced `min_interval_ms` apart
    #[must_use]
    pub const fn http_settings(&self, min_interval_ms: u64) -> HttpSettings {
        HttpSettings {
            min_interval: Duration::from_millis(min_interval_ms),
            timeout: Duration::from_secs(self.timeout_secs),
            max_retries: self.max_retries,
            retry_backoff: Duration::from_millis(self.retry_backoff_ms),
        }
    }
}

/// Package index section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageIndexConfig {
    /// Base URL of the index
    pub base_url: String,
    /// Minimum milliseconds between requests
    pub min_interval_ms: u64,
    /// Timeout and retry (`[package_index.transport]`)
    pub transport: TransportConfig,
}

impl Default for PackageIndexConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_INDEX_URL.to_string(),
            min_interval_ms: 1000,
            transport: TransportConfig::default(),
        }
    }
}

impl PackageIndexConfig {
    /// Client settings for the index
    #[must_use]
    pub const fn http_settings(&self) -> HttpSettings {
        self.transport.http_settings(self.min_interval_ms)
    }
}

/// Hosting platform section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostingConfig {
    /// Base URL of the REST API
    pub api_url: String,
    /// Domain repositories are served from
    pub web_domain: String,
    /// Domain per-account pages sites are served under
    pub pages_suffix: String,
    /// Role value marking an organization admin
    pub admin_role: String,
    /// Minimum milliseconds between requests
    pub min_interval_ms: u64,
    /// Timeout and retry (`[hosting.transport]`)
    pub transport: TransportConfig,
}

impl Default for HostingConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            web_domain: DEFAULT_WEB_DOMAIN.to_string(),
            pages_suffix: DEFAULT_PAGES_SUFFIX.to_string(),
            admin_role: DEFAULT_ADMIN_ROLE.to_string(),
            min_interval_ms: 0,
            transport: TransportConfig::default(),
        }
    }
}

impl HostingConfig {
    /// URL classifier for this platform's domains
    #[must_use]
    pub fn classifier(&self) -> UrlClassifier {
        UrlClassifier::new(&self.web_domain, &self.pages_suffix)
    }

    /// Client settings for the API
    #[must_use]
    pub const fn http_settings(&self) -> HttpSettings {
        self.transport.http_settings(self.min_interval_ms)
    }
}

/// Triage section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    /// Which tiers qualify for fast-tracking
    pub policy: FastTrackPolicy,
    /// Issue header holding the index username
    pub username_field: String,
    /// Label applied to fast-tracked issues
    pub fast_track_label: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            policy: FastTrackPolicy::default(),
            username_field: DEFAULT_USERNAME_FIELD.to_string(),
            fast_track_label: DEFAULT_FAST_TRACK_LABEL.to_string(),
        }
    }
}

impl PolicyConfig {
    /// Issue-facing settings for a run
    #[must_use]
    pub fn settings(&self) -> TriageSettings {
        TriageSettings {
            username_field: self.username_field.clone(),
            fast_track_label: self.fast_track_label.clone(),
        }
    }
}

impl TriageConfig {
    /// Default config file location, if a config dir exists on this platform
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load an explicit file, or the default file when present, or defaults
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse config text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
