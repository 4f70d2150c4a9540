//! Tests for run configuration loading

use std::fs;
use std::time::Duration;

use recovery_triage::config::TriageConfig;
use recovery_triage::core::models::{FastTrackPolicy, UrlClass};
use tempfile::TempDir;

#[test]
fn test_config_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[package_index]
base_url = "http://127.0.0.1:8080"
min_interval_ms = 0

[package_index.transport]
timeout_secs = 5
max_retries = 2
retry_backoff_ms = 100

[hosting]
api_url = "http://127.0.0.1:8081"
admin_role = "owner"

[triage]
policy = "owner-only"
username_field = "Index account"
fast_track_label = "verified"
"#,
    )
    .unwrap();

    let config = TriageConfig::load(Some(&path)).unwrap();

    assert_eq!(config.package_index.base_url, "http://127.0.0.1:8080");
    let settings = config.package_index.http_settings();
    assert_eq!(settings.min_interval, Duration::ZERO);
    assert_eq!(settings.timeout, Duration::from_secs(5));
    assert_eq!(settings.max_retries, 2);
    assert_eq!(settings.retry_backoff, Duration::from_millis(100));

    assert_eq!(config.hosting.api_url, "http://127.0.0.1:8081");
    assert_eq!(config.hosting.admin_role, "owner");
    assert_eq!(config.triage.policy, FastTrackPolicy::OwnerOnly);
    let triage = config.triage.settings();
    assert_eq!(triage.username_field, "Index account");
    assert_eq!(triage.fast_track_label, "verified");
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = TempDir::new().unwrap();
    let err = TriageConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read config"));
}

#[test]
fn test_invalid_policy_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[triage]\npolicy = \"everyone\"\n").unwrap();
    let err = TriageConfig::from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("invalid config"));
}

#[test]
fn test_hosting_domains_drive_classifier() {
    let config = TriageConfig::parse(
        "[hosting]\nweb_domain = \"codeberg.org\"\npages_suffix = \"codeberg.page\"\n",
    )
    .unwrap();
    let classifier = config.hosting.classifier();
    assert_eq!(classifier.classify("https://codeberg.org/alice/x", "alice"), UrlClass::DirectRepo);
    assert_eq!(
        classifier.classify("https://github.com/alice/x", "alice"),
        UrlClass::Unrecognized
    );
}
