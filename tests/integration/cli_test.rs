//! Tests for the recovery-triage binary

use std::fs;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::fake_services::FakeServices;

/// Helper function to create a recovery-triage command
fn triage_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("recovery-triage"));
    cmd.env_remove("GITHUB_TOKEN")
        .env_remove("ISSUE_NUMBER")
        .env_remove("GITHUB_ISSUE_OWNER")
        .env_remove("GITHUB_ISSUE_REPO");
    cmd
}

#[test]
fn test_version() {
    triage_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("recovery-triage v"));
}

#[test]
fn test_help_lists_commands() {
    triage_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("triage"))
        .stdout(predicate::str::contains("classify-url"));
}

#[test]
fn test_classify_url_human() {
    triage_cmd()
        .args(["classify-url", "https://github.com/acme/foo", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("organization (acme)"));
}

#[test]
fn test_classify_url_json() {
    let output = triage_cmd()
        .args(["--json", "classify-url", "https://alice.github.io", "`alice`"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["class"]["kind"], "pages-site");
    assert_eq!(json["identity"], "alice");
}

#[test]
fn test_invalid_policy_fails() {
    triage_cmd()
        .args(["--policy", "everyone", "classify-url", "https://github.com/a/b", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid policy"));
}

#[test]
fn test_triage_requires_issue_number() {
    triage_cmd().arg("triage").assert().failure();
}

#[test]
fn test_dry_run_posts_nothing() {
    let services = FakeServices::new()
        .issue("pypi", "support", 9, "alice", "alice")
        .user_page("alice", &["foo"])
        .project("foo", Some("https://github.com/alice/foo"))
        .start();
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, services.config_toml()).unwrap();

    let output = triage_cmd()
        .arg("--json")
        .arg("--config")
        .arg(&config)
        .args(["triage", "--issue", "9", "--dry-run"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["posted"], false);
    assert_eq!(json["outcome"]["recommendation"]["fast_track"], true);
    assert!(json["label"].is_null());
    assert!(services.posts().is_empty());
}

#[test]
fn test_packages_command() {
    let services = FakeServices::new().user_page("alice", &["foo", "bar"]).start();
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, services.config_toml()).unwrap();

    triage_cmd()
        .arg("--config")
        .arg(&config)
        .args(["packages", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice maintains 2 package(s)"))
        .stdout(predicate::str::contains("  bar"));
}

#[test]
fn test_missing_user_reports_error() {
    let services = FakeServices::new().start();
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, services.config_toml()).unwrap();

    triage_cmd()
        .arg("--config")
        .arg(&config)
        .args(["check-user", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
