//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{IssueRef, RecoveryClaim, TriageOutcome, UrlClass};
use crate::core::services::TriageRun;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of triaging a claim, with or without an issue
#[derive(Debug, Serialize)]
pub struct TriageReport {
    /// Issue the report belongs to, if triage started from one
    pub issue: Option<IssueRef>,
    /// Accounts examined
    pub claim: RecoveryClaim,
    /// Classification and verdict
    pub outcome: TriageOutcome,
    /// Rendered markdown comment
    pub report: String,
    /// Label applied to the issue
    pub label: Option<String>,
    /// Whether the report was posted to the issue
    pub posted: bool,
}

impl TriageReport {
    /// Wrap a completed issue run
    #[must_use]
    pub fn from_run(run: TriageRun, posted: bool) -> Self {
        Self {
            issue: Some(run.issue),
            claim: run.claim,
            outcome: run.outcome,
            report: run.report,
            label: if posted { run.label } else { None },
            posted,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    /// One-line verdict, e.g. "FAST-TRACK: all 3 package(s) verified"
    #[must_use]
    pub fn verdict(&self) -> String {
        match &self.outcome {
            TriageOutcome::NoPackages => format!("NO PACKAGES: {}", self.claim.index_account),
            TriageOutcome::Classified { recommendation, .. } => {
                let head = if recommendation.fast_track { "FAST-TRACK" } else { "HOLD" };
                format!("{head}: {} (policy {})", recommendation.summary(), recommendation.policy)
            },
        }
    }

    fn render_human(&self) {
        println!("{}\n", self.report);
        let verdict = self.verdict();
        if self.outcome.is_fast_track() {
            println!("{}", verdict.green().bold());
        } else {
            println!("{}", verdict.yellow().bold());
        }
        match (&self.issue, self.posted) {
            (Some(issue), true) => {
                println!("Posted to {issue}");
                if let Some(label) = &self.label {
                    println!("Labeled {issue} with '{label}'");
                }
            },
            (Some(issue), false) => println!("Dry run: nothing posted to {issue}"),
            (None, _) => {},
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of classifying a single URL
#[derive(Debug, Serialize)]
pub struct UrlClassResult {
    /// URL as given
    pub url: String,
    /// Hosting account it was compared to
    pub identity: String,
    /// Classification
    pub class: UrlClass,
}

impl UrlClassResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.class),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Packages maintained by an index account
#[derive(Debug, Serialize)]
pub struct PackageListResult {
    /// Index account
    pub user: String,
    /// Package names in listing order
    pub packages: Vec<String>,
}

impl PackageListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.packages.is_empty() {
                    println!("{} maintains no packages.", self.user);
                    return;
                }
                println!("{} maintains {} package(s):", self.user, self.packages.len());
                for name in &self.packages {
                    println!("  {name}");
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
