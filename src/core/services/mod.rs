//! Business logic services
//!
//! - [`url_classifier`] - Classify a source URL against a claimed account
//! - [`role_resolver`] - Resolve an account's role in an organization
//! - [`aggregator`] - Classify every package of a claim and recommend
//! - [`report`] - Render the outcome as markdown
//! - [`triage`] - Run the whole flow for one support issue

pub mod aggregator;
pub mod report;
pub mod role_resolver;
pub mod triage;
pub mod url_classifier;

pub use aggregator::{OwnershipAggregator, recommend};
pub use report::format_report;
pub use role_resolver::resolve_role;
pub use triage::{TriageRun, TriageSettings, read_claim, run_triage};
pub use url_classifier::{UrlClassifier, classify_url, normalize_url};
