//! Domain models for recovery triage
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ClaimedIdentity`] / [`RecoveryClaim`] - Unverified account names
//! - [`OwnershipTier`] - Confidence that a claim controls a package's source
//! - [`FastTrackPolicy`] - Which tiers qualify for fast-tracking
//! - [`UrlClass`] / [`OrgRole`] - Raw ownership signals
//! - [`PackageClassification`] / [`TriageOutcome`] - Results of a run

mod identity;
mod issue;
mod ownership;
mod package;
mod policy;
mod tier;

pub use identity::{ClaimedIdentity, RecoveryClaim};
pub use issue::{IssueRef, IssueReport};
pub use ownership::{OrgRole, UrlClass};
pub use package::{PackageClassification, PackageInfo, Recommendation, TriageOutcome};
pub use policy::FastTrackPolicy;
pub use tier::OwnershipTier;
