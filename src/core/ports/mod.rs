//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the triage logic and the
//! services it consults (package index, hosting platform, issue tracker).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on HTTP clients. Tests
//! drive the aggregator with in-memory fakes, and the HTML scraping behind
//! [`PackageDirectory`] can be replaced by an official API without touching
//! the aggregator.

mod hosting;
mod issues;
mod package_index;

pub use hosting::OrgMembership;
pub use issues::{IssueSource, ReportSink};
pub use package_index::{PackageDirectory, PackageMetadata};
