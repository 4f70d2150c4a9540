//! recovery-triage - Ownership triage for package index account recovery
//!
//! Given a recovery request naming a package-index account and the
//! hosting-platform account asking for it, this library lists the
//! account's packages, classifies each package's declared source URL
//! against the hosting account (direct ownership, organization admin or
//! member, unknown, no repository) and recommends fast-tracking or holding
//! the request for manual review.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;

pub use error::{Result, Service, TriageError};
