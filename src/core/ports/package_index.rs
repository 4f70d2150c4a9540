//! Package index ports
//!
//! Defines the interfaces for listing an account's packages and reading
//! a package's declared metadata.

use std::future::Future;

use crate::core::models::PackageInfo;
use crate::error::Result;

/// Listing of packages maintained by an index account
///
/// Implementations must fail rather than return a partial listing: an
/// incomplete package set could hide a package the claimant does not own.
pub trait PackageDirectory: Send + Sync {
    /// Names of every package the account maintains, in listing order
    fn list_packages(&self, user: &str) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// Per-package metadata lookup
pub trait PackageMetadata: Send + Sync {
    /// Declared source URL and author fields for a package
    fn get_package_info(&self, name: &str) -> impl Future<Output = Result<PackageInfo>> + Send;
}
