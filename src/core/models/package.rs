//! Package snapshots and their classification

use serde::Serialize;

use super::{FastTrackPolicy, OwnershipTier};

/// Metadata the package index declares for one package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    /// "Source" project URL, falling back to "Homepage"
    pub source_url: Option<String>,
    /// Free-form author field
    pub author: Option<String>,
    /// Author contact address
    pub author_email: Option<String>,
}

/// One package's ownership verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageClassification {
    /// Package name as listed on the index
    pub package: String,
    /// Declared source URL, empty when none was listed
    pub source_url: String,
    /// Assigned tier
    pub tier: OwnershipTier,
}

impl PackageClassification {
    /// Classification for a package with no declared source
    #[must_use]
    pub fn without_repository(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            source_url: String::new(),
            tier: OwnershipTier::NoRepositoryListed,
        }
    }
}

/// Fast-track or hold, derived purely from the tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Whether no manual ownership investigation is needed
    pub fast_track: bool,
    /// Packages whose tier the policy does not admit
    pub unresolved: usize,
    /// Packages classified
    pub total: usize,
    /// Policy the verdict was computed under
    pub policy: FastTrackPolicy,
}

impl Recommendation {
    /// Human-readable count of unresolved packages
    #[must_use]
    pub fn summary(&self) -> String {
        if self.unresolved == 0 {
            format!("all {} package(s) verified", self.total)
        } else {
            format!("{} of {} package(s) unresolved", self.unresolved, self.total)
        }
    }
}

/// Result of aggregating one claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum TriageOutcome {
    /// The index account maintains no packages
    NoPackages,
    /// Every listed package received exactly one tier
    Classified {
        /// Per-package verdicts, in listing order
        classifications: Vec<PackageClassification>,
        /// Aggregate verdict
        recommendation: Recommendation,
    },
}

impl TriageOutcome {
    /// Whether the outcome recommends fast-tracking
    #[must_use]
    pub const fn is_fast_track(&self) -> bool {
        match self {
            Self::NoPackages => false,
            Self::Classified { recommendation, .. } => recommendation.fast_track,
        }
    }
}
