//! Fast-track policy
//!
//! Which ownership tiers are strong enough to skip a manual ownership
//! investigation. Final approval of a recovery is always manual.

use serde::{Deserialize, Serialize};

use super::OwnershipTier;

/// Rule deciding which tiers qualify a request for fast-tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FastTrackPolicy {
    /// Direct ownership or organization admin
    #[default]
    OwnerOrAdmin,
    /// Direct ownership only
    OwnerOnly,
}

impl FastTrackPolicy {
    /// Least confident tier this policy still accepts
    #[must_use]
    pub const fn threshold(self) -> OwnershipTier {
        match self {
            Self::OwnerOrAdmin => OwnershipTier::OrgAdmin,
            Self::OwnerOnly => OwnershipTier::BelongsDirectly,
        }
    }

    /// Whether a package in `tier` counts as verified
    #[must_use]
    pub fn admits(self, tier: OwnershipTier) -> bool {
        tier <= self.threshold()
    }
}

impl std::fmt::Display for FastTrackPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OwnerOrAdmin => write!(f, "owner-or-admin"),
            Self::OwnerOnly => write!(f, "owner-only"),
        }
    }
}

impl std::str::FromStr for FastTrackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "owner-or-admin" => Ok(Self::OwnerOrAdmin),
            "owner-only" => Ok(Self::OwnerOnly),
            _ => Err(format!("Invalid policy: {s}. Use: owner-or-admin, owner-only")),
        }
    }
}
