//! Ownership tiers
//!
//! Five confidence levels for "the claimed hosting account controls this
//! package's source". Declaration order is rank order: lower rank means
//! more confidence. The derived `Ord` follows it.

use serde::{Deserialize, Serialize};

/// Confidence that the claimed account controls a package's source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OwnershipTier {
    /// Repository or pages site lives directly under the claimed account
    BelongsDirectly,
    /// Repository belongs to an organization the account administers
    OrgAdmin,
    /// Repository belongs to an organization the account is a member of
    OrgMember,
    /// No ownership signal could be established
    Unknown,
    /// The package declares no source or homepage URL
    NoRepositoryListed,
}

impl OwnershipTier {
    /// All tiers in rank order
    pub const ALL: [Self; 5] = [
        Self::BelongsDirectly,
        Self::OrgAdmin,
        Self::OrgMember,
        Self::Unknown,
        Self::NoRepositoryListed,
    ];

    /// Position in the ordering (0 = most confident)
    #[must_use]
    pub const fn rank(self) -> usize {
        match self {
            Self::BelongsDirectly => 0,
            Self::OrgAdmin => 1,
            Self::OrgMember => 2,
            Self::Unknown => 3,
            Self::NoRepositoryListed => 4,
        }
    }

    /// Column header used in the report table
    #[must_use]
    pub const fn column_label(self) -> &'static str {
        match self {
            Self::BelongsDirectly => "Owner",
            Self::OrgAdmin => "Admin",
            Self::OrgMember => "Member",
            Self::Unknown => "Unknown",
            Self::NoRepositoryListed => "No Repo",
        }
    }
}

impl std::fmt::Display for OwnershipTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BelongsDirectly => write!(f, "belongs-directly"),
            Self::OrgAdmin => write!(f, "org-admin"),
            Self::OrgMember => write!(f, "org-member"),
            Self::Unknown => write!(f, "unknown"),
            Self::NoRepositoryListed => write!(f, "no-repository-listed"),
        }
    }
}
