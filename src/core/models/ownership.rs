//! Ownership signals from URLs and organization membership

use serde::Serialize;

/// What a source URL says about who owns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum UrlClass {
    /// Repository directly under the claimed account
    DirectRepo,
    /// The claimed account's own pages site
    PagesSite,
    /// Repository or pages site of some other account, assumed an organization
    Organization {
        /// Lowercased account name
        name: String,
    },
    /// Not on the hosting platform
    Unrecognized,
}

impl UrlClass {
    /// Whether the URL alone proves the claimed account owns the source
    #[must_use]
    pub const fn belongs_to_identity(&self) -> bool {
        matches!(self, Self::DirectRepo | Self::PagesSite)
    }
}

impl std::fmt::Display for UrlClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectRepo => write!(f, "direct-repo"),
            Self::PagesSite => write!(f, "pages-site"),
            Self::Organization { name } => write!(f, "organization ({name})"),
            Self::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Role of an account inside an organization
///
/// Declaration order is reporting order, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgRole {
    /// Organization administrator
    Admin,
    /// Public member without an admin role
    Member,
    /// Not a public member
    None,
}

impl std::fmt::Display for OrgRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Member => write!(f, "member"),
            Self::None => write!(f, "none"),
        }
    }
}
