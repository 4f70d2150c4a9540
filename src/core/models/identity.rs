//! Claimed identities
//!
//! A recovery issue names two accounts: the package-index account being
//! recovered and the hosting-platform account of the person asking.
//! Neither is verified; establishing a link between them is the point of
//! the triage run.

use serde::Serialize;

/// An account name asserted by a reporter
///
/// Construction sanitizes the raw text: surrounding whitespace is trimmed
/// and every backtick is removed, since reporters often wrap their name in
/// inline code for markdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ClaimedIdentity(String);

impl ClaimedIdentity {
    /// Sanitize and wrap a raw account name
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().replace('`', "").trim().to_string())
    }

    /// The sanitized name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether sanitizing left nothing behind
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ClaimedIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClaimedIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The pair of accounts a recovery request links together
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoveryClaim {
    /// Package-index account whose packages are examined
    pub index_account: ClaimedIdentity,
    /// Hosting-platform login checked for ownership of each package's source
    pub hosting_account: ClaimedIdentity,
}

impl RecoveryClaim {
    /// Claim with distinct index and hosting account names
    #[must_use]
    pub fn new(index_account: &str, hosting_account: &str) -> Self {
        Self {
            index_account: ClaimedIdentity::new(index_account),
            hosting_account: ClaimedIdentity::new(hosting_account),
        }
    }

    /// Claim where the same name is used on both services
    #[must_use]
    pub fn single(name: &str) -> Self {
        Self::new(name, name)
    }
}
