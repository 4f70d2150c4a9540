//! Organization role resolution
//!
//! Two sequential membership queries: public membership first, then the
//! explicit role. An unreadable or absent role degrades to `Member`, which
//! is never fast-track eligible on its own. Service failures propagate.

use log::{debug, warn};

use crate::core::models::OrgRole;
use crate::core::ports::OrgMembership;
use crate::error::Result;

/// Role value the hosting platform uses for organization owners
pub const DEFAULT_ADMIN_ROLE: &str = "admin";

/// Resolve the role of `user` in `org`
pub async fn resolve_role<H: OrgMembership>(
    hosting: &H,
    org: &str,
    user: &str,
    admin_role: &str,
) -> Result<OrgRole> {
    if org.is_empty() || user.is_empty() {
        return Ok(OrgRole::None);
    }

    if !hosting.is_public_member(org, user).await? {
        debug!("{user} is not a public member of {org}");
        return Ok(OrgRole::None);
    }

    match hosting.membership_role(org, user).await? {
        Some(role) if role.eq_ignore_ascii_case(admin_role) => Ok(OrgRole::Admin),
        Some(role) => {
            debug!("{user} has role {role:?} in {org}");
            Ok(OrgRole::Member)
        },
        None => {
            warn!("no explicit role for {user} in {org}; treating as member");
            Ok(OrgRole::Member)
        },
    }
}
