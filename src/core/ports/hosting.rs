//! Hosting platform membership port

use std::future::Future;

use crate::error::Result;

/// Organization membership data on the hosting platform
pub trait OrgMembership: Send + Sync {
    /// Whether `user` is a publicly listed member of `org`
    ///
    /// `Ok(false)` only for an explicit "not a member" answer; every other
    /// failure is an error.
    fn is_public_member(&self, org: &str, user: &str)
    -> impl Future<Output = Result<bool>> + Send;

    /// The explicit role string of `user` in `org`, if one could be read
    fn membership_role(
        &self,
        org: &str,
        user: &str,
    ) -> impl Future<Output = Result<Option<String>>> + Send;
}
