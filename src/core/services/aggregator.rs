//! Ownership aggregation
//!
//! Walks every package an index account maintains and assigns each one an
//! [`OwnershipTier`] relative to the claimed hosting account:
//!
//! 1. No declared source URL -> `NoRepositoryListed`
//! 2. URL under the account (repo or pages site) -> `BelongsDirectly`
//! 3. URL under another account -> role lookup: admin `OrgAdmin`,
//!    member `OrgMember`, none `Unknown`
//! 4. URL off the platform -> `Unknown`
//!
//! Packages are processed one at a time in listing order. For a given
//! package, metadata is always fetched before classification and
//! classification before role resolution. The first error aborts the
//! whole aggregation.

use log::{debug, info};

use crate::core::models::{
    FastTrackPolicy, OrgRole, OwnershipTier, PackageClassification, Recommendation,
    RecoveryClaim, TriageOutcome, UrlClass,
};
use crate::core::ports::{OrgMembership, PackageDirectory, PackageMetadata};
use crate::core::services::role_resolver::{DEFAULT_ADMIN_ROLE, resolve_role};
use crate::core::services::url_classifier::UrlClassifier;
use crate::error::Result;

/// Orchestrates lookups and classification for one claim
#[derive(Debug)]
pub struct OwnershipAggregator<'a, D, M, H> {
    directory: &'a D,
    metadata: &'a M,
    hosting: &'a H,
    classifier: UrlClassifier,
    admin_role: String,
    policy: FastTrackPolicy,
}

impl<'a, D, M, H> OwnershipAggregator<'a, D, M, H>
where
    D: PackageDirectory,
    M: PackageMetadata,
    H: OrgMembership,
{
    /// Create an aggregator with GitHub domains and the default policy
    pub fn new(directory: &'a D, metadata: &'a M, hosting: &'a H) -> Self {
        Self {
            directory,
            metadata,
            hosting,
            classifier: UrlClassifier::default(),
            admin_role: DEFAULT_ADMIN_ROLE.to_string(),
            policy: FastTrackPolicy::default(),
        }
    }

    /// Use a classifier for a different platform domain
    #[must_use]
    pub fn with_classifier(mut self, classifier: UrlClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Use a different fast-track policy
    #[must_use]
    pub const fn with_policy(mut self, policy: FastTrackPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use a different admin role marker
    #[must_use]
    pub fn with_admin_role(mut self, admin_role: impl Into<String>) -> Self {
        self.admin_role = admin_role.into();
        self
    }

    /// Classify every package of the claim's index account
    pub async fn aggregate(&self, claim: &RecoveryClaim) -> Result<TriageOutcome> {
        let packages = self.directory.list_packages(claim.index_account.as_str()).await?;
        if packages.is_empty() {
            info!("{} maintains no packages", claim.index_account);
            return Ok(TriageOutcome::NoPackages);
        }

        info!(
            "classifying {} package(s) of {} against {}",
            packages.len(),
            claim.index_account,
            claim.hosting_account
        );

        let mut classifications = Vec::with_capacity(packages.len());
        for package in packages {
            let classification =
                self.classify_package(&package, claim.hosting_account.as_str()).await?;
            classifications.push(classification);
        }

        let recommendation = recommend(&classifications, self.policy);
        Ok(TriageOutcome::Classified {
            classifications,
            recommendation,
        })
    }

    /// Classify a single package for a hosting account
    pub async fn classify_package(
        &self,
        package: &str,
        hosting_user: &str,
    ) -> Result<PackageClassification> {
        let info = self.metadata.get_package_info(package).await?;
        let Some(source_url) = info.source_url.filter(|url| !url.trim().is_empty()) else {
            debug!("{package}: no repository listed");
            return Ok(PackageClassification::without_repository(package));
        };

        let tier = match self.classifier.classify(&source_url, hosting_user) {
            class if class.belongs_to_identity() => OwnershipTier::BelongsDirectly,
            UrlClass::Organization { name } => {
                match resolve_role(self.hosting, &name, hosting_user, &self.admin_role).await? {
                    OrgRole::Admin => OwnershipTier::OrgAdmin,
                    OrgRole::Member => OwnershipTier::OrgMember,
                    OrgRole::None => OwnershipTier::Unknown,
                }
            },
            _ => OwnershipTier::Unknown,
        };

        debug!("{package}: {source_url} -> {tier}");
        Ok(PackageClassification {
            package: package.to_string(),
            source_url,
            tier,
        })
    }
}

/// Derive the aggregate verdict from per-package tiers
///
/// Fast-track holds only when at least one package was classified and
/// every tier is admitted by `policy`.
#[must_use]
pub fn recommend(
    classifications: &[PackageClassification],
    policy: FastTrackPolicy,
) -> Recommendation {
    let unresolved = classifications.iter().filter(|c| !policy.admits(c.tier)).count();
    Recommendation {
        fast_track: !classifications.is_empty() && unresolved == 0,
        unresolved,
        total: classifications.len(),
        policy,
    }
}
