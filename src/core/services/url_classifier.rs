//! Repository-URL classification
//!
//! Decides, from a declared source URL alone, whether it points at the
//! claimed account, at some other account on the hosting platform, or
//! somewhere else entirely. No network access.
//!
//! # Examples
//!
//! ```
//! use recovery_triage::core::models::UrlClass;
//! use recovery_triage::core::services::classify_url;
//!
//! assert_eq!(classify_url("https://github.com/Alice/foo", "alice"), UrlClass::DirectRepo);
//! assert_eq!(classify_url("alice.github.io", "alice"), UrlClass::PagesSite);
//! ```

use reqwest::Url;

use crate::core::models::UrlClass;

/// Default web domain of the hosting platform
pub const DEFAULT_WEB_DOMAIN: &str = "github.com";

/// Default domain under which per-account pages sites are served
pub const DEFAULT_PAGES_SUFFIX: &str = "github.io";

/// Classifier bound to one hosting platform's domains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlClassifier {
    web_domain: String,
    pages_suffix: String,
}

impl Default for UrlClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_WEB_DOMAIN, DEFAULT_PAGES_SUFFIX)
    }
}

impl UrlClassifier {
    /// Create a classifier for a web domain and pages suffix
    #[must_use]
    pub fn new(web_domain: &str, pages_suffix: &str) -> Self {
        Self {
            web_domain: web_domain.trim().to_lowercase(),
            pages_suffix: pages_suffix.trim().trim_start_matches('.').to_lowercase(),
        }
    }

    /// Classify `url` relative to the claimed hosting `identity`
    #[must_use]
    pub fn classify(&self, url: &str, identity: &str) -> UrlClass {
        let identity = identity.trim().to_lowercase();
        let Some((host, first_segment)) = split_url(url) else {
            return UrlClass::Unrecognized;
        };

        let pages_owner = host
            .strip_suffix(self.pages_suffix.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
            .filter(|owner| !owner.is_empty());

        if let Some(owner) = pages_owner {
            if !identity.is_empty() && owner == identity {
                return UrlClass::PagesSite;
            }
            return UrlClass::Organization {
                name: owner.to_string(),
            };
        }

        if host == self.web_domain {
            if first_segment.is_empty() {
                return UrlClass::Unrecognized;
            }
            if first_segment == identity {
                return UrlClass::DirectRepo;
            }
            return UrlClass::Organization {
                name: first_segment,
            };
        }

        UrlClass::Unrecognized
    }
}

/// Classify `url` against the default hosting platform (GitHub)
#[must_use]
pub fn classify_url(url: &str, identity: &str) -> UrlClass {
    UrlClassifier::default().classify(url, identity)
}

/// Lowercase and default the scheme of a declared URL
#[must_use]
pub fn normalize_url(url: &str) -> String {
    let url = url.trim().to_lowercase();
    if url.contains("://") {
        url
    } else {
        format!("https://{url}")
    }
}

/// Host (without a leading `www.`) and first path segment of a URL
fn split_url(url: &str) -> Option<(String, String)> {
    let parsed = Url::parse(&normalize_url(url)).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host).to_string();
    let first_segment = parsed
        .path()
        .trim_matches('/')
        .split('/')
        .next()
        .unwrap_or_default()
        .to_string();
    Some((host, first_segment))
}
