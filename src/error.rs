//! Error taxonomy for a triage run
//!
//! Every variant is fatal for the run that produced it. Nothing in the
//! crate turns one of these into an ownership tier.

use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, TriageError>;

/// External service a request was addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// The package index (pypi.org)
    PackageIndex,
    /// The code-hosting platform (GitHub REST API)
    Hosting,
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PackageIndex => write!(f, "package index"),
            Self::Hosting => write!(f, "hosting platform"),
        }
    }
}

/// Errors that abort a triage run
#[derive(Debug, Error)]
pub enum TriageError {
    /// A required issue field was not present in the report
    #[error("issue body does not contain expected header: {field}")]
    MissingField {
        /// Header that was expected
        field: String,
    },

    /// An external entity is absent or its page is unreachable
    #[error("{service}: {what} not found")]
    NotFound {
        /// Service that was queried
        service: Service,
        /// What was looked up (e.g. "user alice")
        what: String,
    },

    /// Declared project count disagrees with the parsed listing
    #[error("user {user} declares {declared} project(s) but {parsed} were listed (pagination?)")]
    InconsistentCount {
        /// Package-index account name
        user: String,
        /// Count printed on the page
        declared: usize,
        /// Number of package anchors parsed
        parsed: usize,
    },

    /// The project count on a user page could not be read
    #[error("could not determine the number of projects for user {user}")]
    ListingParse {
        /// Package-index account name
        user: String,
    },

    /// Unexpected HTTP status
    #[error("{service} returned unexpected status {status} for {url}")]
    TransientService {
        /// Service that answered
        service: Service,
        /// HTTP status code
        status: u16,
        /// Request URL
        url: String,
    },

    /// Request exceeded its deadline
    #[error("{service} request timed out: {url}")]
    Timeout {
        /// Service that was queried
        service: Service,
        /// Request URL
        url: String,
    },

    /// Connection-level failure
    #[error("{service} request failed: {url}: {source}")]
    Transport {
        /// Service that was queried
        service: Service,
        /// Request URL
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// A client could not be constructed from its settings
    #[error("invalid client setup: {0}")]
    Setup(String),

    /// Response body did not have the expected shape
    #[error("{service} returned an unreadable body for {url}: {message}")]
    Decode {
        /// Service that answered
        service: Service,
        /// Request URL
        url: String,
        /// Decoder message
        message: String,
    },
}

impl TriageError {
    /// Create a not-found error
    #[must_use]
    pub fn not_found(service: Service, what: impl Into<String>) -> Self {
        Self::NotFound {
            service,
            what: what.into(),
        }
    }

    /// Create an unexpected-status error
    #[must_use]
    pub fn unexpected_status(service: Service, status: u16, url: impl Into<String>) -> Self {
        Self::TransientService {
            service,
            status,
            url: url.into(),
        }
    }

    /// Classify a client error as a timeout or a transport failure
    #[must_use]
    pub fn from_request(service: Service, url: impl Into<String>, source: reqwest::Error) -> Self {
        let url = url.into();
        if source.is_timeout() {
            Self::Timeout { service, url }
        } else {
            Self::Transport {
                service,
                url,
                source,
            }
        }
    }

    /// Whether a bounded retry of an idempotent GET may help
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::TransientService { status, .. } => *status == 429 || *status >= 500,
            Self::Timeout { .. } => true,
            Self::Transport { source, .. } => source.is_connect(),
            _ => false,
        }
    }
}
