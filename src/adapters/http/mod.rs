//! Shared HTTP plumbing for the service adapters

mod client;
mod rate_limit;

use reqwest::Url;

pub use client::{HttpClient, HttpSettings, USER_AGENT};
pub use rate_limit::RequestPacer;

use crate::error::{Result, TriageError};

/// Parse a service base URL, rejecting ones that cannot take a path
pub fn parse_base_url(base: &str) -> Result<Url> {
    let url = Url::parse(base).map_err(|e| TriageError::Setup(format!("{base}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(TriageError::Setup(format!("{base}: not a base URL")));
    }
    Ok(url)
}

/// Append percent-encoded path segments to a base URL
#[must_use]
pub fn endpoint(base: &Url, segments: &[&str]) -> String {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url.into()
}
