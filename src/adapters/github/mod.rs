//! Hosting platform adapter (GitHub)

mod client;
pub mod issue_body;

pub use client::{DEFAULT_API_URL, GithubClient};
pub use issue_body::parse_issue_body;
