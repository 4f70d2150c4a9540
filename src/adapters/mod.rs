//! Adapter implementations of port traits
//!
//! Concrete implementations of the traits defined in `core::ports`.
//!
//! - `http/` - Paced `reqwest` client shared by the service adapters
//! - `pypi/` - Package directory and metadata from pypi.org
//! - `github/` - Membership, issues, comments and labels on GitHub
//! - `sink` - No-op report sink for dry runs

pub mod github;
pub mod http;
pub mod pypi;
pub mod sink;

pub use github::GithubClient;
pub use http::{HttpClient, HttpSettings, RequestPacer};
pub use pypi::PypiClient;
pub use sink::NoopSink;
