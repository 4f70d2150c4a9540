//! Package index adapter (pypi.org)

mod client;
pub mod user_page;

pub use client::{DEFAULT_INDEX_URL, PypiClient};
pub use user_page::parse_user_page;
