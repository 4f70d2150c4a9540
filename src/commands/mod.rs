//! Command implementations

mod check_user;
mod classify_url;
mod clients;
mod packages;
mod triage;

pub use check_user::check_user;
pub use classify_url::classify_url;
pub use packages::packages;
pub use triage::{IssueArgs, triage};
