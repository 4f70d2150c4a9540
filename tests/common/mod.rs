//! Common test utilities shared across test types
//!
//! - `mocks.rs` - In-memory implementations of the port traits
