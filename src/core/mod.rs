//! Core domain logic for recovery triage
//!
//! This module contains the ownership-resolution and aggregation logic.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (identities, tiers, classifications)
//! - `services/` - Classification, aggregation and report rendering
//! - `ports/` - Trait definitions for external services

pub mod models;
pub mod ports;
pub mod services;
