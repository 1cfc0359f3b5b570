//! Challenge synchronization core.
//!
//! This module projects validated challenge events onto the legacy
//! component catalogue: the payload transformer normalizes an event into a
//! legacy-facing draft, the category resolver applies the legacy
//! classification rules, and the synchronization engine performs the
//! multi-row write as one atomic transaction. The module follows hexagonal
//! architecture:
//!
//! - Domain types and pure rules in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

mod error;

pub use error::SyncError;

#[cfg(test)]
mod tests;
