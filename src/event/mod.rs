//! Inbound challenge-lifecycle events.
//!
//! Events arrive from the stream consumer as JSON envelopes carrying a
//! challenge payload. This module models the envelope and payload shapes
//! and enforces the event schema before anything reaches the
//! synchronization engine: a payload that fails validation never opens a
//! transaction.
//!
//! - Envelope and payload types in [`domain`]
//! - Pure schema-validation rules in [`validation`]

pub mod domain;
pub mod validation;

mod error;

pub use error::ValidationError;

#[cfg(test)]
mod tests;
