//! Unit tests for the synchronization module.
//!
//! Tests are organised by concern: category placement rules, prize
//! derivation, payload transformation, and the create and update engine
//! flows against the in-memory adapters.

mod support;
mod transformer_tests;
