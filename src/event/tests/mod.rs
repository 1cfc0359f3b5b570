//! Unit tests for the event module.
//!
//! Covers envelope and payload deserialization plus the create and update
//! schema-validation rules.

mod validation_tests;
