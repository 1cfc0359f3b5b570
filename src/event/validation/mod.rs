//! Schema validation for inbound challenge events.
//!
//! Each rule is a pure function over the payload; the two entry points
//! compose the rules an event kind requires. A payload rejected here never
//! opens a transaction against the legacy store.

mod rules;

pub use rules::{validate_create, validate_update};
