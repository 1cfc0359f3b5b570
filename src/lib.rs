//! Viaduct: challenge-to-legacy synchronization engine.
//!
//! This crate keeps a legacy relational catalogue's view of a "component"
//! (its internal representation of a challenge) consistent with the
//! authoritative challenge API. It consumes challenge-lifecycle events,
//! normalizes their payloads into a legacy-facing draft representation,
//! resolves the legacy classification rules, and performs the multi-row,
//! multi-table write as a single atomic unit.
//!
//! # Architecture
//!
//! Viaduct follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, renderers)
//!
//! # Modules
//!
//! - [`event`]: Inbound event envelope, payload model, and schema validation
//! - [`sync`]: Draft transformation, category resolution, and the
//!   transactional synchronization engine

pub mod event;
pub mod sync;
