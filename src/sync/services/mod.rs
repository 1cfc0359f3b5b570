//! Orchestration services of the synchronization core.
//!
//! - [`PayloadTransformer`]: event payload → draft representation
//! - [`SynchronizationEngine`]: draft → ordered row writes, one transaction
//! - [`ChallengeSyncService`]: validate → transform → write, the surface
//!   the event-consumer layer calls

mod engine;
mod handler;
mod transformer;

pub use engine::{ComponentAggregateIds, SynchronizationEngine};
pub use handler::ChallengeSyncService;
pub use transformer::PayloadTransformer;
