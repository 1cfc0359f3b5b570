//! In-memory adapters for tests and embedded use.

mod allocator;
mod metadata;
mod store;

pub use allocator::InMemoryIdentifierAllocator;
pub use metadata::InMemoryMetadataResolver;
pub use store::{InMemoryLegacyStore, LegacyState};
