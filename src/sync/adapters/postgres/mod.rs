//! `PostgreSQL` adapters for the legacy component catalogue.

mod allocator;
mod models;
mod schema;
mod store;

pub use allocator::PostgresIdentifierAllocator;
pub use store::{LegacyPgPool, PostgresLegacyStore};
