//! Port contracts for the synchronization core's external collaborators.

mod allocator;
mod metadata;
mod renderer;
mod store;

pub use allocator::{AllocatorError, AllocatorResult, IdSequence, IdentifierAllocator};
pub use metadata::{AuthToken, MetadataError, MetadataResolver, MetadataResult};
pub use renderer::MarkdownRenderer;
pub use store::{LegacyStore, LegacyTransaction, StoreError, StoreResult};
