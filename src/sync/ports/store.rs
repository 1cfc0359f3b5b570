//! Persistence boundary over the legacy component schema.

use crate::sync::domain::{
    CategoryLinkRow, ComponentId, ComponentRow, ComponentVersionId, ComponentVersionRow,
    TechnologyLinkRow, VersionDatesRow,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for legacy store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure raised by a row operation or transaction control call.
#[derive(Debug, Clone, Error)]
#[error("legacy store failure: {0}")]
pub struct StoreError(Arc<dyn std::error::Error + Send + Sync>);

impl StoreError {
    /// Wraps an underlying persistence failure.
    pub fn new(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(source))
    }

    /// Builds a store error from a plain message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self(Arc::new(std::io::Error::other(message.into())))
    }
}

/// Opens scoped transactions over the legacy schema.
#[async_trait]
pub trait LegacyStore: Send + Sync {
    /// Begins a transaction on a dedicated connection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when no connection can be acquired or the
    /// transaction cannot be opened.
    async fn begin(&self) -> StoreResult<Box<dyn LegacyTransaction>>;
}

/// One open transaction over the legacy schema.
///
/// Row operations stage writes inside the transaction; nothing becomes
/// visible until [`commit`](Self::commit). Both `commit` and
/// [`rollback`](Self::rollback) consume the transaction, and
/// implementations release the underlying connection on every exit path,
/// including drop without either call.
#[async_trait]
pub trait LegacyTransaction: Send {
    /// Inserts a component row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the insert fails.
    async fn insert_component(&mut self, row: &ComponentRow) -> StoreResult<()>;

    /// Inserts a category link row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the insert fails.
    async fn insert_category_link(&mut self, row: &CategoryLinkRow) -> StoreResult<()>;

    /// Inserts a component version row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the insert fails.
    async fn insert_version(&mut self, row: &ComponentVersionRow) -> StoreResult<()>;

    /// Inserts a version dates row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the insert fails.
    async fn insert_version_dates(&mut self, row: &VersionDatesRow) -> StoreResult<()>;

    /// Inserts a technology link row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the insert fails.
    async fn insert_technology_link(&mut self, row: &TechnologyLinkRow) -> StoreResult<()>;

    /// Updates a component's name in place.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the component does not exist or the
    /// update fails.
    async fn update_component_name(
        &mut self,
        component_id: ComponentId,
        name: &str,
    ) -> StoreResult<()>;

    /// Deletes every technology link of a component version.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the delete fails.
    async fn delete_technology_links(&mut self, version_id: ComponentVersionId) -> StoreResult<()>;

    /// Commits all staged writes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the commit fails; the transaction is
    /// gone either way.
    async fn commit(self: Box<Self>) -> StoreResult<()>;

    /// Discards all staged writes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the rollback fails; the transaction is
    /// gone either way.
    async fn rollback(self: Box<Self>) -> StoreResult<()>;
}
