//! `PostgreSQL`-backed legacy store with explicit transaction control.

use super::{
    models::{
        NewCategoryLinkRecord, NewComponentRecord, NewTechnologyLinkRecord, NewVersionDatesRecord,
        NewVersionRecord,
    },
    schema::{comp_catalog, comp_categories, comp_technology, comp_version_dates, comp_versions},
};
use crate::sync::domain::{
    CategoryLinkRow, ComponentId, ComponentRow, ComponentVersionId, ComponentVersionRow,
    TechnologyLinkRow, VersionDatesRow,
};
use crate::sync::ports::{LegacyStore, LegacyTransaction, StoreError, StoreResult};
use async_trait::async_trait;
use diesel::connection::{AnsiTransactionManager, TransactionManager};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use tracing::warn;

/// `PostgreSQL` connection pool type used by the legacy adapters.
pub type LegacyPgPool = Pool<ConnectionManager<PgConnection>>;

type LegacyPgConnection = PooledConnection<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed legacy store.
///
/// Each [`begin`](LegacyStore::begin) call checks out a dedicated pooled
/// connection and opens a database transaction on it; the connection
/// returns to the pool when the transaction finishes or is dropped.
#[derive(Debug, Clone)]
pub struct PostgresLegacyStore {
    pool: LegacyPgPool,
}

impl PostgresLegacyStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: LegacyPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LegacyStore for PostgresLegacyStore {
    async fn begin(&self) -> StoreResult<Box<dyn LegacyTransaction>> {
        let pool = self.pool.clone();
        let connection = tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(StoreError::new)?;
            AnsiTransactionManager::begin_transaction(&mut *connection).map_err(StoreError::new)?;
            Ok::<_, StoreError>(connection)
        })
        .await
        .map_err(StoreError::new)??;
        Ok(Box::new(PostgresLegacyTransaction {
            connection: Some(connection),
        }))
    }
}

/// One open database transaction on a dedicated pooled connection.
struct PostgresLegacyTransaction {
    connection: Option<LegacyPgConnection>,
}

impl PostgresLegacyTransaction {
    async fn run_op<F>(&mut self, operation: F) -> StoreResult<()>
    where
        F: FnOnce(&mut PgConnection) -> StoreResult<()> + Send + 'static,
    {
        let mut connection = self
            .connection
            .take()
            .ok_or_else(|| StoreError::message("transaction already finished"))?;
        let (connection, result) = tokio::task::spawn_blocking(move || {
            let result = operation(&mut connection);
            (connection, result)
        })
        .await
        .map_err(StoreError::new)?;
        self.connection = Some(connection);
        result
    }

    async fn finish(mut self: Box<Self>, commit: bool) -> StoreResult<()> {
        let mut connection = self
            .connection
            .take()
            .ok_or_else(|| StoreError::message("transaction already finished"))?;
        tokio::task::spawn_blocking(move || {
            let result = if commit {
                AnsiTransactionManager::commit_transaction(&mut *connection)
            } else {
                AnsiTransactionManager::rollback_transaction(&mut *connection)
            };
            result.map_err(StoreError::new)
        })
        .await
        .map_err(StoreError::new)?
    }
}

impl Drop for PostgresLegacyTransaction {
    fn drop(&mut self) {
        // Abandoned transactions roll back before the connection returns
        // to the pool.
        if let Some(mut connection) = self.connection.take()
            && let Err(error) = AnsiTransactionManager::rollback_transaction(&mut *connection)
        {
            warn!(%error, "failed to roll back abandoned legacy transaction");
        }
    }
}

#[async_trait]
impl LegacyTransaction for PostgresLegacyTransaction {
    async fn insert_component(&mut self, row: &ComponentRow) -> StoreResult<()> {
        let record = NewComponentRecord::from(row);
        self.run_op(move |connection| {
            diesel::insert_into(comp_catalog::table)
                .values(&record)
                .execute(connection)
                .map_err(StoreError::new)?;
            Ok(())
        })
        .await
    }

    async fn insert_category_link(&mut self, row: &CategoryLinkRow) -> StoreResult<()> {
        let record = NewCategoryLinkRecord::from(row);
        self.run_op(move |connection| {
            diesel::insert_into(comp_categories::table)
                .values(&record)
                .execute(connection)
                .map_err(StoreError::new)?;
            Ok(())
        })
        .await
    }

    async fn insert_version(&mut self, row: &ComponentVersionRow) -> StoreResult<()> {
        let record = NewVersionRecord::from(row);
        self.run_op(move |connection| {
            diesel::insert_into(comp_versions::table)
                .values(&record)
                .execute(connection)
                .map_err(StoreError::new)?;
            Ok(())
        })
        .await
    }

    async fn insert_version_dates(&mut self, row: &VersionDatesRow) -> StoreResult<()> {
        let record = NewVersionDatesRecord::from(row);
        self.run_op(move |connection| {
            diesel::insert_into(comp_version_dates::table)
                .values(&record)
                .execute(connection)
                .map_err(StoreError::new)?;
            Ok(())
        })
        .await
    }

    async fn insert_technology_link(&mut self, row: &TechnologyLinkRow) -> StoreResult<()> {
        let record = NewTechnologyLinkRecord::from(row);
        self.run_op(move |connection| {
            diesel::insert_into(comp_technology::table)
                .values(&record)
                .execute(connection)
                .map_err(StoreError::new)?;
            Ok(())
        })
        .await
    }

    async fn update_component_name(
        &mut self,
        component_id: ComponentId,
        name: &str,
    ) -> StoreResult<()> {
        let name = name.to_owned();
        self.run_op(move |connection| {
            let updated = diesel::update(
                comp_catalog::table.filter(comp_catalog::component_id.eq(component_id.value())),
            )
            .set(comp_catalog::component_name.eq(&name))
            .execute(connection)
            .map_err(StoreError::new)?;
            if updated == 0 {
                return Err(StoreError::message(format!(
                    "component {component_id} not found"
                )));
            }
            Ok(())
        })
        .await
    }

    async fn delete_technology_links(&mut self, version_id: ComponentVersionId) -> StoreResult<()> {
        self.run_op(move |connection| {
            diesel::delete(
                comp_technology::table.filter(comp_technology::comp_vers_id.eq(version_id.value())),
            )
            .execute(connection)
            .map_err(StoreError::new)?;
            Ok(())
        })
        .await
    }

    async fn commit(self: Box<Self>) -> StoreResult<()> {
        self.finish(true).await
    }

    async fn rollback(self: Box<Self>) -> StoreResult<()> {
        self.finish(false).await
    }
}
