//! Sequence-backed identifier allocator.

use super::store::LegacyPgPool;
use crate::sync::ports::{AllocatorError, AllocatorResult, IdSequence, IdentifierAllocator};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::BigInt;

/// Allocator drawing keys from the legacy database sequences.
///
/// `nextval` never hands out the same value twice, so uniqueness holds
/// across processes without further coordination.
#[derive(Debug, Clone)]
pub struct PostgresIdentifierAllocator {
    pool: LegacyPgPool,
}

#[derive(QueryableByName)]
struct AllocatedId {
    #[diesel(sql_type = BigInt)]
    id: i64,
}

impl PostgresIdentifierAllocator {
    /// Creates a new allocator from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: LegacyPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentifierAllocator for PostgresIdentifierAllocator {
    async fn next_id(&self, sequence: IdSequence) -> AllocatorResult<i64> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(|err| AllocatorError::new(sequence, err))?;
            let statement = format!(
                "SELECT nextval('{}') AS id",
                sequence.sequence_name().to_ascii_lowercase()
            );
            let row = diesel::sql_query(statement)
                .get_result::<AllocatedId>(&mut connection)
                .map_err(|err| AllocatorError::new(sequence, err))?;
            Ok(row.id)
        })
        .await
        .map_err(|err| AllocatorError::new(sequence, err))?
    }
}
