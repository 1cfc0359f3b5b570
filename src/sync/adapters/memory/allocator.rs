//! In-memory identifier allocator.

use crate::sync::ports::{AllocatorError, AllocatorResult, IdSequence, IdentifierAllocator};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Thread-safe in-process allocator with one counter per sequence.
///
/// Satisfies the uniqueness contract only within one process; production
/// deployments use the database-backed allocator.
#[derive(Debug)]
pub struct InMemoryIdentifierAllocator {
    first: i64,
    counters: Mutex<HashMap<IdSequence, i64>>,
}

impl InMemoryIdentifierAllocator {
    /// Creates an allocator whose sequences start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates an allocator whose sequences start at the given value.
    #[must_use]
    pub fn starting_at(first: i64) -> Self {
        Self {
            first,
            counters: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryIdentifierAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentifierAllocator for InMemoryIdentifierAllocator {
    async fn next_id(&self, sequence: IdSequence) -> AllocatorResult<i64> {
        let mut counters = self.counters.lock().map_err(|err| {
            AllocatorError::new(sequence, std::io::Error::other(err.to_string()))
        })?;
        let counter = counters.entry(sequence).or_insert(self.first);
        let allocated = *counter;
        *counter += 1;
        Ok(allocated)
    }
}
