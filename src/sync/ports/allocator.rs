//! Surrogate-key allocation port.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Logical legacy sequences keys are allocated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdSequence {
    /// Component identifiers.
    Component,
    /// Component-version identifiers.
    ComponentVersion,
    /// Category-link identifiers.
    CategoryLink,
    /// Version-dates identifiers.
    VersionDates,
    /// Technology-link identifiers.
    TechnologyLink,
}

impl IdSequence {
    /// Returns the legacy sequence name.
    #[must_use]
    pub const fn sequence_name(self) -> &'static str {
        match self {
            Self::Component => "COMPONENT_SEQ",
            Self::ComponentVersion => "COMPVERSION_SEQ",
            Self::CategoryLink => "COMPCATEGORY_SEQ",
            Self::VersionDates => "COMPVERSIONDATES_SEQ",
            Self::TechnologyLink => "COMPTECHNOLOGY_SEQ",
        }
    }
}

impl fmt::Display for IdSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sequence_name())
    }
}

/// Result type for allocator operations.
pub type AllocatorResult<T> = Result<T, AllocatorError>;

/// Failure while allocating the next key of a sequence.
#[derive(Debug, Clone, Error)]
#[error("identifier allocation failed for {sequence}: {source}")]
pub struct AllocatorError {
    sequence: IdSequence,
    source: Arc<dyn std::error::Error + Send + Sync>,
}

impl AllocatorError {
    /// Wraps an underlying allocation failure.
    pub fn new(
        sequence: IdSequence,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            sequence,
            source: Arc::new(source),
        }
    }
}

/// Allocates globally unique, monotonically increasing surrogate keys.
///
/// Each call returns exactly one fresh value; a value returned by a
/// successful call is never issued again, across processes and across
/// concurrent callers. Uniqueness is this port's contract, not the
/// engine's.
#[async_trait]
pub trait IdentifierAllocator: Send + Sync {
    /// Returns the next key of the given sequence.
    ///
    /// # Errors
    ///
    /// Returns [`AllocatorError`] when the underlying sequence cannot be
    /// advanced.
    async fn next_id(&self, sequence: IdSequence) -> AllocatorResult<i64>;
}
