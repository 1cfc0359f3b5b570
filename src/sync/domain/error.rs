//! Domain rule violations raised by the synchronization core.

use thiserror::Error;

/// Legacy business rules that abort synchronization before any write
/// commits.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainRuleViolation {
    /// More than one non-checkpoint prize-set was supplied.
    #[error("expected at most one non-checkpoint prize set, found {0}")]
    MultiplePrizeSets(usize),

    /// An update attempted to move the challenge to a different category.
    /// A challenge's category is immutable once created.
    #[error("challenge category is immutable: existing category {existing}, requested {requested}")]
    CategoryChange {
        /// Category id stored for the existing challenge.
        existing: i64,
        /// Category id the supplied track resolves to.
        requested: i64,
    },
}
