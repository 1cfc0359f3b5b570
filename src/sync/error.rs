//! Unified error taxonomy of the synchronization core.

use crate::event::ValidationError;
use crate::sync::domain::DomainRuleViolation;
use crate::sync::ports::{AllocatorError, MetadataError, StoreError};
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced to the event-dispatch boundary.
///
/// Every error raised inside a transaction triggers rollback and is
/// re-raised unchanged; retry and poison-queue policy belong to the
/// caller.
#[derive(Debug, Clone, Error)]
pub enum SyncError {
    /// The event payload failed schema validation; no transaction was
    /// opened.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An upstream metadata or auth lookup failed; carries the
    /// upstream-supplied message when one was available.
    #[error("upstream lookup failed: {message}")]
    UpstreamLookup {
        /// Message extracted from the upstream response.
        message: String,
    },

    /// A legacy business rule was violated.
    #[error(transparent)]
    DomainRule(#[from] DomainRuleViolation),

    /// A referenced legacy record does not exist.
    #[error(transparent)]
    NotFound(MetadataError),

    /// A row operation or transaction control call failed.
    #[error("persistence failure: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SyncError {
    /// Wraps an opaque persistence failure.
    pub fn persistence(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(source))
    }
}

impl From<MetadataError> for SyncError {
    fn from(err: MetadataError) -> Self {
        match err {
            MetadataError::Upstream { message } => Self::UpstreamLookup { message },
            MetadataError::Backend(source) => Self::Persistence(source),
            not_found @ (MetadataError::ChallengeNotFound(_)
            | MetadataError::ComponentVersionNotFound(_)
            | MetadataError::ComponentNotFound(_)) => Self::NotFound(not_found),
        }
    }
}

impl From<StoreError> for SyncError {
    fn from(err: StoreError) -> Self {
        Self::persistence(err)
    }
}

impl From<AllocatorError> for SyncError {
    fn from(err: AllocatorError) -> Self {
        Self::persistence(err)
    }
}
