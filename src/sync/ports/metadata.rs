//! Metadata lookup port.

use crate::sync::domain::{
    ChallengeType, ComponentId, ComponentVersionId, LegacyChallenge, LegacyChallengeId, Platform,
    Technology,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Opaque machine-to-machine token forwarded to upstream lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wraps a raw token value.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Result type for metadata lookups.
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Errors returned by metadata resolver implementations.
#[derive(Debug, Clone, Error)]
pub enum MetadataError {
    /// The upstream service rejected a lookup. Adapters extract the
    /// structured response message when the upstream supplies one and fall
    /// back to the raw failure text otherwise.
    #[error("{message}")]
    Upstream {
        /// Message supplied by the upstream service.
        message: String,
    },

    /// No legacy challenge exists for the given identifier.
    #[error("legacy challenge {0} not found")]
    ChallengeNotFound(LegacyChallengeId),

    /// No component version is linked to the given legacy challenge.
    #[error("no component version for legacy challenge {0}")]
    ComponentVersionNotFound(LegacyChallengeId),

    /// No component owns the given component version.
    #[error("no component for version {0}")]
    ComponentNotFound(ComponentVersionId),

    /// Lookup infrastructure failure.
    #[error("metadata lookup failed: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl MetadataError {
    /// Wraps an upstream-supplied failure message.
    #[must_use]
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Wraps an infrastructure failure.
    pub fn backend(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(source))
    }
}

/// Supplies the lookup tables and existing-record queries the
/// synchronization core depends on.
#[async_trait]
pub trait MetadataResolver: Send + Sync {
    /// Resolves a challenge type to its canonical record.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Upstream`] when the type service rejects
    /// the lookup.
    async fn lookup_challenge_type(
        &self,
        type_id: Uuid,
        token: &AuthToken,
    ) -> MetadataResult<ChallengeType>;

    /// Returns the full technology catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError`] when the catalogue cannot be fetched.
    async fn list_technologies(&self) -> MetadataResult<Vec<Technology>>;

    /// Returns the full platform catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError`] when the catalogue cannot be fetched.
    async fn list_platforms(&self) -> MetadataResult<Vec<Platform>>;

    /// Looks up an existing challenge in the authoritative legacy project
    /// table.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::ChallengeNotFound`] when no record exists.
    async fn find_challenge_by_legacy_id(
        &self,
        legacy_id: LegacyChallengeId,
    ) -> MetadataResult<LegacyChallenge>;

    /// Resolves the active component-version id for a legacy challenge.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::ComponentVersionNotFound`] when no version
    /// is linked to the challenge.
    async fn find_component_version_id(
        &self,
        legacy_id: LegacyChallengeId,
    ) -> MetadataResult<ComponentVersionId>;

    /// Resolves the component owning a component version.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::ComponentNotFound`] when no component owns
    /// the version.
    async fn find_component_id(
        &self,
        version_id: ComponentVersionId,
    ) -> MetadataResult<ComponentId>;
}
