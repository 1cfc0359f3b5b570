//! In-memory metadata resolver.

use crate::sync::domain::{
    ChallengeType, ComponentId, ComponentVersionId, LegacyChallenge, LegacyChallengeId, Platform,
    Technology,
};
use crate::sync::ports::{AuthToken, MetadataError, MetadataResolver, MetadataResult};
use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

/// Metadata resolver backed by fixed in-memory tables.
///
/// Built once with the records a scenario needs; lookups never mutate it.
/// An injected upstream failure message makes every type lookup fail the
/// way a rejected HTTP call would.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMetadataResolver {
    challenge_types: HashMap<Uuid, ChallengeType>,
    technologies: Vec<Technology>,
    platforms: Vec<Platform>,
    challenges: HashMap<i64, LegacyChallenge>,
    component_versions: HashMap<i64, ComponentVersionId>,
    components: HashMap<i64, ComponentId>,
    type_lookup_failure: Option<String>,
}

impl InMemoryMetadataResolver {
    /// Creates an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a challenge type under its identifier.
    #[must_use]
    pub fn with_challenge_type(mut self, type_id: Uuid, name: impl Into<String>) -> Self {
        self.challenge_types
            .insert(type_id, ChallengeType { name: name.into() });
        self
    }

    /// Sets the technology catalogue.
    #[must_use]
    pub fn with_technologies(mut self, technologies: impl IntoIterator<Item = Technology>) -> Self {
        self.technologies = technologies.into_iter().collect();
        self
    }

    /// Sets the platform catalogue.
    #[must_use]
    pub fn with_platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        self.platforms = platforms.into_iter().collect();
        self
    }

    /// Registers an existing legacy challenge record.
    #[must_use]
    pub fn with_challenge(mut self, challenge: LegacyChallenge) -> Self {
        self.challenges
            .insert(challenge.legacy_id.value(), challenge);
        self
    }

    /// Maps a legacy challenge to its active component version.
    #[must_use]
    pub fn with_component_version(
        mut self,
        legacy_id: LegacyChallengeId,
        version_id: ComponentVersionId,
    ) -> Self {
        self.component_versions
            .insert(legacy_id.value(), version_id);
        self
    }

    /// Maps a component version to its owning component.
    #[must_use]
    pub fn with_component(
        mut self,
        version_id: ComponentVersionId,
        component_id: ComponentId,
    ) -> Self {
        self.components.insert(version_id.value(), component_id);
        self
    }

    /// Makes every challenge-type lookup fail with the given upstream
    /// message.
    #[must_use]
    pub fn with_failing_type_lookup(mut self, message: impl Into<String>) -> Self {
        self.type_lookup_failure = Some(message.into());
        self
    }
}

#[async_trait]
impl MetadataResolver for InMemoryMetadataResolver {
    async fn lookup_challenge_type(
        &self,
        type_id: Uuid,
        _token: &AuthToken,
    ) -> MetadataResult<ChallengeType> {
        if let Some(message) = self.type_lookup_failure.as_deref() {
            return Err(MetadataError::upstream(message));
        }
        self.challenge_types
            .get(&type_id)
            .cloned()
            .ok_or_else(|| MetadataError::upstream(format!("unknown challenge type {type_id}")))
    }

    async fn list_technologies(&self) -> MetadataResult<Vec<Technology>> {
        Ok(self.technologies.clone())
    }

    async fn list_platforms(&self) -> MetadataResult<Vec<Platform>> {
        Ok(self.platforms.clone())
    }

    async fn find_challenge_by_legacy_id(
        &self,
        legacy_id: LegacyChallengeId,
    ) -> MetadataResult<LegacyChallenge> {
        self.challenges
            .get(&legacy_id.value())
            .cloned()
            .ok_or(MetadataError::ChallengeNotFound(legacy_id))
    }

    async fn find_component_version_id(
        &self,
        legacy_id: LegacyChallengeId,
    ) -> MetadataResult<ComponentVersionId> {
        self.component_versions
            .get(&legacy_id.value())
            .copied()
            .ok_or(MetadataError::ComponentVersionNotFound(legacy_id))
    }

    async fn find_component_id(
        &self,
        version_id: ComponentVersionId,
    ) -> MetadataResult<ComponentId> {
        self.components
            .get(&version_id.value())
            .copied()
            .ok_or(MetadataError::ComponentNotFound(version_id))
    }
}
