//! Top-level challenge synchronization service.
//!
//! The surface the event-consumer layer calls: schema validation, payload
//! transformation, then the transactional engine flow for the event kind.

use crate::event::domain::EventMessage;
use crate::event::validation::{validate_create, validate_update};
use crate::sync::SyncError;
use crate::sync::domain::LegacyChallengeId;
use crate::sync::ports::{
    AuthToken, IdentifierAllocator, LegacyStore, MarkdownRenderer, MetadataResolver,
};
use crate::sync::services::{ComponentAggregateIds, PayloadTransformer, SynchronizationEngine};
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

/// Validates, transforms, and synchronizes challenge-lifecycle events.
#[derive(Clone)]
pub struct ChallengeSyncService<M, R, C, A, S>
where
    M: MetadataResolver,
    R: MarkdownRenderer,
    C: Clock + Send + Sync,
    A: IdentifierAllocator,
    S: LegacyStore,
{
    transformer: PayloadTransformer<M, R, C>,
    engine: SynchronizationEngine<A, M, S>,
}

impl<M, R, C, A, S> ChallengeSyncService<M, R, C, A, S>
where
    M: MetadataResolver,
    R: MarkdownRenderer,
    C: Clock + Send + Sync,
    A: IdentifierAllocator,
    S: LegacyStore,
{
    /// Wires the service from its collaborator ports.
    #[must_use]
    pub fn new(
        resolver: Arc<M>,
        renderer: Arc<R>,
        clock: Arc<C>,
        allocator: Arc<A>,
        store: Arc<S>,
    ) -> Self {
        Self {
            transformer: PayloadTransformer::new(Arc::clone(&resolver), renderer, clock),
            engine: SynchronizationEngine::new(allocator, resolver, store),
        }
    }

    /// Processes a challenge-created event.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Validation`] before any lookup or write when
    /// the payload is malformed, and otherwise whatever the transformer or
    /// engine raised.
    pub async fn handle_create(
        &self,
        event: &EventMessage,
        token: &AuthToken,
    ) -> Result<ComponentAggregateIds, SyncError> {
        validate_create(&event.payload)?;
        debug!(topic = %event.topic, originator = %event.originator, "processing create event");
        let draft = self.transformer.draft_component(&event.payload, token).await?;
        self.engine.create_component(&draft).await
    }

    /// Processes a challenge-updated event.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Validation`] before any lookup or write when
    /// the payload is malformed, and otherwise whatever the transformer or
    /// engine raised.
    pub async fn handle_update(&self, event: &EventMessage, token: &AuthToken) -> Result<(), SyncError> {
        let legacy_id = validate_update(&event.payload)?;
        debug!(topic = %event.topic, originator = %event.originator, "processing update event");
        let amendment = self.transformer.draft_amendment(&event.payload, token).await?;
        self.engine
            .update_component(LegacyChallengeId::new(legacy_id), &amendment)
            .await
    }
}
