//! Transactional synchronization engine.
//!
//! Turns a draft representation into an ordered sequence of row
//! operations against the legacy schema, executed inside one transaction.
//! Any failure rolls back every write of the event; there is no partial
//! commit, and the underlying connection is released on every exit path.

use crate::sync::SyncError;
use crate::sync::domain::{
    CategoryLinkRow, ComponentId, ComponentRow, ComponentVersionId, ComponentVersionRow,
    DomainRuleViolation, DraftAmendment, DraftComponent, INITIAL_VERSION, INITIAL_VERSION_TEXT,
    LegacyChallengeId, PLACEHOLDER_DESCRIPTION, SENTINEL_PHASE_TIME, STATUS_IN_DRAFT,
    TechnologyLinkRow, VERSION_PHASE_NEW, VersionDatesRow, resolve_placement,
    technologies_apply_to_category, technologies_apply_to_track,
};
use crate::sync::ports::{
    IdSequence, IdentifierAllocator, LegacyStore, LegacyTransaction, MetadataResolver,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Surrogate keys allocated for one created component aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentAggregateIds {
    /// Component row key.
    pub component_id: ComponentId,
    /// Category link row key.
    pub category_link_id: i64,
    /// Component version row key.
    pub version_id: ComponentVersionId,
    /// Version dates row key.
    pub version_dates_id: i64,
    /// Technology link row keys, in insertion order.
    pub technology_link_ids: Vec<i64>,
}

/// Executes the create and update synchronization flows.
#[derive(Clone)]
pub struct SynchronizationEngine<A, M, S>
where
    A: IdentifierAllocator,
    M: MetadataResolver,
    S: LegacyStore,
{
    allocator: Arc<A>,
    resolver: Arc<M>,
    store: Arc<S>,
}

impl<A, M, S> SynchronizationEngine<A, M, S>
where
    A: IdentifierAllocator,
    M: MetadataResolver,
    S: LegacyStore,
{
    /// Creates a new synchronization engine.
    #[must_use]
    pub const fn new(allocator: Arc<A>, resolver: Arc<M>, store: Arc<S>) -> Self {
        Self {
            allocator,
            resolver,
            store,
        }
    }

    /// Projects a draft component onto the legacy schema.
    ///
    /// Writes one component, one category link, one component version and
    /// one version dates row, plus one technology link per matched
    /// technology when the track admits them, all inside one transaction.
    ///
    /// # Errors
    ///
    /// Returns the original failure unchanged after rolling back; see
    /// [`SyncError`] for the taxonomy.
    pub async fn create_component(
        &self,
        draft: &DraftComponent,
    ) -> Result<ComponentAggregateIds, SyncError> {
        let mut tx = self.store.begin().await?;
        let outcome = self.write_component_aggregate(tx.as_mut(), draft).await;
        match outcome {
            Ok(ids) => {
                tx.commit().await?;
                debug!(component_id = %ids.component_id, track = %draft.track, "component aggregate committed");
                Ok(ids)
            }
            Err(err) => {
                rollback_quietly(tx).await;
                Err(err)
            }
        }
    }

    /// Applies an update event's amendment to an existing challenge.
    ///
    /// Looks up the existing challenge before any write, refuses category
    /// changes, renames the component in place when a name is supplied,
    /// and fully replaces the version's technology links when a resync
    /// applies.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::NotFound`] when the legacy challenge does not
    /// exist, [`SyncError::DomainRule`] on a category change, and the
    /// original failure unchanged after rolling back otherwise.
    pub async fn update_component(
        &self,
        legacy_id: LegacyChallengeId,
        amendment: &DraftAmendment,
    ) -> Result<(), SyncError> {
        let challenge = self.resolver.find_challenge_by_legacy_id(legacy_id).await?;

        if let Some(track) = amendment.track.as_deref() {
            let requested = resolve_placement(track, challenge.studio);
            if requested.category().id() != challenge.category_id {
                return Err(DomainRuleViolation::CategoryChange {
                    existing: challenge.category_id,
                    requested: requested.category().id(),
                }
                .into());
            }
        }

        let resync = technologies_apply_to_category(&challenge.category_name, challenge.studio)
            && !amendment.technologies.is_empty();
        let rename = amendment.name.is_some();
        if !rename && !resync {
            debug!(%legacy_id, "update event carried no applicable aspects");
            return Ok(());
        }

        let version_id = self.resolver.find_component_version_id(legacy_id).await?;

        let mut tx = self.store.begin().await?;
        let outcome = self
            .apply_amendment(tx.as_mut(), version_id, amendment, resync)
            .await;
        match outcome {
            Ok(()) => {
                tx.commit().await?;
                debug!(%legacy_id, %version_id, rename, resync, "component amendment committed");
                Ok(())
            }
            Err(err) => {
                rollback_quietly(tx).await;
                Err(err)
            }
        }
    }

    async fn write_component_aggregate(
        &self,
        tx: &mut dyn LegacyTransaction,
        draft: &DraftComponent,
    ) -> Result<ComponentAggregateIds, SyncError> {
        let placement = resolve_placement(&draft.track, draft.is_studio);

        let component_id =
            ComponentId::new(self.allocator.next_id(IdSequence::Component).await?);
        tx.insert_component(&ComponentRow {
            component_id,
            current_version: INITIAL_VERSION,
            short_description: PLACEHOLDER_DESCRIPTION.to_owned(),
            long_description: PLACEHOLDER_DESCRIPTION.to_owned(),
            function_description: PLACEHOLDER_DESCRIPTION.to_owned(),
            status_id: STATUS_IN_DRAFT,
            root_category_id: placement.root().id(),
            name: draft.name.clone(),
        })
        .await?;

        let category_link_id = self.allocator.next_id(IdSequence::CategoryLink).await?;
        tx.insert_category_link(&CategoryLinkRow {
            link_id: category_link_id,
            component_id,
            category_id: placement.category().id(),
        })
        .await?;

        let version_id =
            ComponentVersionId::new(self.allocator.next_id(IdSequence::ComponentVersion).await?);
        tx.insert_version(&ComponentVersionRow {
            version_id,
            component_id,
            version: INITIAL_VERSION,
            version_text: INITIAL_VERSION_TEXT.to_owned(),
            phase_id: VERSION_PHASE_NEW,
            phase_time: SENTINEL_PHASE_TIME,
            price: 0.0,
        })
        .await?;

        let version_dates_id = self.allocator.next_id(IdSequence::VersionDates).await?;
        tx.insert_version_dates(&VersionDatesRow::initial(
            version_dates_id,
            version_id,
            draft.schedule.registration_starts_at.date_naive(),
        ))
        .await?;

        let mut technology_link_ids = Vec::new();
        if technologies_apply_to_track(&draft.track, draft.is_studio) {
            for technology in &draft.technologies {
                let link_id = self.allocator.next_id(IdSequence::TechnologyLink).await?;
                tx.insert_technology_link(&TechnologyLinkRow {
                    link_id,
                    version_id,
                    technology_id: technology.id,
                })
                .await?;
                technology_link_ids.push(link_id);
            }
        }

        Ok(ComponentAggregateIds {
            component_id,
            category_link_id,
            version_id,
            version_dates_id,
            technology_link_ids,
        })
    }

    async fn apply_amendment(
        &self,
        tx: &mut dyn LegacyTransaction,
        version_id: ComponentVersionId,
        amendment: &DraftAmendment,
        resync: bool,
    ) -> Result<(), SyncError> {
        if let Some(name) = amendment.name.as_deref() {
            let component_id = self.resolver.find_component_id(version_id).await?;
            tx.update_component_name(component_id, name).await?;
        }

        if resync {
            tx.delete_technology_links(version_id).await?;
            for technology in &amendment.technologies {
                let link_id = self.allocator.next_id(IdSequence::TechnologyLink).await?;
                tx.insert_technology_link(&TechnologyLinkRow {
                    link_id,
                    version_id,
                    technology_id: technology.id,
                })
                .await?;
            }
        }

        Ok(())
    }
}

/// Rolls a transaction back, logging instead of masking the original
/// failure when the rollback itself fails.
async fn rollback_quietly(tx: Box<dyn LegacyTransaction>) {
    if let Err(rollback_err) = tx.rollback().await {
        warn!(error = %rollback_err, "rollback failed after aborted synchronization");
    }
}
