//! Payload transformation service.
//!
//! Maps a validated event payload to its legacy-facing draft
//! representation: track re-resolution, markdown-conditional description
//! rendering, phase-derived timestamps, prize derivation, and tag
//! matching against the technology and platform catalogues.

use crate::event::ValidationError;
use crate::event::domain::{
    CHECKPOINT_SUBMISSION_PHASE, ChallengePayload, REGISTRATION_PHASE, SUBMISSION_PHASE,
};
use crate::sync::SyncError;
use crate::sync::domain::{
    CONFIDENTIALITY_PUBLIC, DEFAULT_MILESTONE_ID, DEFAULT_SUBMISSION_GUIDELINES, DraftAmendment,
    DraftComponent, PhaseSchedule, Platform, Technology, derive_prize_summary, is_studio_track,
    matching_platforms, matching_technologies,
};
use crate::sync::ports::{AuthToken, MarkdownRenderer, MetadataResolver};
use mockable::Clock;
use std::sync::Arc;

/// Transforms event payloads into draft representations.
#[derive(Clone)]
pub struct PayloadTransformer<M, R, C>
where
    M: MetadataResolver,
    R: MarkdownRenderer,
    C: Clock + Send + Sync,
{
    resolver: Arc<M>,
    renderer: Arc<R>,
    clock: Arc<C>,
}

impl<M, R, C> PayloadTransformer<M, R, C>
where
    M: MetadataResolver,
    R: MarkdownRenderer,
    C: Clock + Send + Sync,
{
    /// Creates a new payload transformer.
    #[must_use]
    pub const fn new(resolver: Arc<M>, renderer: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            resolver,
            renderer,
            clock,
        }
    }

    /// Builds the complete draft for a create event.
    ///
    /// Assumes the payload passed create-event validation; missing
    /// required fields still surface as validation errors rather than
    /// panics.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::UpstreamLookup`] when the type lookup fails,
    /// [`SyncError::DomainRule`] when prize derivation finds multiple
    /// non-checkpoint prize-sets, and [`SyncError::Validation`] when a
    /// required field is absent.
    pub async fn draft_component(
        &self,
        payload: &ChallengePayload,
        token: &AuthToken,
    ) -> Result<DraftComponent, SyncError> {
        let track = self
            .resolve_track(payload, token)
            .await?
            .ok_or(SyncError::Validation(ValidationError::MissingField("track")))?;
        let name = required(payload.name.as_ref(), "name")?.clone();
        let description = required(payload.description.as_ref(), "description")?;
        let detailed_requirements =
            self.render_description(description, payload.markdown.unwrap_or(false));
        let review_type = required(payload.review_type.as_ref(), "reviewType")?.clone();
        let external_project_id = *required(payload.project_id.as_ref(), "projectId")?;
        let forum_id = *required(payload.forum_id.as_ref(), "forumId")?;
        let schedule = self.schedule_from_phases(payload)?;
        let prize_sets = required(payload.prize_sets.as_ref(), "prizeSets")?;
        let prizes = derive_prize_summary(prize_sets)?;
        let tags = required(payload.tags.as_ref(), "tags")?;
        let (technologies, platforms) = self.resolve_tags(tags).await?;
        let is_studio = is_studio_track(&track);

        Ok(DraftComponent {
            track,
            is_studio,
            name,
            detailed_requirements,
            review_type,
            external_project_id,
            forum_id,
            confidentiality: CONFIDENTIALITY_PUBLIC,
            submission_guidelines: DEFAULT_SUBMISSION_GUIDELINES,
            submission_visible: true,
            milestone_id: DEFAULT_MILESTONE_ID,
            schedule,
            prizes,
            technologies,
            platforms,
        })
    }

    /// Builds the partial draft for an update event.
    ///
    /// Only the aspects present on the payload are carried over; prize
    /// derivation and tag matching run whenever their inputs appear.
    ///
    /// # Errors
    ///
    /// Returns the same error classes as
    /// [`draft_component`](Self::draft_component).
    pub async fn draft_amendment(
        &self,
        payload: &ChallengePayload,
        token: &AuthToken,
    ) -> Result<DraftAmendment, SyncError> {
        let track = self.resolve_track(payload, token).await?;
        let markdown = payload.markdown.unwrap_or(false);
        let detailed_requirements = payload
            .description
            .as_ref()
            .map(|description| self.render_description(description, markdown));
        let prizes = payload
            .prize_sets
            .as_deref()
            .map(derive_prize_summary)
            .transpose()?;
        let (technologies, platforms) = match payload.tags.as_deref() {
            Some(tags) => self.resolve_tags(tags).await?,
            None => (Vec::new(), Vec::new()),
        };

        Ok(DraftAmendment {
            track,
            name: payload.name.clone(),
            detailed_requirements,
            prizes,
            technologies,
            platforms,
        })
    }

    /// Resolves the canonical track name, preferring the type-id lookup
    /// over the raw track string.
    async fn resolve_track(
        &self,
        payload: &ChallengePayload,
        token: &AuthToken,
    ) -> Result<Option<String>, SyncError> {
        if let Some(type_id) = payload.type_id {
            let challenge_type = self.resolver.lookup_challenge_type(type_id, token).await?;
            return Ok(Some(challenge_type.name));
        }
        Ok(payload.track.clone())
    }

    fn render_description(&self, description: &str, markdown: bool) -> String {
        if markdown {
            self.renderer.render(description)
        } else {
            description.to_owned()
        }
    }

    fn schedule_from_phases(&self, payload: &ChallengePayload) -> Result<PhaseSchedule, SyncError> {
        let registration = payload.phase(REGISTRATION_PHASE).ok_or(SyncError::Validation(
            ValidationError::MissingPhase(REGISTRATION_PHASE),
        ))?;
        let submission = payload.phase(SUBMISSION_PHASE).ok_or(SyncError::Validation(
            ValidationError::MissingPhase(SUBMISSION_PHASE),
        ))?;
        let checkpoint = payload
            .phase(CHECKPOINT_SUBMISSION_PHASE)
            .map(|phase| phase.duration);
        Ok(PhaseSchedule::from_durations(
            self.clock.utc(),
            registration.duration,
            submission.duration,
            checkpoint,
        ))
    }

    async fn resolve_tags(
        &self,
        tags: &[String],
    ) -> Result<(Vec<Technology>, Vec<Platform>), SyncError> {
        let technologies = matching_technologies(&self.resolver.list_technologies().await?, tags);
        let platforms = matching_platforms(&self.resolver.list_platforms().await?, tags);
        Ok((technologies, platforms))
    }
}

fn required<'a, T>(value: Option<&'a T>, field: &'static str) -> Result<&'a T, SyncError> {
    value.ok_or(SyncError::Validation(ValidationError::MissingField(field)))
}
