//! Individual schema-validation rule implementations.

use crate::event::domain::{
    ChallengePayload, PhasePayload, PrizeSetPayload, REGISTRATION_PHASE, SUBMISSION_PHASE,
};
use crate::event::error::ValidationError;

/// Validates a create-event payload.
///
/// Create events must carry the full challenge shape: identifiers, track,
/// name, description, non-empty phase and prize-set lists, review type,
/// markdown flag, non-empty tags, and positive project and forum ids.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate_create(payload: &ChallengePayload) -> Result<(), ValidationError> {
    require(payload.id.as_ref(), "id")?;
    require(payload.type_id.as_ref(), "typeId")?;
    require(payload.track.as_ref(), "track")?;
    require(payload.name.as_ref(), "name")?;
    require(payload.description.as_ref(), "description")?;
    require(payload.review_type.as_ref(), "reviewType")?;
    require(payload.markdown.as_ref(), "markdown")?;

    let phases = require(payload.phases.as_ref(), "phases")?;
    validate_phases(phases)?;

    let prize_sets = require(payload.prize_sets.as_ref(), "prizeSets")?;
    validate_prize_sets(prize_sets)?;

    let tags = require(payload.tags.as_ref(), "tags")?;
    validate_non_empty(tags, "tags")?;

    let project_id = require(payload.project_id.as_ref(), "projectId")?;
    validate_positive(*project_id, "projectId")?;
    let forum_id = require(payload.forum_id.as_ref(), "forumId")?;
    validate_positive(*forum_id, "forumId")?;

    Ok(())
}

/// Validates an update-event payload and returns the legacy challenge id.
///
/// Update events require only a positive legacy challenge id; every other
/// field is optional but must satisfy its shape constraints when present.
/// Callers receive the id so the presence check lives in one place.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate_update(payload: &ChallengePayload) -> Result<i64, ValidationError> {
    let legacy_id = *require(payload.legacy_id.as_ref(), "legacyId")?;
    validate_positive(legacy_id, "legacyId")?;

    if let Some(phases) = payload.phases.as_ref() {
        validate_phases(phases)?;
    }
    if let Some(prize_sets) = payload.prize_sets.as_ref() {
        validate_prize_sets(prize_sets)?;
    }
    if let Some(tags) = payload.tags.as_ref() {
        validate_non_empty(tags, "tags")?;
    }
    if let Some(project_id) = payload.project_id {
        validate_positive(project_id, "projectId")?;
    }
    if let Some(forum_id) = payload.forum_id {
        validate_positive(forum_id, "forumId")?;
    }

    Ok(legacy_id)
}

fn require<'a, T>(value: Option<&'a T>, field: &'static str) -> Result<&'a T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

fn validate_non_empty<T>(values: &[T], field: &'static str) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::EmptyList(field));
    }
    Ok(())
}

fn validate_positive(value: i64, field: &'static str) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NonPositive(field));
    }
    Ok(())
}

/// Validates the phase list: non-empty, positive durations, and both
/// mandatory phases present.
///
/// The transformer assumes registration and submission exist whenever a
/// phase list does, so their absence must be caught here.
fn validate_phases(phases: &[PhasePayload]) -> Result<(), ValidationError> {
    validate_non_empty(phases, "phases")?;
    for phase in phases {
        validate_positive(phase.duration, "phases.duration")?;
    }
    require_phase(phases, REGISTRATION_PHASE)?;
    require_phase(phases, SUBMISSION_PHASE)?;
    Ok(())
}

fn require_phase(phases: &[PhasePayload], name: &'static str) -> Result<(), ValidationError> {
    let found = phases
        .iter()
        .any(|phase| phase.name.eq_ignore_ascii_case(name));
    if !found {
        return Err(ValidationError::MissingPhase(name));
    }
    Ok(())
}

/// Validates the prize-set list: non-empty, and every set carries at least
/// one prize with a positive value.
fn validate_prize_sets(prize_sets: &[PrizeSetPayload]) -> Result<(), ValidationError> {
    validate_non_empty(prize_sets, "prizeSets")?;
    for set in prize_sets {
        validate_non_empty(&set.prizes, "prizeSets.prizes")?;
        for prize in &set.prizes {
            if prize.value <= 0.0 {
                return Err(ValidationError::NonPositive("prizeSets.prizes.value"));
            }
        }
    }
    Ok(())
}
