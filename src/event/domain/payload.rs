//! Challenge payload carried inside an event envelope.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical name of the registration phase.
pub const REGISTRATION_PHASE: &str = "Registration";

/// Canonical name of the submission phase.
pub const SUBMISSION_PHASE: &str = "Submission";

/// Canonical name of the checkpoint submission phase.
pub const CHECKPOINT_SUBMISSION_PHASE: &str = "Checkpoint Submission";

/// Normalized prize-set type marking the checkpoint prize pool.
///
/// Producers spell this inconsistently (`CheckPoint`, `Checkpoint`), so
/// comparisons go through [`PrizeSetPayload::is_checkpoint`], which matches
/// case-insensitively.
pub const CHECKPOINT_PRIZE_SET_TYPE: &str = "checkpoint";

/// Challenge fields carried by create and update events.
///
/// Create events populate every field except `legacy_id`; update events
/// carry `legacy_id` plus whichever aspects changed. Which combination is
/// acceptable is enforced by the validation rules, not by this type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengePayload {
    /// Challenge identifier in the authoritative API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Challenge-type identifier, resolvable to a track name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<Uuid>,
    /// Identifier of the challenge in the legacy store (update events).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<i64>,
    /// Human-readable track name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    /// Challenge name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Challenge description, raw or markdown depending on [`Self::markdown`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Lifecycle phases with their durations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phases: Option<Vec<PhasePayload>>,
    /// Prize pools grouped by prize-set type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize_sets: Option<Vec<PrizeSetPayload>>,
    /// Review process identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_type: Option<String>,
    /// Whether the description is markdown and needs HTML rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<bool>,
    /// Free-form tags, matched against the technology and platform
    /// catalogues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Identifier of the owning project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    /// Identifier of the discussion forum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forum_id: Option<i64>,
}

impl ChallengePayload {
    /// Finds a phase by case-insensitive name match.
    #[must_use]
    pub fn phase(&self, name: &str) -> Option<&PhasePayload> {
        self.phases
            .as_deref()?
            .iter()
            .find(|phase| phase.name.eq_ignore_ascii_case(name))
    }
}

/// One lifecycle phase of a challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhasePayload {
    /// Phase name, matched case-insensitively against the fixed vocabulary.
    pub name: String,
    /// Phase duration in seconds.
    pub duration: i64,
}

/// One prize pool of a challenge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeSetPayload {
    /// Prize-set type, e.g. `Code` or `CheckPoint`.
    #[serde(rename = "type")]
    pub set_type: String,
    /// Prizes in announcement order.
    pub prizes: Vec<PrizePayload>,
}

impl PrizeSetPayload {
    /// Returns `true` when this set carries the checkpoint prize pool.
    #[must_use]
    pub fn is_checkpoint(&self) -> bool {
        self.set_type.eq_ignore_ascii_case(CHECKPOINT_PRIZE_SET_TYPE)
    }
}

/// A single prize entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizePayload {
    /// Prize value in the challenge currency.
    pub value: f64,
}
