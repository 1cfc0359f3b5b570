//! Draft representations produced by the payload transformer.
//!
//! A draft is the normalized, legacy-facing view of one event. Create
//! events yield a complete [`DraftComponent`]; update events yield a
//! [`DraftAmendment`] carrying only the aspects the event changes.

use super::{Platform, PrizeSummary, Technology};
use chrono::{DateTime, Duration, Utc};

/// Confidentiality value stamped on every created component.
pub const CONFIDENTIALITY_PUBLIC: &str = "public";

/// Submission guidelines text stamped on every created component.
pub const DEFAULT_SUBMISSION_GUIDELINES: &str =
    "Please read the challenge specification carefully and ask any questions in the challenge forum.";

/// Milestone identifier stamped on every created component.
pub const DEFAULT_MILESTONE_ID: i64 = 1;

/// Checkpoint phase window. Present only when the event's phase list
/// carries a checkpoint phase; both timestamps always travel together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckpointWindow {
    /// When the checkpoint phase opens.
    pub starts_at: DateTime<Utc>,
    /// When the checkpoint phase closes.
    pub ends_at: DateTime<Utc>,
}

/// Phase-derived timestamps of a draft component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSchedule {
    /// Registration opens at transformation time.
    pub registration_starts_at: DateTime<Utc>,
    /// Registration closes after the registration phase duration.
    pub registration_ends_at: DateTime<Utc>,
    /// Submission closes after the submission phase duration.
    pub submission_ends_at: DateTime<Utc>,
    /// Checkpoint window, when the phase list carries a checkpoint phase.
    pub checkpoint: Option<CheckpointWindow>,
}

impl PhaseSchedule {
    /// Builds the schedule from phase durations, anchored at `now`.
    ///
    /// Durations are in seconds. The checkpoint window exists only when a
    /// checkpoint duration is supplied.
    #[must_use]
    pub fn from_durations(
        now: DateTime<Utc>,
        registration_seconds: i64,
        submission_seconds: i64,
        checkpoint_seconds: Option<i64>,
    ) -> Self {
        let checkpoint = checkpoint_seconds.map(|seconds| CheckpointWindow {
            starts_at: now,
            ends_at: now + Duration::seconds(seconds),
        });
        Self {
            registration_starts_at: now,
            registration_ends_at: now + Duration::seconds(registration_seconds),
            submission_ends_at: now + Duration::seconds(submission_seconds),
            checkpoint,
        }
    }
}

/// Normalized legacy-facing view of a create event.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftComponent {
    /// Resolved track name, re-resolved through the type id when present.
    pub track: String,
    /// Whether the challenge is a studio challenge.
    pub is_studio: bool,
    /// Challenge name.
    pub name: String,
    /// Description, HTML-rendered when the payload declared markdown.
    pub detailed_requirements: String,
    /// Review process identifier.
    pub review_type: String,
    /// Identifier of the owning project.
    pub external_project_id: i64,
    /// Identifier of the discussion forum.
    pub forum_id: i64,
    /// Fixed confidentiality value.
    pub confidentiality: &'static str,
    /// Fixed submission guidelines text.
    pub submission_guidelines: &'static str,
    /// Fixed submission visibility.
    pub submission_visible: bool,
    /// Fixed milestone identifier.
    pub milestone_id: i64,
    /// Phase-derived timestamps.
    pub schedule: PhaseSchedule,
    /// Derived prize information.
    pub prizes: PrizeSummary,
    /// Technology catalogue entries matched by the event tags.
    pub technologies: Vec<Technology>,
    /// Platform catalogue entries matched by the event tags.
    pub platforms: Vec<Platform>,
}

/// Normalized legacy-facing view of an update event.
///
/// Every field mirrors an optional aspect of the update payload; absent
/// fields leave the stored component untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftAmendment {
    /// New track name, when the event supplies a track or type id.
    pub track: Option<String>,
    /// New challenge name.
    pub name: Option<String>,
    /// New description, HTML-rendered when the payload declared markdown.
    pub detailed_requirements: Option<String>,
    /// Re-derived prize information, when the event supplies prize-sets.
    pub prizes: Option<PrizeSummary>,
    /// Technology catalogue entries matched by the event tags.
    pub technologies: Vec<Technology>,
    /// Platform catalogue entries matched by the event tags.
    pub platforms: Vec<Platform>,
}
