//! Domain model for legacy challenge synchronization.
//!
//! Pure types and rules with no infrastructure dependencies: surrogate
//! identifier newtypes, the static legacy category table, prize-set
//! derivation, the draft representations produced by the payload
//! transformer, and the row shapes of the legacy component aggregate.

mod aggregate;
mod catalog;
mod category;
mod draft;
mod error;
mod ids;
mod prize;

pub use aggregate::{
    CategoryLinkRow, ComponentRow, ComponentVersionRow, INITIAL_VERSION, INITIAL_VERSION_TEXT,
    LegacyChallenge, PLACEHOLDER_DESCRIPTION, SENTINEL_LIFECYCLE_DATE, SENTINEL_PHASE_TIME,
    STATUS_IN_DRAFT, TechnologyLinkRow, VERSION_PHASE_NEW, VersionDatesRow,
};
pub use catalog::{
    ChallengeType, Platform, Technology, matching_platforms, matching_technologies,
};
pub use category::{
    Category, CategoryPlacement, TECHNOLOGY_EXCLUDED_TRACKS, is_studio_track, resolve_placement,
    technologies_apply_to_category, technologies_apply_to_track,
};
pub use draft::{
    CONFIDENTIALITY_PUBLIC, CheckpointWindow, DEFAULT_MILESTONE_ID, DEFAULT_SUBMISSION_GUIDELINES,
    DraftAmendment, DraftComponent, PhaseSchedule,
};
pub use error::DomainRuleViolation;
pub use ids::{ComponentId, ComponentVersionId, LegacyChallengeId};
pub use prize::{PrizeSummary, derive_prize_summary};
