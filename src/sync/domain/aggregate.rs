//! Row shapes of the legacy component aggregate.
//!
//! One challenge spans five record kinds in the legacy catalogue, linked
//! by externally allocated surrogate keys: the component, its category
//! link, its component version, the version's lifecycle dates, and zero or
//! more technology links. The sentinel values below are legacy-schema
//! artifacts with no computable meaning and are reproduced as fixed
//! constants.

use super::{ComponentId, ComponentVersionId, LegacyChallengeId};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Component status code for a newly projected challenge ("in draft").
pub const STATUS_IN_DRAFT: i64 = 102;

/// Version phase code for a newly created component version ("new").
pub const VERSION_PHASE_NEW: i64 = 112;

/// Version number of the single version this core ever creates.
pub const INITIAL_VERSION: i64 = 1;

/// Version text accompanying [`INITIAL_VERSION`].
pub const INITIAL_VERSION_TEXT: &str = "1.0";

/// Placeholder for the component description columns the event stream
/// does not populate.
pub const PLACEHOLDER_DESCRIPTION: &str = "NA";

/// Sentinel stamped into lifecycle date columns with no meaningful value.
pub const SENTINEL_LIFECYCLE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

/// Sentinel stamped into the version phase-time column.
pub const SENTINEL_PHASE_TIME: NaiveDateTime =
    NaiveDateTime::new(SENTINEL_LIFECYCLE_DATE, NaiveTime::MIN);

/// Component row: one per challenge, owning the current-version pointer
/// and the root category.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRow {
    /// Allocated component identifier.
    pub component_id: ComponentId,
    /// Pointer to the active version number.
    pub current_version: i64,
    /// Placeholder short description.
    pub short_description: String,
    /// Placeholder long description.
    pub long_description: String,
    /// Placeholder functional description.
    pub function_description: String,
    /// Component status code.
    pub status_id: i64,
    /// Root category from the placement rules.
    pub root_category_id: i64,
    /// Challenge name.
    pub name: String,
}

/// Category link row: binds a component to its classification category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryLinkRow {
    /// Allocated link identifier.
    pub link_id: i64,
    /// Component being classified.
    pub component_id: ComponentId,
    /// Category from the placement rules.
    pub category_id: i64,
}

/// Component version row: the single active version of a component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentVersionRow {
    /// Allocated version identifier.
    pub version_id: ComponentVersionId,
    /// Owning component.
    pub component_id: ComponentId,
    /// Version number.
    pub version: i64,
    /// Version display text.
    pub version_text: String,
    /// Version phase code.
    pub phase_id: i64,
    /// Phase-time sentinel.
    pub phase_time: NaiveDateTime,
    /// Version price.
    pub price: f64,
}

/// Version dates row: the fixed set of lifecycle date columns attached to
/// a component version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionDatesRow {
    /// Allocated dates identifier.
    pub dates_id: i64,
    /// Owning component version.
    pub version_id: ComponentVersionId,
    /// Posting date sentinel.
    pub posting_date: NaiveDate,
    /// Initial submission date sentinel.
    pub initial_submission_date: NaiveDate,
    /// Winner announcement date sentinel.
    pub winner_announced_date: NaiveDate,
    /// Final submission date sentinel.
    pub final_submission_date: NaiveDate,
    /// Estimated development date sentinel.
    pub estimated_dev_date: NaiveDate,
    /// Screening completion date sentinel.
    pub screening_complete_date: NaiveDate,
    /// Review completion date sentinel.
    pub review_complete_date: NaiveDate,
    /// Aggregation completion date sentinel.
    pub aggregation_complete_date: NaiveDate,
    /// Phase completion date sentinel.
    pub phase_complete_date: NaiveDate,
    /// Production date, the one derived column: the date portion of the
    /// draft's registration start.
    pub production_date: NaiveDate,
}

impl VersionDatesRow {
    /// Builds the initial dates row for a new component version.
    ///
    /// Every column carries the lifecycle sentinel except the production
    /// date, which is derived from the registration start date.
    #[must_use]
    pub const fn initial(
        dates_id: i64,
        version_id: ComponentVersionId,
        production_date: NaiveDate,
    ) -> Self {
        Self {
            dates_id,
            version_id,
            posting_date: SENTINEL_LIFECYCLE_DATE,
            initial_submission_date: SENTINEL_LIFECYCLE_DATE,
            winner_announced_date: SENTINEL_LIFECYCLE_DATE,
            final_submission_date: SENTINEL_LIFECYCLE_DATE,
            estimated_dev_date: SENTINEL_LIFECYCLE_DATE,
            screening_complete_date: SENTINEL_LIFECYCLE_DATE,
            review_complete_date: SENTINEL_LIFECYCLE_DATE,
            aggregation_complete_date: SENTINEL_LIFECYCLE_DATE,
            phase_complete_date: SENTINEL_LIFECYCLE_DATE,
            production_date,
        }
    }
}

/// Technology link row: binds one matched technology to a component
/// version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechnologyLinkRow {
    /// Allocated link identifier.
    pub link_id: i64,
    /// Owning component version.
    pub version_id: ComponentVersionId,
    /// Matched technology identifier.
    pub technology_id: i64,
}

/// Existing challenge record looked up from the authoritative legacy
/// project table. This core never creates these rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyChallenge {
    /// Legacy challenge identifier.
    pub legacy_id: LegacyChallengeId,
    /// Stored category identifier.
    pub category_id: i64,
    /// Stored category name.
    pub category_name: String,
    /// Whether the challenge belongs to the Studio project type.
    pub studio: bool,
}
