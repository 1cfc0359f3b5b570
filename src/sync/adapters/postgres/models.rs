//! Diesel insert models for the legacy component catalogue.

use super::schema::{
    comp_catalog, comp_categories, comp_technology, comp_version_dates, comp_versions,
};
use crate::sync::domain::{
    CategoryLinkRow, ComponentRow, ComponentVersionRow, TechnologyLinkRow, VersionDatesRow,
};
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

/// Insert model for component records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comp_catalog)]
pub struct NewComponentRecord {
    /// Component identifier.
    pub component_id: i64,
    /// Pointer to the active version number.
    pub current_version: i64,
    /// Placeholder short description.
    pub short_desc: String,
    /// Placeholder long description.
    pub description: String,
    /// Placeholder functional description.
    pub function_desc: String,
    /// Component status code.
    pub status_id: i64,
    /// Root category identifier.
    pub root_category_id: i64,
    /// Challenge name.
    pub component_name: String,
}

impl From<&ComponentRow> for NewComponentRecord {
    fn from(row: &ComponentRow) -> Self {
        Self {
            component_id: row.component_id.value(),
            current_version: row.current_version,
            short_desc: row.short_description.clone(),
            description: row.long_description.clone(),
            function_desc: row.function_description.clone(),
            status_id: row.status_id,
            root_category_id: row.root_category_id,
            component_name: row.name.clone(),
        }
    }
}

/// Insert model for category link records.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = comp_categories)]
pub struct NewCategoryLinkRecord {
    /// Link identifier.
    pub comp_categories_id: i64,
    /// Component being classified.
    pub component_id: i64,
    /// Category identifier.
    pub category_id: i64,
}

impl From<&CategoryLinkRow> for NewCategoryLinkRecord {
    fn from(row: &CategoryLinkRow) -> Self {
        Self {
            comp_categories_id: row.link_id,
            component_id: row.component_id.value(),
            category_id: row.category_id,
        }
    }
}

/// Insert model for component version records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comp_versions)]
pub struct NewVersionRecord {
    /// Version identifier.
    pub comp_vers_id: i64,
    /// Owning component.
    pub component_id: i64,
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

impl From<&ComponentVersionRow> for NewVersionRecord {
    fn from(row: &ComponentVersionRow) -> Self {
        Self {
            comp_vers_id: row.version_id.value(),
            component_id: row.component_id.value(),
            version: row.version,
            version_text: row.version_text.clone(),
            phase_id: row.phase_id,
            phase_time: row.phase_time,
            price: row.price,
        }
    }
}

/// Insert model for version dates records.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = comp_version_dates)]
pub struct NewVersionDatesRecord {
    /// Dates identifier.
    pub comp_version_dates_id: i64,
    /// Owning component version.
    pub comp_vers_id: i64,
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
    /// Production date derived from the registration start.
    pub production_date: NaiveDate,
}

impl From<&VersionDatesRow> for NewVersionDatesRecord {
    fn from(row: &VersionDatesRow) -> Self {
        Self {
            comp_version_dates_id: row.dates_id,
            comp_vers_id: row.version_id.value(),
            posting_date: row.posting_date,
            initial_submission_date: row.initial_submission_date,
            winner_announced_date: row.winner_announced_date,
            final_submission_date: row.final_submission_date,
            estimated_dev_date: row.estimated_dev_date,
            screening_complete_date: row.screening_complete_date,
            review_complete_date: row.review_complete_date,
            aggregation_complete_date: row.aggregation_complete_date,
            phase_complete_date: row.phase_complete_date,
            production_date: row.production_date,
        }
    }
}

/// Insert model for technology link records.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = comp_technology)]
pub struct NewTechnologyLinkRecord {
    /// Link identifier.
    pub comp_tech_id: i64,
    /// Owning component version.
    pub comp_vers_id: i64,
    /// Matched technology identifier.
    pub technology_type_id: i64,
}

impl From<&TechnologyLinkRow> for NewTechnologyLinkRecord {
    fn from(row: &TechnologyLinkRow) -> Self {
        Self {
            comp_tech_id: row.link_id,
            comp_vers_id: row.version_id.value(),
            technology_type_id: row.technology_id,
        }
    }
}
