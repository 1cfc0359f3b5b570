//! Diesel schema for the legacy component catalogue.

diesel::table! {
    /// Component records, one per synchronized challenge.
    comp_catalog (component_id) {
        /// Component identifier from `COMPONENT_SEQ`.
        component_id -> Int8,
        /// Pointer to the active version number.
        current_version -> Int8,
        /// Placeholder short description.
        short_desc -> Text,
        /// Placeholder long description.
        description -> Text,
        /// Placeholder functional description.
        function_desc -> Text,
        /// Component status code.
        status_id -> Int8,
        /// Root category identifier.
        root_category_id -> Int8,
        /// Challenge name.
        #[max_length = 254]
        component_name -> Varchar,
    }
}

diesel::table! {
    /// Category links binding components to classification categories.
    comp_categories (comp_categories_id) {
        /// Link identifier from `COMPCATEGORY_SEQ`.
        comp_categories_id -> Int8,
        /// Component being classified.
        component_id -> Int8,
        /// Category identifier.
        category_id -> Int8,
    }
}

diesel::table! {
    /// Component version records.
    comp_versions (comp_vers_id) {
        /// Version identifier from `COMPVERSION_SEQ`.
        comp_vers_id -> Int8,
        /// Owning component.
        component_id -> Int8,
        /// Version number.
        version -> Int8,
        /// Version display text.
        #[max_length = 20]
        version_text -> Varchar,
        /// Version phase code.
        phase_id -> Int8,
        /// Phase-time sentinel.
        phase_time -> Timestamp,
        /// Version price.
        price -> Float8,
    }
}

diesel::table! {
    /// Lifecycle date columns attached to component versions.
    comp_version_dates (comp_version_dates_id) {
        /// Dates identifier from `COMPVERSIONDATES_SEQ`.
        comp_version_dates_id -> Int8,
        /// Owning component version.
        comp_vers_id -> Int8,
        /// Posting date sentinel.
        posting_date -> Date,
        /// Initial submission date sentinel.
        initial_submission_date -> Date,
        /// Winner announcement date sentinel.
        winner_announced_date -> Date,
        /// Final submission date sentinel.
        final_submission_date -> Date,
        /// Estimated development date sentinel.
        estimated_dev_date -> Date,
        /// Screening completion date sentinel.
        screening_complete_date -> Date,
        /// Review completion date sentinel.
        review_complete_date -> Date,
        /// Aggregation completion date sentinel.
        aggregation_complete_date -> Date,
        /// Phase completion date sentinel.
        phase_complete_date -> Date,
        /// Production date derived from the registration start.
        production_date -> Date,
    }
}

diesel::table! {
    /// Technology links binding matched technologies to component versions.
    comp_technology (comp_tech_id) {
        /// Link identifier from `COMPTECHNOLOGY_SEQ`.
        comp_tech_id -> Int8,
        /// Owning component version.
        comp_vers_id -> Int8,
        /// Matched technology identifier.
        technology_type_id -> Int8,
    }
}
