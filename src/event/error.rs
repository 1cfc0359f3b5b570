//! Error type for event schema validation.

use thiserror::Error;

/// Errors returned while validating an inbound event payload.
///
/// Validation runs before transformation; a payload rejected here never
/// reaches the persistence boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required payload field is absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A list-valued field is present but empty.
    #[error("field {0} must not be empty")]
    EmptyList(&'static str),

    /// A numeric field is zero or negative where a positive value is
    /// required.
    #[error("field {0} must be positive")]
    NonPositive(&'static str),

    /// A phase list was supplied without one of the mandatory phases.
    #[error("phase list must contain a {0} phase")]
    MissingPhase(&'static str),
}
