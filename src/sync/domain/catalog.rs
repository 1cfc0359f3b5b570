//! Technology and platform catalogue entries and tag matching.

/// One entry of the legacy technology catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Technology {
    /// Legacy technology identifier.
    pub id: i64,
    /// Technology name, matched exactly against event tags.
    pub name: String,
}

/// One entry of the legacy platform catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    /// Legacy platform identifier.
    pub id: i64,
    /// Platform name, matched exactly against event tags.
    pub name: String,
}

/// Challenge-type record resolved from a type identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeType {
    /// Canonical track name of the challenge type.
    pub name: String,
}

/// Filters the technology catalogue to entries named by the tag list.
///
/// Matching is case-sensitive and exact; tags that match nothing are
/// silently dropped.
#[must_use]
pub fn matching_technologies(catalogue: &[Technology], tags: &[String]) -> Vec<Technology> {
    catalogue
        .iter()
        .filter(|technology| tags.iter().any(|tag| *tag == technology.name))
        .cloned()
        .collect()
}

/// Filters the platform catalogue to entries named by the tag list.
///
/// Matching is case-sensitive and exact; tags that match nothing are
/// silently dropped.
#[must_use]
pub fn matching_platforms(catalogue: &[Platform], tags: &[String]) -> Vec<Platform> {
    catalogue
        .iter()
        .filter(|platform| tags.iter().any(|tag| *tag == platform.name))
        .cloned()
        .collect()
}
