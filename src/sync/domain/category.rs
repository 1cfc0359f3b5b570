//! Static legacy category table and the track classification rules.
//!
//! The legacy catalogue classifies components against a fixed category
//! tree. The ids and names below are legacy constants, not values computed
//! at runtime.

/// One entry of the legacy category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Category {
    id: i64,
    name: &'static str,
}

impl Category {
    /// Returns the legacy category identifier.
    #[must_use]
    pub const fn id(self) -> i64 {
        self.id
    }

    /// Returns the legacy category name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }
}

/// Root category and category a component is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPlacement {
    root: Category,
    category: Category,
}

impl CategoryPlacement {
    /// Returns the root category.
    #[must_use]
    pub const fn root(self) -> Category {
        self.root
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(self) -> Category {
        self.category
    }
}

/// Catch-all category for components without a catalogue placement.
const NOT_SET: Category = Category {
    id: 34,
    name: "Not Set",
};

/// Root of the application branch of the legacy category tree.
const APPLICATION: Category = Category {
    id: 5_801_776,
    name: "Application",
};

/// Business-layer category under the application root.
const BUSINESS_LAYER: Category = Category {
    id: 5_801_777,
    name: "Business Layer",
};

/// Default placement for tracks the legacy catalogue recognizes.
const NOT_SET_PLACEMENT: CategoryPlacement = CategoryPlacement {
    root: NOT_SET,
    category: NOT_SET,
};

/// Placement override for non-studio challenges on unrecognized tracks.
const BUSINESS_LAYER_PLACEMENT: CategoryPlacement = CategoryPlacement {
    root: APPLICATION,
    category: BUSINESS_LAYER,
};

/// Tracks that always receive the default "Not Set" placement.
const DEFAULT_PLACEMENT_TRACKS: [&str; 3] = ["Marathon Match", "Design", "Development"];

/// Tracks whose components never carry technology links.
pub const TECHNOLOGY_EXCLUDED_TRACKS: [&str; 3] =
    ["Marathon Match", "Conceptualization", "Specification"];

/// Resolves the legacy placement for a track.
///
/// Components default to the "Not Set" pair. A challenge on a track
/// outside {Marathon Match, Design, Development} that is not a studio
/// challenge is filed under Application / Business Layer instead; this is
/// a legacy business rule reproduced verbatim.
#[must_use]
pub fn resolve_placement(track: &str, is_studio: bool) -> CategoryPlacement {
    let recognized = DEFAULT_PLACEMENT_TRACKS.contains(&track);
    if !recognized && !is_studio {
        return BUSINESS_LAYER_PLACEMENT;
    }
    NOT_SET_PLACEMENT
}

/// Returns `true` when a track name denotes a studio challenge.
///
/// Studio challenges live under the Studio project type; in the event
/// stream they are recognizable only by their design-flavoured track
/// names.
#[must_use]
pub fn is_studio_track(track: &str) -> bool {
    track.to_ascii_lowercase().contains("design")
}

/// Create-flow guard: whether components on this track carry technology
/// links.
#[must_use]
pub fn technologies_apply_to_track(track: &str, is_studio: bool) -> bool {
    !TECHNOLOGY_EXCLUDED_TRACKS.contains(&track) && !is_studio
}

/// Update-flow guard: whether an existing component's category admits
/// technology links.
///
/// Deliberately compares the stored category *name* where the create
/// flow compares the track string; the legacy system applies the two
/// guards against different fields and both are kept as-is.
#[must_use]
pub fn technologies_apply_to_category(category_name: &str, is_studio: bool) -> bool {
    !TECHNOLOGY_EXCLUDED_TRACKS.contains(&category_name) && !is_studio
}
