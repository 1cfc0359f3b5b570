//! In-memory legacy store with staged transactions.

use crate::sync::domain::{
    CategoryLinkRow, ComponentId, ComponentRow, ComponentVersionId, ComponentVersionRow,
    TechnologyLinkRow, VersionDatesRow,
};
use crate::sync::ports::{LegacyStore, LegacyTransaction, StoreError, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Committed rows of the in-memory legacy schema.
#[derive(Debug, Clone, Default)]
pub struct LegacyState {
    /// Component rows by component id.
    pub components: HashMap<i64, ComponentRow>,
    /// Category link rows.
    pub category_links: Vec<CategoryLinkRow>,
    /// Component version rows by version id.
    pub versions: HashMap<i64, ComponentVersionRow>,
    /// Version dates rows.
    pub version_dates: Vec<VersionDatesRow>,
    /// Technology link rows.
    pub technology_links: Vec<TechnologyLinkRow>,
}

/// Thread-safe in-memory legacy store.
///
/// Transactions stage their writes and apply them atomically on commit;
/// a dropped or rolled-back transaction leaves the shared state
/// untouched. A configured failure point makes one row operation of every
/// transaction fail, which is how the rollback tests simulate a write
/// failing mid-flow.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLegacyStore {
    state: Arc<RwLock<LegacyState>>,
    fail_after: Option<usize>,
}

impl InMemoryLegacyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose transactions allow `writes` row operations
    /// to succeed and fail the next one.
    #[must_use]
    pub fn failing_after(writes: usize) -> Self {
        Self {
            state: Arc::new(RwLock::new(LegacyState::default())),
            fail_after: Some(writes),
        }
    }

    /// Returns a copy of the committed state.
    #[must_use]
    pub fn snapshot(&self) -> LegacyState {
        self.read_state(Clone::clone)
    }

    /// Returns the committed component row with the given id.
    #[must_use]
    pub fn component(&self, component_id: ComponentId) -> Option<ComponentRow> {
        self.read_state(|state| state.components.get(&component_id.value()).cloned())
    }

    /// Returns the number of committed component rows.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.read_state(|state| state.components.len())
    }

    /// Returns the committed category links of a component.
    #[must_use]
    pub fn category_links_for(&self, component_id: ComponentId) -> Vec<CategoryLinkRow> {
        self.read_state(|state| {
            state
                .category_links
                .iter()
                .filter(|link| link.component_id == component_id)
                .copied()
                .collect()
        })
    }

    /// Returns the committed technology links of a component version.
    #[must_use]
    pub fn technology_links_for(&self, version_id: ComponentVersionId) -> Vec<TechnologyLinkRow> {
        self.read_state(|state| {
            state
                .technology_links
                .iter()
                .filter(|link| link.version_id == version_id)
                .copied()
                .collect()
        })
    }

    /// Seeds a committed component aggregate, bypassing transactions.
    ///
    /// Test scaffolding for update scenarios that need pre-existing rows.
    pub fn seed_component(&self, component: ComponentRow, version: ComponentVersionRow) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state
            .components
            .insert(component.component_id.value(), component);
        state.versions.insert(version.version_id.value(), version);
    }

    /// Seeds committed technology links, bypassing transactions.
    pub fn seed_technology_links(&self, links: impl IntoIterator<Item = TechnologyLinkRow>) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.technology_links.extend(links);
    }

    fn read_state<T>(&self, f: impl FnOnce(&LegacyState) -> T) -> T {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }
}

#[async_trait]
impl LegacyStore for InMemoryLegacyStore {
    async fn begin(&self) -> StoreResult<Box<dyn LegacyTransaction>> {
        Ok(Box::new(InMemoryLegacyTransaction {
            state: Arc::clone(&self.state),
            staged: Vec::new(),
            fail_after: self.fail_after,
            operations: 0,
        }))
    }
}

#[derive(Debug)]
enum StagedWrite {
    Component(ComponentRow),
    CategoryLink(CategoryLinkRow),
    Version(ComponentVersionRow),
    VersionDates(VersionDatesRow),
    TechnologyLink(TechnologyLinkRow),
    ComponentName {
        component_id: ComponentId,
        name: String,
    },
    ClearTechnologyLinks(ComponentVersionId),
}

#[derive(Debug)]
struct InMemoryLegacyTransaction {
    state: Arc<RwLock<LegacyState>>,
    staged: Vec<StagedWrite>,
    fail_after: Option<usize>,
    operations: usize,
}

impl InMemoryLegacyTransaction {
    fn stage(&mut self, write: StagedWrite) -> StoreResult<()> {
        if self.fail_after == Some(self.operations) {
            return Err(StoreError::message("injected row-operation failure"));
        }
        self.operations += 1;
        self.staged.push(write);
        Ok(())
    }
}

#[async_trait]
impl LegacyTransaction for InMemoryLegacyTransaction {
    async fn insert_component(&mut self, row: &ComponentRow) -> StoreResult<()> {
        self.stage(StagedWrite::Component(row.clone()))
    }

    async fn insert_category_link(&mut self, row: &CategoryLinkRow) -> StoreResult<()> {
        self.stage(StagedWrite::CategoryLink(*row))
    }

    async fn insert_version(&mut self, row: &ComponentVersionRow) -> StoreResult<()> {
        self.stage(StagedWrite::Version(row.clone()))
    }

    async fn insert_version_dates(&mut self, row: &VersionDatesRow) -> StoreResult<()> {
        self.stage(StagedWrite::VersionDates(*row))
    }

    async fn insert_technology_link(&mut self, row: &TechnologyLinkRow) -> StoreResult<()> {
        self.stage(StagedWrite::TechnologyLink(*row))
    }

    async fn update_component_name(
        &mut self,
        component_id: ComponentId,
        name: &str,
    ) -> StoreResult<()> {
        let exists = {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            state.components.contains_key(&component_id.value())
        };
        if !exists {
            return Err(StoreError::message(format!(
                "component {component_id} not found"
            )));
        }
        self.stage(StagedWrite::ComponentName {
            component_id,
            name: name.to_owned(),
        })
    }

    async fn delete_technology_links(&mut self, version_id: ComponentVersionId) -> StoreResult<()> {
        self.stage(StagedWrite::ClearTechnologyLinks(version_id))
    }

    async fn commit(self: Box<Self>) -> StoreResult<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        for write in self.staged {
            apply(&mut state, write);
        }
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> StoreResult<()> {
        // Staged writes are simply dropped.
        Ok(())
    }
}

fn apply(state: &mut LegacyState, write: StagedWrite) {
    match write {
        StagedWrite::Component(row) => {
            state.components.insert(row.component_id.value(), row);
        }
        StagedWrite::CategoryLink(row) => state.category_links.push(row),
        StagedWrite::Version(row) => {
            state.versions.insert(row.version_id.value(), row);
        }
        StagedWrite::VersionDates(row) => state.version_dates.push(row),
        StagedWrite::TechnologyLink(row) => state.technology_links.push(row),
        StagedWrite::ComponentName { component_id, name } => {
            if let Some(component) = state.components.get_mut(&component_id.value()) {
                component.name = name;
            }
        }
        StagedWrite::ClearTechnologyLinks(version_id) => state
            .technology_links
            .retain(|link| link.version_id != version_id),
    }
}
