//! Loading flags that drive UI affordances

use super::collection::CollectionStore;
use crate::core::models::Entity;

/// Kind of remote operation a screen performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    List,
    Add,
    Edit,
    Delete,
}

impl OperationKind {
    /// Add for unsaved drafts, Edit for persisted ones
    pub fn for_save(id: i64) -> Self {
        if id > 0 { Self::Edit } else { Self::Add }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Add => "Add",
            Self::Edit => "Edit",
            Self::Delete => "Delete",
        }
    }

    /// Notification title, e.g. `Candidate Delete`
    pub fn title(&self, label: &str) -> String {
        format!("{} {}", label, self.verb())
    }

    /// Text for a success the server did not describe, e.g. `Batch deleted`
    pub fn success_message(&self, label: &str) -> String {
        let done = match self {
            Self::List => "list loaded",
            Self::Add => "added",
            Self::Edit => "updated",
            Self::Delete => "deleted",
        };
        format!("{} {}", label, done)
    }
}

/// Fetch and save flags plus the per-row delete flag
///
/// The delete flag lives on the entity itself so the loading state stays
/// scoped to the one row. A second delete on a row already deleting is not
/// blocked here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationTracker {
    fetch_all_in_flight: bool,
    save_in_flight: bool,
}

impl OperationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fetch_all_in_flight(&self) -> bool {
        self.fetch_all_in_flight
    }

    pub fn save_in_flight(&self) -> bool {
        self.save_in_flight
    }

    pub fn begin_fetch(&mut self) {
        self.fetch_all_in_flight = true;
    }

    pub fn end_fetch(&mut self) {
        self.fetch_all_in_flight = false;
    }

    pub fn begin_save(&mut self) {
        self.save_in_flight = true;
    }

    pub fn end_save(&mut self) {
        self.save_in_flight = false;
    }

    /// Raise the row's delete flag; false when the row is not present
    pub fn begin_delete<E: Entity>(&mut self, store: &mut CollectionStore<E>, id: i64) -> bool {
        store.set_delete_loader(id, true)
    }

    pub fn end_delete<E: Entity>(&mut self, store: &mut CollectionStore<E>, id: i64) -> bool {
        store.set_delete_loader(id, false)
    }

    /// Rows currently showing a delete spinner
    pub fn deleting_ids<E: Entity>(&self, store: &CollectionStore<E>) -> Vec<i64> {
        store
            .items()
            .iter()
            .filter(|item| item.is_delete_loader())
            .map(|item| item.id())
            .collect()
    }
}
