//! Authoritative in-memory list for one entity type

use crate::core::models::Entity;
use tracing::debug;

/// Ordered collection keyed by entity id
///
/// Only `replace_all`, `prepend`, `update_by_key` and `remove_by_key` change
/// the list. Readers get shared slices or cloned snapshots.
#[derive(Debug, Clone)]
pub struct CollectionStore<E: Entity> {
    items: Vec<E>,
}

impl<E: Entity> Default for CollectionStore<E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<E: Entity> CollectionStore<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the collection after a fetch-all
    pub fn replace_all(&mut self, items: Vec<E>) {
        debug!(entity = E::LABEL, count = items.len(), "replacing collection");
        self.items = items;
    }

    /// Insert at index 0
    ///
    /// A persisted item whose id is already present replaces the old entry
    /// and moves to the front, so ids stay unique.
    pub fn prepend(&mut self, item: E) {
        if item.is_persisted() {
            self.items.retain(|existing| existing.id() != item.id());
        }
        self.items.insert(0, item);
    }

    /// Replace the entry with this id; returns false when none matched
    pub fn update_by_key(&mut self, id: i64, item: E) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => {
                debug!(entity = E::LABEL, id, "update target no longer present");
                false
            }
        }
    }

    /// Remove the entry with this id, returning it when present
    pub fn remove_by_key(&mut self, id: i64) -> Option<E> {
        let position = self.items.iter().position(|existing| existing.id() == id)?;
        Some(self.items.remove(position))
    }

    /// Toggle the transient delete flag on one row
    pub(crate) fn set_delete_loader(&mut self, id: i64, value: bool) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == id) {
            Some(item) => {
                item.set_delete_loader(value);
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn get(&self, id: i64) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn snapshot(&self) -> Vec<E> {
        self.items.clone()
    }
}
