//! Private reference lists for dropdowns and edit resolution

use super::{ListScreen, ScreenLifetime};
use crate::core::gateway::Gateway;
use crate::core::models::{Batch, Candidate, Enrollment, Entity, Session};
use crate::core::store::CollectionStore;
use crate::core::types::Outcome;
use crate::utils::error::Result;
use parking_lot::Mutex;
use tracing::{debug, warn};

/// Read-only list fetched for another screen's use
///
/// Each lookup owns its own store; nothing is shared with the screen that
/// manages the same entity.
pub struct Lookup<E: Entity, G: Gateway<E>> {
    gateway: G,
    store: Mutex<CollectionStore<E>>,
    lifetime: ScreenLifetime,
}

impl<E: Entity, G: Gateway<E>> Lookup<E, G> {
    /// Lookup that stops accepting results when `lifetime` ends
    pub fn new(gateway: G, lifetime: ScreenLifetime) -> Self {
        Self {
            gateway,
            store: Mutex::new(CollectionStore::new()),
            lifetime,
        }
    }

    /// Fetch the list; failures keep the previous contents
    pub async fn load(&self) -> Outcome<Vec<E>> {
        let outcome = self.gateway.fetch_all().await;
        if !self.lifetime.is_active() {
            return outcome;
        }
        if outcome.succeeded {
            let items = outcome.payload.clone().unwrap_or_default();
            debug!(entity = E::LABEL, count = items.len(), "lookup loaded");
            self.store.lock().replace_all(items);
        } else {
            warn!(entity = E::LABEL, "lookup fetch failed: {}", outcome.message);
        }
        outcome
    }

    pub fn items(&self) -> Vec<E> {
        self.store.lock().snapshot()
    }

    pub fn get(&self, id: i64) -> Option<E> {
        self.store.lock().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }
}

impl<G: Gateway<Enrollment>> ListScreen<Enrollment, G> {
    /// Edit draft with batch and candidate ids resolved by name
    pub fn open_edit_resolved<BG, CG>(
        &self,
        id: i64,
        batches: &Lookup<Batch, BG>,
        candidates: &Lookup<Candidate, CG>,
    ) -> Result<()>
    where
        BG: Gateway<Batch>,
        CG: Gateway<Candidate>,
    {
        let batches = batches.items();
        let candidates = candidates.items();
        self.open_edit_with(id, |draft| draft.resolve_references(&batches, &candidates))
    }
}

impl<G: Gateway<Session>> ListScreen<Session, G> {
    /// Edit draft with the batch id resolved by name
    pub fn open_edit_resolved<BG>(&self, id: i64, batches: &Lookup<Batch, BG>) -> Result<()>
    where
        BG: Gateway<Batch>,
    {
        let batches = batches.items();
        self.open_edit_with(id, |draft| draft.resolve_batch(&batches))
    }
}
