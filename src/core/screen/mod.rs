//! List screens
//!
//! A [`ListScreen`] ties one entity's collection store, pager, operation
//! tracker, form draft and notification channel to a [`Gateway`]. The four
//! entity screens are type aliases over the same implementation.
//!
//! Every method takes `&self`. State lives behind a mutex that is never held
//! across an await, so several operations may be in flight at once and the
//! last one to settle wins.

pub mod lifetime;
pub mod lookup;

pub use lifetime::ScreenLifetime;
pub use lookup::Lookup;

use crate::config::UiConfig;
use crate::core::gateway::{Gateway, RestGateway};
use crate::core::models::{Batch, Candidate, Enrollment, Entity, Session};
use crate::core::store::{
    CollectionStore, FormDraft, Notification, NotificationChannel, OperationKind,
    OperationTracker, Pager, ViewMode,
};
use crate::core::types::{GENERIC_FAILURE_MESSAGE, Outcome};
use crate::utils::error::{BatchDeskError, Result};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub type BatchScreen<G = RestGateway<Batch>> = ListScreen<Batch, G>;
pub type CandidateScreen<G = RestGateway<Candidate>> = ListScreen<Candidate, G>;
pub type EnrollmentScreen<G = RestGateway<Enrollment>> = ListScreen<Enrollment, G>;
pub type SessionScreen<G = RestGateway<Session>> = ListScreen<Session, G>;

#[derive(Debug)]
struct ScreenState<E: Entity> {
    store: CollectionStore<E>,
    pager: Pager,
    tracker: OperationTracker,
    notifications: NotificationChannel,
    draft: Option<FormDraft<E>>,
}

/// State manager behind one entity list screen
pub struct ListScreen<E: Entity, G: Gateway<E>> {
    gateway: Arc<G>,
    state: Arc<Mutex<ScreenState<E>>>,
    lifetime: ScreenLifetime,
    notification_timeout: Duration,
}

impl<E: Entity, G: Gateway<E>> Clone for ListScreen<E, G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            state: self.state.clone(),
            lifetime: self.lifetime.clone(),
            notification_timeout: self.notification_timeout,
        }
    }
}

impl<E: Entity, G: Gateway<E>> ListScreen<E, G> {
    pub fn new(gateway: G, ui: &UiConfig) -> Self {
        Self::with_gateway(Arc::new(gateway), ui)
    }

    /// Screen over a gateway shared with other owners
    pub fn with_gateway(gateway: Arc<G>, ui: &UiConfig) -> Self {
        Self {
            gateway,
            state: Arc::new(Mutex::new(ScreenState {
                store: CollectionStore::new(),
                pager: Pager::new(ui.page_size, E::RESETS_PAGE_ON_VIEW_TOGGLE),
                tracker: OperationTracker::new(),
                notifications: NotificationChannel::new(),
                draft: None,
            })),
            lifetime: ScreenLifetime::new(),
            notification_timeout: ui.notification_timeout(),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Handle for anything that must die with this screen, such as lookups
    pub fn lifetime(&self) -> ScreenLifetime {
        self.lifetime.clone()
    }

    pub fn is_active(&self) -> bool {
        self.lifetime.is_active()
    }

    /// Initial fetch-all
    pub async fn mount(&self) -> Outcome<Vec<E>> {
        info!(entity = E::LABEL, "mounting screen");
        self.refresh().await
    }

    /// Fetch-all, replacing the collection on success
    ///
    /// A failure leaves the collection untouched and raises a `<Label> List`
    /// notification. The fetch flag is cleared either way.
    pub async fn refresh(&self) -> Outcome<Vec<E>> {
        self.state.lock().tracker.begin_fetch();

        let outcome = self.gateway.fetch_all().await;

        if !self.lifetime.is_active() {
            debug!(entity = E::LABEL, "screen torn down, dropping fetch-all result");
            return outcome;
        }

        {
            let mut state = self.state.lock();
            state.tracker.end_fetch();
            if outcome.succeeded {
                state
                    .store
                    .replace_all(outcome.payload.clone().unwrap_or_default());
            } else {
                warn!(entity = E::LABEL, "fetch-all failed: {}", outcome.message);
                state.notifications.show(
                    OperationKind::List.title(E::LABEL),
                    outcome.display_message(),
                    false,
                );
            }
        }

        outcome
    }

    /// Start an empty create draft and open the form
    pub fn open_add(&self) {
        self.state.lock().draft = Some(FormDraft::create());
    }

    /// Start an edit draft copied from the collection entry with `id`
    pub fn open_edit(&self, id: i64) -> Result<()> {
        self.open_edit_with(id, |_| {})
    }

    /// Like [`open_edit`](Self::open_edit), adjusting the copy before use
    pub fn open_edit_with<F>(&self, id: i64, adjust: F) -> Result<()>
    where
        F: FnOnce(&mut E),
    {
        let mut state = self.state.lock();
        let source = state
            .store
            .get(id)
            .ok_or_else(|| BatchDeskError::not_found(format!("{} {}", E::LABEL, id)))?;
        let mut draft = FormDraft::edit(source);
        adjust(draft.value_mut());
        state.draft = Some(draft);
        Ok(())
    }

    /// Change the open draft
    pub fn edit_draft<F>(&self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut E),
    {
        let mut state = self.state.lock();
        let draft = state.draft.as_mut().ok_or(BatchDeskError::NoDraft)?;
        edit(draft.value_mut());
        Ok(())
    }

    /// Discard the draft and close the form
    pub fn cancel_draft(&self) {
        self.state.lock().draft = None;
    }

    pub fn draft(&self) -> Option<FormDraft<E>> {
        self.state.lock().draft.clone()
    }

    pub fn is_form_open(&self) -> bool {
        self.state.lock().draft.is_some()
    }

    /// Create or update the open draft
    ///
    /// Refuses without a draft or with an invalid one; neither case issues a
    /// request. On success the collection is updated and the draft closed.
    /// On failure the collection and the draft are left as they were.
    pub async fn save(&self) -> Result<Outcome<E>> {
        let submission = {
            let mut state = self.state.lock();
            let draft = state.draft.as_mut().ok_or(BatchDeskError::NoDraft)?;
            draft.validate()?;
            let submission = draft.to_submission();
            state.tracker.begin_save();
            submission
        };

        let kind = OperationKind::for_save(submission.id());
        let outcome = match kind {
            OperationKind::Edit => self.gateway.update(&submission).await,
            _ => self.gateway.create(&submission).await,
        };

        if !self.lifetime.is_active() {
            debug!(entity = E::LABEL, "screen torn down, dropping save result");
            return Ok(outcome);
        }

        let needs_refresh = {
            let mut state = self.state.lock();
            state.tracker.end_save();
            self.notify(&mut state.notifications, kind, &outcome);

            if outcome.succeeded {
                state.draft = None;
                match (kind, outcome.payload.clone()) {
                    (OperationKind::Edit, payload) => {
                        let updated = payload.unwrap_or_else(|| submission.clone());
                        state.store.update_by_key(submission.id(), updated);
                        false
                    }
                    (_, Some(created)) => {
                        state.store.prepend(created);
                        false
                    }
                    (_, None) => true,
                }
            } else {
                warn!(entity = E::LABEL, "{} failed: {}", kind.verb(), outcome.message);
                false
            }
        };

        if needs_refresh {
            debug!(entity = E::LABEL, "create returned no entity, refetching");
            self.refresh().await;
        }

        Ok(outcome)
    }

    /// Delete the entity with exactly this id
    ///
    /// The row's delete flag is raised while the call is in flight. The row
    /// is removed only on success.
    pub async fn delete(&self, id: i64) -> Outcome<E> {
        {
            let mut state = self.state.lock();
            let ScreenState { store, tracker, .. } = &mut *state;
            if !tracker.begin_delete(store, id) {
                debug!(entity = E::LABEL, id, "deleting a row not in the collection");
            }
        }

        let outcome = self.gateway.delete(id).await;

        if !self.lifetime.is_active() {
            debug!(entity = E::LABEL, id, "screen torn down, dropping delete result");
            return outcome;
        }

        {
            let mut state = self.state.lock();
            let ScreenState {
                store,
                tracker,
                notifications,
                ..
            } = &mut *state;
            tracker.end_delete(store, id);
            if outcome.succeeded {
                store.remove_by_key(id);
            } else {
                warn!(entity = E::LABEL, id, "delete failed: {}", outcome.message);
            }
            self.notify(notifications, OperationKind::Delete, &outcome);
        }

        outcome
    }

    fn notify<T>(&self, channel: &mut NotificationChannel, kind: OperationKind, outcome: &Outcome<T>) {
        let message = if !outcome.message.trim().is_empty() {
            outcome.message.clone()
        } else if outcome.succeeded {
            kind.success_message(E::LABEL)
        } else {
            GENERIC_FAILURE_MESSAGE.to_string()
        };
        channel.show(kind.title(E::LABEL), message, outcome.succeeded);
    }

    pub fn change_page(&self, page: usize) -> bool {
        let mut state = self.state.lock();
        let total = state.store.len();
        state.pager.change_page(page, total)
    }

    pub fn toggle_view(&self, mode: ViewMode) {
        self.state.lock().pager.toggle_view(mode);
    }

    /// Rows visible at the current page
    pub fn window(&self) -> Vec<E> {
        let state = self.state.lock();
        state.pager.window(state.store.items()).to_vec()
    }

    pub fn page_count(&self) -> usize {
        let state = self.state.lock();
        state.pager.page_count(state.store.len())
    }

    pub fn pages(&self) -> Vec<usize> {
        let state = self.state.lock();
        state.pager.pages(state.store.len())
    }

    pub fn current_page(&self) -> usize {
        self.state.lock().pager.current_page()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.lock().pager.view_mode()
    }

    pub fn is_fetching(&self) -> bool {
        self.state.lock().tracker.fetch_all_in_flight()
    }

    pub fn is_saving(&self) -> bool {
        self.state.lock().tracker.save_in_flight()
    }

    /// Rows whose delete is in flight
    pub fn deleting_ids(&self) -> Vec<i64> {
        let state = self.state.lock();
        state.tracker.deleting_ids(&state.store)
    }

    /// The visible notification, if any
    pub fn notification(&self) -> Option<Notification> {
        self.state.lock().notifications.visible().cloned()
    }

    pub fn dismiss_notification(&self) {
        self.state.lock().notifications.dismiss();
    }

    /// Auto-hide the notification once its display time has passed
    pub fn expire_notification(&self) -> bool {
        self.state
            .lock()
            .notifications
            .expire(self.notification_timeout)
    }

    pub fn snapshot(&self) -> Vec<E> {
        self.state.lock().store.snapshot()
    }

    pub fn len(&self) -> usize {
        self.state.lock().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().store.is_empty()
    }

    /// End the screen; later settlements are returned but not applied
    pub fn teardown(&self) {
        info!(entity = E::LABEL, "tearing down screen");
        self.lifetime.end();
    }
}
