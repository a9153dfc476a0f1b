//! Client-side list state
//!
//! The pieces every entity screen is built from: the collection, its pager,
//! the loading flags, the notification channel and the form draft.

pub mod collection;
pub mod draft;
pub mod notification;
pub mod pager;
pub mod tracker;

pub use collection::CollectionStore;
pub use draft::FormDraft;
pub use notification::{Notification, NotificationChannel};
pub use pager::{Pager, ViewMode};
pub use tracker::{OperationKind, OperationTracker};
