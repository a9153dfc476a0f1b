//! Entity models for the training API
//!
//! Every screen-managed entity implements [`Entity`], which carries its
//! identifier, its transient delete-loader flag, its REST endpoint and its
//! draft validation rules.

pub mod batch;
pub mod candidate;
pub mod enrollment;
pub mod session;
pub mod user;

pub use batch::Batch;
pub use candidate::Candidate;
pub use enrollment::Enrollment;
pub use session::Session;
pub use user::{Credentials, User};

use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Debug;

/// Read an explicit `null` as the field's default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// REST resource of one entity type, relative to the API base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Controller segment, e.g. `Batches`
    pub controller: &'static str,
    /// Suffix appended for fetch-all, e.g. `/GetAllEnrollment`
    pub list_path: &'static str,
}

impl Endpoint {
    pub const fn new(controller: &'static str) -> Self {
        Self {
            controller,
            list_path: "",
        }
    }

    pub const fn with_list_path(controller: &'static str, list_path: &'static str) -> Self {
        Self {
            controller,
            list_path,
        }
    }

    /// Path used for fetch-all
    pub fn list(&self) -> String {
        format!("{}{}", self.controller, self.list_path)
    }

    /// Path used for create
    pub fn collection(&self) -> String {
        self.controller.to_string()
    }

    /// Path used for update and delete
    pub fn item(&self, id: i64) -> String {
        format!("{}/{}", self.controller, id)
    }
}

/// An entity managed by a list screen
pub trait Entity:
    Clone + Default + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Human label used in notification titles, e.g. `Batch`
    const LABEL: &'static str;

    const ENDPOINT: Endpoint;

    /// Whether switching between table and card view returns to page 1
    const RESETS_PAGE_ON_VIEW_TOGGLE: bool = true;

    /// Identifier; `0` means not yet persisted
    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    fn is_delete_loader(&self) -> bool;

    fn set_delete_loader(&mut self, value: bool);

    /// Check the draft before it may be sent
    fn validate(&self) -> Result<()>;

    /// Normalize fields right before create/update is issued
    fn prepare_for_submit(&mut self) {}

    /// One-line description for listings
    fn summary(&self) -> String;

    fn is_persisted(&self) -> bool {
        self.id() > 0
    }
}
