//! Remote sync gateway
//!
//! The boundary between a list screen and the REST API. Each operation
//! returns an [`Outcome`]; nothing here returns an error to the caller.

pub mod client;
pub mod rest;

pub use client::{ApiClient, failure_from_body, normalize_base_url};
pub use rest::RestGateway;

use crate::core::models::Entity;
use crate::core::types::Outcome;
use async_trait::async_trait;

/// Fetch/create/update/delete for one entity type
#[async_trait]
pub trait Gateway<E: Entity>: Send + Sync {
    async fn fetch_all(&self) -> Outcome<Vec<E>>;

    async fn create(&self, draft: &E) -> Outcome<E>;

    async fn update(&self, draft: &E) -> Outcome<E>;

    /// Delete exactly the entity with this id
    async fn delete(&self, id: i64) -> Outcome<E>;
}
