//! REST implementation of the gateway

use super::{ApiClient, Gateway};
use crate::core::models::Entity;
use crate::core::types::Outcome;
use async_trait::async_trait;
use serde_json::Value;
use std::marker::PhantomData;
use tracing::{info, warn};

/// Gateway that maps operations onto `E::ENDPOINT`
///
/// Single-entity payloads are decoded leniently: a `data` field of an
/// unexpected shape yields no payload instead of failing a call the server
/// reported as successful.
#[derive(Debug, Clone)]
pub struct RestGateway<E: Entity> {
    client: ApiClient,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> RestGateway<E> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    fn decode_entity(outcome: Outcome<Value>) -> Outcome<E> {
        outcome.and_then_payload(|value| match serde_json::from_value::<E>(value) {
            Ok(entity) => Some(entity),
            Err(e) => {
                warn!(entity = E::LABEL, "Ignoring unexpected payload: {}", e);
                None
            }
        })
    }
}

#[async_trait]
impl<E: Entity> Gateway<E> for RestGateway<E> {
    async fn fetch_all(&self) -> Outcome<Vec<E>> {
        let outcome = self.client.get(&E::ENDPOINT.list()).await;
        info!(
            entity = E::LABEL,
            succeeded = outcome.succeeded,
            "fetch-all settled"
        );
        outcome
    }

    async fn create(&self, draft: &E) -> Outcome<E> {
        let outcome = self.client.post(&E::ENDPOINT.collection(), draft).await;
        info!(entity = E::LABEL, succeeded = outcome.succeeded, "create settled");
        Self::decode_entity(outcome)
    }

    async fn update(&self, draft: &E) -> Outcome<E> {
        let outcome = self.client.put(&E::ENDPOINT.item(draft.id()), draft).await;
        info!(
            entity = E::LABEL,
            id = draft.id(),
            succeeded = outcome.succeeded,
            "update settled"
        );
        Self::decode_entity(outcome)
    }

    async fn delete(&self, id: i64) -> Outcome<E> {
        let outcome = self.client.delete(&E::ENDPOINT.item(id)).await;
        info!(entity = E::LABEL, id, succeeded = outcome.succeeded, "delete settled");
        Self::decode_entity(outcome)
    }
}
