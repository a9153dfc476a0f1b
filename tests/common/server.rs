//! Mock training API
//!
//! Wraps a `wiremock` server and hands out clients pointed at it.

use batchdesk::auth::memory_session;
use batchdesk::config::ApiConfig;
use batchdesk::{ApiClient, SessionContext};
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path prefix the mock serves the API under
pub const API_PREFIX: &str = "/api";

pub struct MockApi {
    pub server: MockServer,
    pub session: Arc<SessionContext>,
}

impl MockApi {
    /// Fresh server with a logged-out in-memory session
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
            session: memory_session(),
        }
    }

    /// Same, with a token already saved
    pub async fn logged_in(token: &str) -> Self {
        let api = Self::start().await;
        api.session
            .save(token, None)
            .expect("memory session accepts a token");
        api
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig {
            base_url: format!("{}{}", self.server.uri(), API_PREFIX),
            ..ApiConfig::default()
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.config(), self.session.clone()).expect("mock URL is valid")
    }

    /// Mount a JSON response for `verb` on `{prefix}/{route}`
    pub async fn respond(&self, verb: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(format!("{}/{}", API_PREFIX, route)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Like `respond`, but the mock fails verification unless hit `times` times
    pub async fn expect(&self, verb: &str, route: &str, times: u64, body: Value) {
        Mock::given(method(verb))
            .and(path(format!("{}/{}", API_PREFIX, route)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(times)
            .mount(&self.server)
            .await;
    }
}

/// Standard success envelope
pub fn ok(message: &str, data: Value) -> Value {
    json!({ "result": true, "message": message, "data": data })
}

/// Standard rejection envelope
pub fn rejected(message: &str) -> Value {
    json!({ "result": false, "message": message, "data": null })
}
