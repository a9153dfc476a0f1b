//! HTTP client for the training API
//!
//! Every call settles into a value: transport and server failures become
//! failure [`Outcome`]s and are logged, never returned as errors.

use crate::auth::SessionContext;
use crate::config::ApiConfig;
use crate::core::types::{
    ApiEnvelope, GENERIC_FAILURE_MESSAGE, Outcome, error_message, error_result,
};
use crate::utils::error::Result;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};
use url::Url;

/// Shared HTTP client with base URL and bearer-token injection
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: Arc<SessionContext>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Arc<SessionContext>) -> Result<Self> {
        let http = ClientBuilder::new()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url: normalize_base_url(&config.base_url)?,
            session,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    /// Resolve a controller path against the base URL
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Outcome<T> {
        self.send_envelope::<T, ()>(Method::GET, path, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Outcome<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_envelope(Method::POST, path, Some(body)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Outcome<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_envelope(Method::PUT, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Outcome<T> {
        self.send_envelope::<T, ()>(Method::DELETE, path, None).await
    }

    /// Send and read the standard `{result, message, data}` envelope
    pub async fn send_envelope<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Outcome<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        match self.send_as::<ApiEnvelope<T>, B>(method, path, body).await {
            Ok(envelope) => Outcome::from_envelope(envelope),
            Err(failure) => failure.discard_payload(),
        }
    }

    /// Send and decode a 2xx body as `R`; anything else becomes a failure outcome
    pub async fn send_as<R, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> std::result::Result<R, Outcome<()>>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path).map_err(|e| {
            error!("Cannot build URL for {}: {}", path, e);
            Outcome::generic_failure()
        })?;

        debug!(%method, %url, "sending request");

        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(token) = self.session.token() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => request = request.header(AUTHORIZATION, value),
                Err(e) => warn!("Stored token is not a valid header value: {}", e),
            }
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!(%method, %url, "Request failed: {}", e);
                return Err(Outcome::generic_failure());
            }
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(%method, %url, %status, "Failed to read response body: {}", e);
                return Err(Outcome::generic_failure());
            }
        };

        if status.is_success() {
            return serde_json::from_slice::<R>(&bytes).map_err(|e| {
                error!(%method, %url, %status, "Malformed response body: {}", e);
                Outcome::generic_failure()
            });
        }

        let body: Option<Value> = serde_json::from_slice(&bytes).ok();
        log_failure(status, &method, &url, body.as_ref());
        Err(failure_from_body(body.as_ref()))
    }
}

/// Ensure the base URL ends with `/` so joins append instead of replace
pub fn normalize_base_url(base: &str) -> Result<Url> {
    let trimmed = base.trim();
    if trimmed.ends_with('/') {
        Ok(Url::parse(trimmed)?)
    } else {
        Ok(Url::parse(&format!("{}/", trimmed))?)
    }
}

/// Build a failure outcome from a non-2xx body
///
/// A server message is used when present; `succeeded` is always false.
pub fn failure_from_body(body: Option<&Value>) -> Outcome<()> {
    let message = body
        .and_then(error_message)
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
    Outcome::failure(message)
}

fn log_failure(status: StatusCode, method: &Method, url: &Url, body: Option<&Value>) {
    let message = body.and_then(error_message).unwrap_or_default();
    let server_result = body.and_then(error_result);
    match status {
        StatusCode::BAD_REQUEST
        | StatusCode::UNAUTHORIZED
        | StatusCode::NOT_FOUND
        | StatusCode::CONFLICT
        | StatusCode::INTERNAL_SERVER_ERROR => {
            warn!(%method, %url, ?server_result, "Error status code is {} and its message is '{}'", status.as_u16(), message);
        }
        _ => {
            warn!(%method, %url, ?server_result, "Unexpected status {} with message '{}'", status.as_u16(), message);
        }
    }
}
