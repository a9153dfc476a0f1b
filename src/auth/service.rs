//! Login and logout against the training API

use super::context::SessionContext;
use crate::core::gateway::ApiClient;
use crate::core::models::{Credentials, User};
use crate::core::types::Outcome;
use crate::utils::error::Result;
use reqwest::Method;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

const LOGIN_PATH: &str = "BatchUser/login";

/// Body of a login response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoginResponse {
    result: bool,
    message: String,
    token: Option<String>,
    data: Option<User>,
}

/// Authentication service
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
    session: Arc<SessionContext>,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        let session = client.session().clone();
        Self { client, session }
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    /// Log in and persist the session on success
    ///
    /// Invalid credentials return a validation error without a request.
    /// Server and transport failures come back as a failure outcome.
    pub async fn login(&self, credentials: &Credentials) -> Result<Outcome<User>> {
        credentials.validate()?;

        let response = match self
            .client
            .send_as::<LoginResponse, Credentials>(Method::POST, LOGIN_PATH, Some(credentials))
            .await
        {
            Ok(response) => response,
            Err(failure) => return Ok(failure.discard_payload()),
        };

        if !response.result {
            warn!("Login rejected: {}", response.message);
            return Ok(Outcome::failure(response.message));
        }

        let token = match response.token.filter(|t| !t.trim().is_empty()) {
            Some(token) => token,
            None => {
                warn!("Login succeeded without a token");
                return Ok(Outcome::generic_failure());
            }
        };

        self.session.save(&token, response.data.as_ref())?;
        info!(email = %credentials.email, "Logged in");
        Ok(Outcome::success(response.message, response.data))
    }

    pub fn logout(&self) -> Result<()> {
        self.session.clear()?;
        info!("Logged out");
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }
}
