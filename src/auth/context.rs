//! Explicit session context
//!
//! Holds the auth token and user details in memory and mirrors them to a
//! [`KeyValueStorage`]. Screens and the API client receive it explicitly.

use super::storage::KeyValueStorage;
use crate::core::models::User;
use crate::utils::error::{BatchDeskError, Result};
use parking_lot::RwLock;
use std::fmt;
use tracing::{debug, info, warn};

/// Storage key for the bearer token
pub const TOKEN_KEY: &str = "sessionRecordingAppToken";
/// Storage key for the serialized user details
pub const USER_DETAILS_KEY: &str = "sessionRecordingUserData";

/// Token plus the user it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub user: Option<User>,
}

pub struct SessionContext {
    storage: Box<dyn KeyValueStorage>,
    state: RwLock<Option<AuthSession>>,
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}

impl SessionContext {
    /// Empty context; call [`load`](Self::load) to read persisted state
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            state: RwLock::new(None),
        }
    }

    /// Read token and user details from storage
    ///
    /// A token without readable user details still counts as logged in.
    pub fn load(&self) -> Result<Option<AuthSession>> {
        let token = self.storage.get(TOKEN_KEY)?;
        let session = match token {
            Some(token) => {
                let user = match self.storage.get(USER_DETAILS_KEY)? {
                    Some(raw) => match serde_json::from_str::<User>(&raw) {
                        Ok(user) => Some(user),
                        Err(e) => {
                            warn!("Ignoring unreadable user details: {}", e);
                            None
                        }
                    },
                    None => None,
                };
                Some(AuthSession { token, user })
            }
            None => None,
        };
        debug!(logged_in = session.is_some(), "session loaded");
        *self.state.write() = session.clone();
        Ok(session)
    }

    /// Persist and activate a new session
    pub fn save(&self, token: &str, user: Option<&User>) -> Result<()> {
        if token.trim().is_empty() {
            return Err(BatchDeskError::session("Refusing to save an empty token"));
        }
        self.storage.set(TOKEN_KEY, token)?;
        match user {
            Some(user) => {
                let raw = serde_json::to_string(user)?;
                self.storage.set(USER_DETAILS_KEY, &raw)?;
            }
            None => self.storage.remove(USER_DETAILS_KEY)?,
        }
        *self.state.write() = Some(AuthSession {
            token: token.to_string(),
            user: user.cloned(),
        });
        info!("Session saved");
        Ok(())
    }

    /// Forget the session in memory and in storage
    pub fn clear(&self) -> Result<()> {
        *self.state.write() = None;
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(USER_DETAILS_KEY)?;
        info!("Session cleared");
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.state.read().as_ref().map(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().as_ref().and_then(|s| s.user.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.read().is_some()
    }
}
