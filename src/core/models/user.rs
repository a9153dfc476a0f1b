//! Logged-in user and login credentials

use super::null_as_default;
use crate::utils::error::Result;
use crate::utils::validation::FieldValidator;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User details returned by login and kept in the session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub user_id: i64,
    #[serde(alias = "fullName", deserialize_with = "null_as_default")]
    pub user_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    /// Fields this client does not model, kept so the blob round-trips
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn display_name(&self) -> &str {
        if self.user_name.is_empty() {
            &self.email
        } else {
            &self.user_name
        }
    }
}

/// Login form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new<E: Into<String>, P: Into<String>>(email: E, password: P) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        FieldValidator::new()
            .email("Email", &self.email)
            .min_len("Password", &self.password, 5)
            .finish()
    }
}
