//! Configuration data models

pub mod api;
pub mod session;
pub mod ui;

pub use api::*;
pub use session::*;
pub use ui::*;

use serde::{Deserialize, Serialize};

/// Default API base URL
pub fn default_base_url() -> String {
    "http://localhost:5000/api/".to_string()
}

/// Default request timeout in milliseconds
pub fn default_timeout_ms() -> u64 {
    30_000
}

pub fn default_user_agent() -> String {
    format!("batchdesk/{}", env!("CARGO_PKG_VERSION"))
}

/// Rows per page
pub fn default_page_size() -> usize {
    10
}

/// How long a notification stays visible
pub fn default_notification_timeout_ms() -> u64 {
    5_000
}

pub fn default_session_file() -> String {
    ".batchdesk/session.json".to_string()
}

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchDeskConfig {
    /// REST API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// List screen settings
    #[serde(default)]
    pub ui: UiConfig,
    /// Session persistence settings
    #[serde(default)]
    pub session: SessionConfig,
}
