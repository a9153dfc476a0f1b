//! Session persistence configuration

use super::*;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// JSON file holding the auth token and user details
    #[serde(default = "default_session_file")]
    pub file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: default_session_file(),
        }
    }
}

impl SessionConfig {
    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.file)
    }
}
