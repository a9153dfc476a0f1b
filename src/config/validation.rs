//! Configuration validation

use super::models::*;
use crate::utils::error::{BatchDeskError, Result};
use tracing::debug;
use url::Url;

/// Validation for configuration sections
pub trait Validate {
    fn validate(&self) -> std::result::Result<(), String>;
}

impl Validate for ApiConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("base_url has invalid URL format: {}", e))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(format!(
                    "base_url must use http:// or https:// scheme, got: {}",
                    scheme
                ));
            }
        }

        if self.timeout_ms == 0 {
            return Err("timeout_ms must be greater than 0".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("user_agent cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for UiConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.page_size == 0 {
            return Err("page_size must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.file.trim().is_empty() {
            return Err("session file path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for BatchDeskConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        debug!("Validating configuration");
        self.api.validate().map_err(|e| format!("api: {}", e))?;
        self.ui.validate().map_err(|e| format!("ui: {}", e))?;
        self.session
            .validate()
            .map_err(|e| format!("session: {}", e))?;
        Ok(())
    }
}

/// Validate and convert to the crate error type
pub fn validate_config(config: &BatchDeskConfig) -> Result<()> {
    config.validate().map_err(BatchDeskError::Config)
}
