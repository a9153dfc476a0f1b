//! Configuration management for batchdesk
//!
//! Configuration comes from a YAML file, from environment variables (with
//! `.env` support), or both; environment values win.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{BatchDeskError, Result};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable names
pub const ENV_API_URL: &str = "BATCHDESK_API_URL";
pub const ENV_TIMEOUT_MS: &str = "BATCHDESK_TIMEOUT_MS";
pub const ENV_PAGE_SIZE: &str = "BATCHDESK_PAGE_SIZE";
pub const ENV_SESSION_FILE: &str = "BATCHDESK_SESSION_FILE";
pub const ENV_NOTIFICATION_TIMEOUT_MS: &str = "BATCHDESK_NOTIFICATION_TIMEOUT_MS";

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub batchdesk: BatchDeskConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self {
            batchdesk: Self::read_file(path.as_ref()).await?,
        };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    async fn read_file(path: &Path) -> Result<BatchDeskConfig> {
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| BatchDeskError::Config(format!("Failed to read config file: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| BatchDeskError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let config = Self {
            batchdesk: Self::env_overrides(BatchDeskConfig::default())?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional file, then apply environment overrides
    ///
    /// Validation runs once, on the merged result.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::read_file(path).await?,
            None => BatchDeskConfig::default(),
        };
        dotenvy::dotenv().ok();
        let config = Self {
            batchdesk: Self::env_overrides(base)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn env_overrides(mut config: BatchDeskConfig) -> Result<BatchDeskConfig> {
        if let Ok(url) = env::var(ENV_API_URL) {
            config.api.base_url = url;
        }
        if let Ok(timeout) = env::var(ENV_TIMEOUT_MS) {
            config.api.timeout_ms = timeout
                .parse()
                .map_err(|e| BatchDeskError::Config(format!("Invalid timeout: {}", e)))?;
        }
        if let Ok(page_size) = env::var(ENV_PAGE_SIZE) {
            config.ui.page_size = page_size
                .parse()
                .map_err(|e| BatchDeskError::Config(format!("Invalid page size: {}", e)))?;
        }
        if let Ok(timeout) = env::var(ENV_NOTIFICATION_TIMEOUT_MS) {
            config.ui.notification_timeout_ms = timeout.parse().map_err(|e| {
                BatchDeskError::Config(format!("Invalid notification timeout: {}", e))
            })?;
        }
        if let Ok(file) = env::var(ENV_SESSION_FILE) {
            config.session.file = file;
        }
        Ok(config)
    }

    pub fn api(&self) -> &ApiConfig {
        &self.batchdesk.api
    }

    pub fn ui(&self) -> &UiConfig {
        &self.batchdesk.ui
    }

    pub fn session(&self) -> &SessionConfig {
        &self.batchdesk.session
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(&self.batchdesk)
    }
}
