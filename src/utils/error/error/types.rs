//! Core error type definitions

use thiserror::Error;

/// Result type alias for batchdesk
pub type Result<T> = std::result::Result<T, BatchDeskError>;

/// Main error type for batchdesk
#[derive(Error, Debug)]
pub enum BatchDeskError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// URL parsing errors
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// HTTP client construction errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Draft or credential validation errors, one message per failing field
    #[error("Validation error: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Save requested with no active draft
    #[error("No draft is open")]
    NoDraft,

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Session storage errors
    #[error("Session error: {0}")]
    Session(String),
}
