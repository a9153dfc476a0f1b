//! Helper functions for creating specific error types

use super::types::BatchDeskError;

impl BatchDeskError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn session<S: Into<String>>(message: S) -> Self {
        Self::Session(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(vec![message.into()])
    }

    /// Whether the error came from local validation rather than IO or config
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NoDraft)
    }

    /// Field messages carried by a validation error
    pub fn validation_messages(&self) -> &[String] {
        match self {
            Self::Validation(messages) => messages,
            _ => &[],
        }
    }
}
