//! Normalized result of one remote operation

use super::envelope::ApiEnvelope;
use serde::{Deserialize, Serialize};

/// Message used when the server gives no usable one
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Success or failure of a remote call, never an error value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome<T> {
    pub succeeded: bool,
    pub message: String,
    pub payload: Option<T>,
}

impl<T> Outcome<T> {
    pub fn success<S: Into<String>>(message: S, payload: Option<T>) -> Self {
        Self {
            succeeded: true,
            message: message.into(),
            payload,
        }
    }

    pub fn failure<S: Into<String>>(message: S) -> Self {
        Self {
            succeeded: false,
            message: message.into(),
            payload: None,
        }
    }

    /// Failure carrying the generic message
    pub fn generic_failure() -> Self {
        Self::failure(GENERIC_FAILURE_MESSAGE)
    }

    /// `succeeded` mirrors the envelope's `result` flag
    pub fn from_envelope(envelope: ApiEnvelope<T>) -> Self {
        Self {
            succeeded: envelope.result,
            message: envelope.message,
            payload: envelope.data,
        }
    }

    /// Convert the payload; a conversion returning `None` drops it
    pub fn and_then_payload<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        Outcome {
            succeeded: self.succeeded,
            message: self.message,
            payload: self.payload.and_then(f),
        }
    }

    /// Drop the payload, keeping status and message
    pub fn discard_payload<U>(self) -> Outcome<U> {
        Outcome {
            succeeded: self.succeeded,
            message: self.message,
            payload: None,
        }
    }

    /// Message to display, falling back to the generic text when blank
    pub fn display_message(&self) -> &str {
        if self.message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE
        } else {
            &self.message
        }
    }
}
