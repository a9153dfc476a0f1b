//! Response envelope returned by the training API
//!
//! Success bodies look like `{ "result": true, "message": "...", "data": ... }`.
//! Error bodies carry the same `message`/`result` pair, either at the top
//! level or nested under an `error` object.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Common API response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub result: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

fn error_object(body: &Value) -> &Value {
    match body.get("error") {
        Some(nested) if nested.is_object() => nested,
        _ => body,
    }
}

/// Server-provided message from an error body, if any
pub fn error_message(body: &Value) -> Option<String> {
    error_object(body)
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

/// Server-provided `result` flag from an error body, if any
pub fn error_result(body: &Value) -> Option<bool> {
    error_object(body).get("result").and_then(Value::as_bool)
}
