//! Utility modules for batchdesk
//!
//! - **error**: crate error type and result alias
//! - **logging**: tracing subscriber setup
//! - **validation**: field checks shared by drafts and credentials

pub mod error;
pub mod logging;
pub mod validation;

pub use error::{BatchDeskError, Result};
pub use logging::{LogFormat, init_logging};
pub use validation::{FieldValidator, parse_date};

use chrono::Utc;

/// Today's date as `YYYY-MM-DD`
pub fn today_iso() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Truncate string to specified length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
