//! Field validation for drafts and credentials

use crate::utils::error::{BatchDeskError, Result};
use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+(\.[A-Za-z]{2,})?$")
        .expect("email pattern is valid")
});

/// Collects field errors so every failing field is reported at once
#[derive(Debug, Default)]
pub struct FieldValidator {
    errors: Vec<String>,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(format!("{} is required", field));
        }
        self
    }

    pub fn required_id(&mut self, field: &str, value: Option<i64>) -> &mut Self {
        if !matches!(value, Some(id) if id > 0) {
            self.errors.push(format!("{} is required", field));
        }
        self
    }

    pub fn max_len(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        if value.chars().count() > max {
            self.errors
                .push(format!("{} cannot exceed {} characters", field, max));
        }
        self
    }

    pub fn min_len(&mut self, field: &str, value: &str, min: usize) -> &mut Self {
        if value.chars().count() < min {
            self.errors
                .push(format!("{} must be at least {} characters", field, min));
        }
        self
    }

    pub fn exact_len(&mut self, field: &str, value: &str, len: usize) -> &mut Self {
        if value.chars().count() != len {
            self.errors
                .push(format!("{} must be exactly {} characters", field, len));
        }
        self
    }

    pub fn min_value(&mut self, field: &str, value: i64, min: i64) -> &mut Self {
        if value < min {
            self.errors
                .push(format!("{} must be at least {}", field, min));
        }
        self
    }

    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(format!("{} is required", field));
        } else if !EMAIL_PATTERN.is_match(value) {
            self.errors.push(format!("{} must be a valid email", field));
        }
        self
    }

    /// Required date in either `YYYY-MM-DD` or RFC 3339 form
    pub fn date(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(format!("{} is required", field));
        } else if parse_date(value).is_none() {
            self.errors.push(format!("{} must be a valid date", field));
        }
        self
    }

    pub fn finish(&mut self) -> Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(BatchDeskError::Validation(std::mem::take(&mut self.errors)))
        }
    }
}

/// Parse the date formats the API emits
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }
    // Server timestamps without an offset, e.g. 2026-01-01T00:00:00
    value
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}
