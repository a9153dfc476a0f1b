//! Error types for batchdesk

mod helpers;
mod types;

pub use types::{BatchDeskError, Result};
