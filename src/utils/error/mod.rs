//! Error handling utilities
//!
//! Gateway failures never surface here: they are normalized into
//! [`Outcome`](crate::core::types::Outcome) values. This error type covers
//! configuration, local storage, draft validation and session problems.

pub mod error;

pub use error::*;
