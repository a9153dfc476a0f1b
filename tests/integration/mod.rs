//! Integration tests for batchdesk
//!
//! These tests drive the public API against a mock server over real HTTP.

pub mod auth_tests;
pub mod config_tests;
pub mod screen_tests;
