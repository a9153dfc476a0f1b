//! Common test utilities for batchdesk
//!
//! - Entity factories with valid defaults
//! - A mock API server with envelope helpers
//! - Notification assertions

pub mod assertions;
pub mod fixtures;
pub mod server;

pub use fixtures::{BatchFactory, CandidateFactory, EnrollmentFactory, SessionFactory};
pub use server::MockApi;
