//! Core list-state machinery
//!
//! Entity models, the per-screen stores, the REST gateway and the generic
//! list screen that combines them.

pub mod gateway;
pub mod models;
pub mod screen;
pub mod store;
pub mod types;

pub use gateway::{ApiClient, Gateway, RestGateway};
pub use screen::{
    BatchScreen, CandidateScreen, EnrollmentScreen, ListScreen, Lookup, ScreenLifetime,
    SessionScreen,
};
pub use types::Outcome;
