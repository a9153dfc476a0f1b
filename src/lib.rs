//! # batchdesk
//!
//! Client-side list state for a training-batch administration API.
//!
//! ## Features
//!
//! - **One generic list screen**: collection store, pager, operation tracker,
//!   form draft and notification channel behind a single `ListScreen<E, G>`
//! - **Four entities**: batches, candidates, enrollments and sessions
//! - **REST gateway**: every call settles into an [`Outcome`], never an error
//! - **Explicit session**: token and user details live in a [`SessionContext`]
//!   backed by a JSON file instead of ambient global state
//! - **Teardown safety**: results that settle after a screen ends are ignored
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use batchdesk::{ApiClient, BatchScreen, Config, RestGateway, auth};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(None).await?;
//!     let session = auth::open_session(config.session())?;
//!     let client = ApiClient::new(config.api(), session)?;
//!
//!     let screen: BatchScreen = BatchScreen::new(RestGateway::new(client), config.ui());
//!     let outcome = screen.mount().await;
//!     if outcome.succeeded {
//!         for batch in screen.window() {
//!             println!("{}", batch.batch_name);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use auth::{AuthService, SessionContext};
pub use config::Config;
pub use core::gateway::{ApiClient, Gateway, RestGateway};
pub use core::models::{Batch, Candidate, Credentials, Enrollment, Entity, Session, User};
pub use core::screen::{
    BatchScreen, CandidateScreen, EnrollmentScreen, ListScreen, Lookup, SessionScreen,
};
pub use core::store::{Notification, ViewMode};
pub use core::types::Outcome;
pub use utils::error::{BatchDeskError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
