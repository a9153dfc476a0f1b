//! Authentication and session state
//!
//! The session context replaces browser local storage: it is loaded
//! explicitly, handed to the API client, and cleared on logout.

pub mod context;
pub mod service;
pub mod storage;

pub use context::{AuthSession, SessionContext, TOKEN_KEY, USER_DETAILS_KEY};
pub use service::AuthService;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};

use crate::config::SessionConfig;
use crate::utils::error::Result;
use std::sync::Arc;

/// Open the file-backed session named by the config and load it
pub fn open_session(config: &SessionConfig) -> Result<Arc<SessionContext>> {
    let context = SessionContext::new(Box::new(FileStorage::new(config.path())));
    context.load()?;
    Ok(Arc::new(context))
}

/// Session held only in memory, starting logged out
pub fn memory_session() -> Arc<SessionContext> {
    Arc::new(SessionContext::new(Box::new(MemoryStorage::new())))
}
