//! Screen lifetime flag

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "still mounted" flag
///
/// Completions check it after every await; once ended they must not touch
/// screen state. Ending it does not cancel the network call itself.
#[derive(Debug, Clone)]
pub struct ScreenLifetime {
    active: Arc<AtomicBool>,
}

impl Default for ScreenLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenLifetime {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn end(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}
