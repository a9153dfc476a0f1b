//! List screen configuration

use super::*;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Rows per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Auto-dismiss delay for notifications, in milliseconds
    #[serde(default = "default_notification_timeout_ms")]
    pub notification_timeout_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            notification_timeout_ms: default_notification_timeout_ms(),
        }
    }
}

impl UiConfig {
    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }
}
