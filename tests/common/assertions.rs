//! Custom test assertions
//!
//! Domain-specific checks for what a screen shows the user.

use batchdesk::Notification;

pub trait NotificationAssertions {
    /// Assert a successful notification with this title
    fn assert_success(&self, title: &str);

    /// Assert a failed notification with this title and message
    fn assert_failure(&self, title: &str, message: &str);
}

impl NotificationAssertions for Option<Notification> {
    fn assert_success(&self, title: &str) {
        let notification = self
            .as_ref()
            .unwrap_or_else(|| panic!("Expected a visible '{}' notification", title));
        assert_eq!(notification.title, title);
        assert!(
            notification.succeeded,
            "Expected '{}' to succeed, got failure: {}",
            title, notification.message
        );
    }

    fn assert_failure(&self, title: &str, message: &str) {
        let notification = self
            .as_ref()
            .unwrap_or_else(|| panic!("Expected a visible '{}' notification", title));
        assert_eq!(notification.title, title);
        assert!(!notification.succeeded, "Expected '{}' to fail", title);
        assert_eq!(notification.message, message);
    }
}
