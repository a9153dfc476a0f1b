//! Latest operation outcome shown to the user

use std::time::{Duration, Instant};

/// One titled message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub succeeded: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationChannel {
    current: Option<Notification>,
    visible: bool,
    shown_at: Option<Instant>,
}

impl NotificationChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current notification and make it visible
    pub fn show<T: Into<String>, M: Into<String>>(&mut self, title: T, message: M, succeeded: bool) {
        self.current = Some(Notification {
            title: title.into(),
            message: message.into(),
            succeeded,
        });
        self.visible = true;
        self.shown_at = Some(Instant::now());
    }

    /// Hide the notification; calling it while hidden does nothing
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.shown_at = None;
    }

    /// Hide once visible for at least `timeout`; returns whether it hid
    pub fn expire(&mut self, timeout: Duration) -> bool {
        match self.shown_at {
            Some(shown_at) if self.visible && shown_at.elapsed() >= timeout => {
                self.dismiss();
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The visible notification, if any
    pub fn visible(&self) -> Option<&Notification> {
        if self.visible {
            self.current.as_ref()
        } else {
            None
        }
    }
}
