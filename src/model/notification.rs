//! Transient status messages (toasts)

use std::time::Duration;
use tokio::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// The single message on screen. A newer one replaces it outright.
#[derive(Clone, Debug)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    shown_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, visible_for: Duration) -> bool {
        self.shown_at.elapsed() >= visible_for
    }
}
