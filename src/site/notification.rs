//! Transient notifications ("toasts").
//!
//! At most one notification is visible. Showing a new one replaces the
//! current one, and each expires [`NOTIFICATION_TTL`] after it appeared.

use std::time::{Duration, Instant};

/// How long a notification stays up.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    shown_at: Instant,
}

impl Notification {
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }
}

/// Holds the currently visible notification.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    current: Option<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Show a notification, replacing any visible one.
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        self.current = Some(Notification {
            kind,
            message: message.into(),
            shown_at: now,
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Drop the notification if it has been up for the full TTL.
    ///
    /// Returns `true` when something was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= NOTIFICATION_TTL);
        if expired {
            self.current = None;
        }
        expired
    }
}
