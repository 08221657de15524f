//! Transient user-facing notifications

use std::time::{Duration, Instant};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

/// A message shown for a fixed time, then dropped
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Notification {
    /// Default display time
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

    pub fn new(message: impl Into<String>, kind: NotificationKind, duration: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            shown_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }
}
