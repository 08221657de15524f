//! Application state definitions

use super::forms::{FormSnapshot, IntakeForm};
use super::notification::{Notification, NotificationKind};
use crate::service::SubmissionReceipt;
use crate::summary::SubmissionRecord;
use std::time::{Duration, Instant};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    /// Confirmation screen after a successful submission
    Summary,
}

/// Autosave indicator shown in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    /// A save is scheduled or running
    Saving,
    Saved,
    Error,
}

impl SaveStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Saving => "Saving...",
            Self::Saved => "Draft saved",
            Self::Error => "Save failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmailStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

/// A submission handed to the service and not yet answered
#[derive(Debug, Clone)]
pub struct InFlight {
    /// Form values captured when submit was pressed
    pub snapshot: FormSnapshot,
    pub record: SubmissionRecord,
    /// Whether a confirmation email was requested at submit time
    pub send_copy: bool,
}

/// A submission accepted by the service
#[derive(Debug, Clone)]
pub struct Submitted {
    pub snapshot: FormSnapshot,
    pub record: SubmissionRecord,
    pub receipt: SubmissionReceipt,
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: IntakeForm,
    pub save_status: SaveStatus,
    pub last_saved_at: Option<i64>,
    pub notification: Option<Notification>,

    // Submission
    pub submitting: bool,
    pub in_flight: Option<InFlight>,
    pub submitted: Option<Submitted>,
    pub email_status: EmailStatus,
}

impl AppState {
    /// Replace any current notification
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration: Duration,
    ) {
        let notification = Notification::new(message, kind, duration);
        tracing::debug!(
            id = %notification.id,
            message = %notification.message,
            ?kind,
            "Notification"
        );
        self.notification = Some(notification);
    }

    /// Drop the notification once its time is up
    pub fn expire_notification(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired_at(now))
        {
            self.notification = None;
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Back to a blank form on the form view
    pub fn start_over(&mut self) {
        *self = Self {
            notification: self.notification.take(),
            ..Self::default()
        };
    }
}
