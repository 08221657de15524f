//! Trait abstraction for the submission backend to enable mocking in tests

use crate::summary::SubmissionRecord;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Subject line of the confirmation email
pub const CONFIRMATION_SUBJECT: &str = "HPAIR Application Confirmation";

/// Acknowledgement returned for an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub id: String,
    pub received_at: DateTime<Utc>,
}

/// A confirmation email carrying the submitted data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub data: SubmissionRecord,
}

impl EmailMessage {
    pub fn confirmation(record: &SubmissionRecord) -> Self {
        Self {
            to: record.email.clone(),
            subject: CONFIRMATION_SUBJECT.to_string(),
            data: record.clone(),
        }
    }
}

/// Backend operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Submit an application
    async fn submit(&self, record: SubmissionRecord) -> Result<SubmissionReceipt>;

    /// Send an email, returning the message id
    async fn send_email(&self, message: EmailMessage) -> Result<String>;
}
