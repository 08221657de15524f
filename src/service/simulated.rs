//! In-process backend that only waits and acknowledges

use super::traits::{EmailMessage, SubmissionReceipt, SubmissionService};
use crate::summary::SubmissionRecord;
use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use uuid::Uuid;

/// Service that accepts everything after an artificial delay
#[derive(Debug, Clone)]
pub struct SimulatedService {
    submission_delay: Duration,
    email_delay: Duration,
}

impl SimulatedService {
    pub fn new(submission_delay: Duration, email_delay: Duration) -> Self {
        Self {
            submission_delay,
            email_delay,
        }
    }
}

#[async_trait]
impl SubmissionService for SimulatedService {
    async fn submit(&self, record: SubmissionRecord) -> Result<SubmissionReceipt> {
        tracing::info!(
            submitted_at = %record.submission_date,
            "Submitting application"
        );
        tokio::time::sleep(self.submission_delay).await;
        let receipt = SubmissionReceipt {
            id: Uuid::new_v4().to_string(),
            received_at: Utc::now(),
        };
        tracing::info!(id = %receipt.id, "Application accepted");
        Ok(receipt)
    }

    async fn send_email(&self, message: EmailMessage) -> Result<String> {
        if message.to.trim().is_empty() {
            bail!("no recipient address");
        }
        tracing::info!(to = %message.to, subject = %message.subject, "Sending email");
        tokio::time::sleep(self.email_delay).await;
        let id = format!("msg_{}", Utc::now().timestamp_millis());
        tracing::debug!(%id, "Email sent");
        Ok(id)
    }
}
