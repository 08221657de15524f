//! Messages sent back to the event loop by background tasks

use crate::service::SubmissionReceipt;

#[derive(Debug)]
pub enum AppEvent {
    /// The autosave quiet period has elapsed
    AutosaveDue,
    SubmissionFinished(Result<SubmissionReceipt, String>),
    EmailFinished(Result<String, String>),
}
