//! Submission and email backend

mod simulated;
mod traits;

pub use simulated::SimulatedService;
#[cfg(test)]
pub use traits::MockSubmissionService;
pub use traits::{EmailMessage, SubmissionReceipt, SubmissionService};
