//! Submission record, export and confirmation statistics

mod export;
mod record;

pub use export::ExportDocument;
pub use record::SubmissionRecord;
