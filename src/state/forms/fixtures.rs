//! Shared test fixtures

use super::field::{FieldId, FieldValue, FileRef};
use super::options::NO;
use super::snapshot::FormSnapshot;
use crate::error::FormResult;

pub fn text(s: &str) -> FieldValue {
    FieldValue::Text(s.to_string())
}

pub fn choice(s: &str) -> FieldValue {
    FieldValue::Choice(s.to_string())
}

pub fn pdf(name: &str, size: u64) -> FieldValue {
    FieldValue::File(Some(FileRef::new(name, size, "application/pdf")))
}

impl FormSnapshot {
    /// Builder-style `set`
    pub fn with(mut self, field: FieldId, value: FieldValue) -> FormResult<Self> {
        self.set(field, value)?;
        Ok(self)
    }
}

/// A snapshot that passes every rule, with no conditional field opened
pub fn valid_snapshot() -> FormSnapshot {
    let mut snapshot = FormSnapshot::new();
    let values = [
        (FieldId::Address, text("12 Harvard Yard, Cambridge")),
        (FieldId::Phone, text("+1 (555) 123-4567")),
        (FieldId::Nationality, choice("Korean")),
        (FieldId::PreferredLanguage, choice("English")),
        (FieldId::HasLinkedIn, choice(NO)),
        (FieldId::CvFile, pdf("cv.pdf", 2048)),
        (FieldId::ExperienceLevel, choice("graduate")),
        (FieldId::CurrentInstitution, choice("MIT")),
    ];
    for (field, value) in values {
        snapshot
            .set(field, value)
            .unwrap_or_else(|e| panic!("fixture value for {field}: {e}"));
    }
    snapshot
}
