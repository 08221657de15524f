//! Per-field validation rules
//!
//! Every rule is a pure function of the value under test and the full
//! snapshot. Conditional rules read their gating field from the snapshot and
//! report valid whenever the gate is closed.

use super::field::{FieldId, FieldValue};
use super::options::{OTHER_INSTITUTION, YES};
use super::snapshot::FormSnapshot;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

// ─── Cached patterns ────────────────────────────────────────────────────────

static PHONE_SEPARATORS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s()-]").expect("phone separator pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("phone pattern"));

static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(www\.)?linkedin\.com/(in|pub|company)/.+").expect("linkedin pattern")
});

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern"));

// ─── Limits ─────────────────────────────────────────────────────────────────

const MIB: u64 = 1024 * 1024;

pub const ADDRESS_MIN_CHARS: usize = 8;
pub const WORK_EXPERIENCE_MIN_CHARS: usize = 20;
pub const CV_MAX_BYTES: u64 = 10 * MIB;
pub const PORTFOLIO_MAX_BYTES: u64 = 20 * MIB;

pub const CV_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Minimum lengths are measured in UTF-16 code units, so an emoji counts twice
fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Validate one field. Returns the error message, or `None` when valid.
pub fn validate(field: FieldId, value: &FieldValue, snapshot: &FormSnapshot) -> Option<String> {
    let text = value.as_str();
    let message = match field {
        FieldId::Address => (text_length(text.trim()) < ADDRESS_MIN_CHARS)
            .then_some("Address must be at least 8 characters"),

        FieldId::Phone => {
            let cleaned = PHONE_SEPARATORS_RE.replace_all(text, "");
            (!PHONE_RE.is_match(&cleaned))
                .then_some("Phone must be 10-15 digits with optional + prefix")
        }

        FieldId::Nationality => text.is_empty().then_some("Please select your nationality"),

        FieldId::PreferredLanguage => text
            .is_empty()
            .then_some("Please select your preferred language"),

        FieldId::HasLinkedIn => text.is_empty().then_some("Please select an option"),

        FieldId::LinkedInUrl if snapshot.is(FieldId::HasLinkedIn, YES) => {
            if text.is_empty() {
                Some("LinkedIn URL is required")
            } else {
                (!LINKEDIN_RE.is_match(text)).then_some("Please enter a valid LinkedIn URL")
            }
        }

        FieldId::CvFile => match value.as_file() {
            None => Some("Please upload your CV"),
            Some(file) if file.size > CV_MAX_BYTES => Some("CV file must be less than 10MB"),
            Some(file) if !CV_MIME_TYPES.contains(&file.mime.as_str()) => {
                Some("CV must be PDF, DOC, or DOCX format")
            }
            Some(_) => None,
        },

        FieldId::PortfolioFile => value
            .as_file()
            .is_some_and(|file| file.size > PORTFOLIO_MAX_BYTES)
            .then_some("Portfolio file must be less than 20MB"),

        FieldId::Email => (!text.is_empty() && !EMAIL_RE.is_match(text))
            .then_some("Please enter a valid email address"),

        FieldId::ExperienceLevel => text
            .is_empty()
            .then_some("Please select your experience level"),

        FieldId::CurrentInstitution => text
            .is_empty()
            .then_some("Please select your current institution"),

        FieldId::OtherInstitution => (snapshot.is(FieldId::CurrentInstitution, OTHER_INSTITUTION)
            && text.trim().is_empty())
        .then_some("Please specify your institution"),

        FieldId::WorkExperience if snapshot.is(FieldId::HasWorkExperience, YES) => {
            (text_length(text.trim()) < WORK_EXPERIENCE_MIN_CHARS)
                .then_some("Please describe your work experience (minimum 20 characters)")
        }

        FieldId::PreviousConferences if snapshot.is(FieldId::HasAttendedConference, YES) => text
            .trim()
            .is_empty()
            .then_some("Please list the conferences you have attended"),

        _ => None,
    };
    message.map(str::to_string)
}

/// Failing fields and their messages, in field declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldId, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    /// Store `Some(message)` or clear the field on `None`
    pub fn set(&mut self, field: FieldId, error: Option<String>) {
        match error {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn clear(&mut self, field: FieldId) {
        self.errors.remove(&field);
    }

    /// The first failing field in declaration order
    pub fn first(&self) -> Option<(FieldId, &str)> {
        self.iter().next()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.errors.iter().map(|(&f, m)| (f, m.as_str()))
    }
}

/// Validate every field against its own value in `snapshot`
pub fn compute_errors(snapshot: &FormSnapshot) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for (field, value) in snapshot.iter() {
        errors.set(field, validate(field, value, snapshot));
    }
    errors
}

pub fn is_valid(snapshot: &FormSnapshot) -> bool {
    compute_errors(snapshot).is_empty()
}
