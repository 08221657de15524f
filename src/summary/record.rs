//! The record sent on submission and shown on the confirmation screen

use crate::state::{label_for, FieldId, FormSnapshot, EXPERIENCE_LEVELS, OTHER_INSTITUTION};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version tag carried by every submitted or exported document
pub const FORM_VERSION: &str = "2.0";

/// What the applicant submitted.
///
/// File attachments are reduced to their names and a custom institution
/// replaces the "other" placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub address: String,
    pub phone: String,
    pub nationality: String,
    pub preferred_language: String,
    #[serde(rename = "hasLinkedIn")]
    pub has_linkedin: String,
    #[serde(rename = "linkedInUrl")]
    pub linkedin_url: String,
    pub cv_file_name: String,
    pub portfolio_file_name: String,
    pub experience_level: String,
    pub current_institution: String,
    pub has_work_experience: String,
    pub work_experience: String,
    pub interests: Vec<String>,
    pub has_attended_conference: String,
    pub previous_conferences: String,
    pub referral_source: String,
    pub email: String,
    pub notes: String,
    pub submission_date: DateTime<Utc>,
    pub form_version: String,
}

impl SubmissionRecord {
    pub fn from_snapshot(snapshot: &FormSnapshot, submitted_at: DateTime<Utc>) -> Self {
        let text = |field| snapshot.text(field).to_string();
        let file_name = |field| {
            snapshot
                .file(field)
                .map(|f| f.name.clone())
                .unwrap_or_default()
        };
        let current_institution = if snapshot.is(FieldId::CurrentInstitution, OTHER_INSTITUTION)
        {
            text(FieldId::OtherInstitution)
        } else {
            text(FieldId::CurrentInstitution)
        };

        Self {
            address: text(FieldId::Address),
            phone: text(FieldId::Phone),
            nationality: text(FieldId::Nationality),
            preferred_language: text(FieldId::PreferredLanguage),
            has_linkedin: text(FieldId::HasLinkedIn),
            linkedin_url: text(FieldId::LinkedInUrl),
            cv_file_name: file_name(FieldId::CvFile),
            portfolio_file_name: file_name(FieldId::PortfolioFile),
            experience_level: text(FieldId::ExperienceLevel),
            current_institution,
            has_work_experience: text(FieldId::HasWorkExperience),
            work_experience: text(FieldId::WorkExperience),
            interests: snapshot.set_items(FieldId::Interests).to_vec(),
            has_attended_conference: text(FieldId::HasAttendedConference),
            previous_conferences: text(FieldId::PreviousConferences),
            referral_source: text(FieldId::ReferralSource),
            email: text(FieldId::Email),
            notes: text(FieldId::Notes),
            submission_date: submitted_at,
            form_version: FORM_VERSION.to_string(),
        }
    }

    /// Display label of the selected experience level
    pub fn experience_label(&self) -> &str {
        label_for(EXPERIENCE_LEVELS, &self.experience_level).unwrap_or("")
    }

    pub fn stats(&self) -> SummaryStats {
        SummaryStats {
            fields_completed: self.completed_field_count(),
            interests_selected: self.interests.len(),
            cv_uploaded: !self.cv_file_name.is_empty(),
        }
    }

    /// Non-empty entries of the serialized record, metadata included
    fn completed_field_count(&self) -> usize {
        let Ok(serde_json::Value::Object(map)) = serde_json::to_value(self) else {
            return 0;
        };
        map.values()
            .filter(|v| match v {
                serde_json::Value::String(s) => !s.is_empty(),
                serde_json::Value::Array(items) => !items.is_empty(),
                serde_json::Value::Null => false,
                _ => true,
            })
            .count()
    }
}

/// Headline numbers for the confirmation screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryStats {
    pub fields_completed: usize,
    pub interests_selected: usize,
    pub cv_uploaded: bool,
}
