//! Form field descriptors and value objects

use super::options::{
    ChoiceOption, EXPERIENCE_LEVELS, INSTITUTIONS, INTERESTS, LANGUAGES, NATIONALITIES,
    REFERRAL_SOURCES, YES_NO,
};
use crate::error::{FormError, FormResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The closed set of fields on the intake form.
///
/// Declaration order is significant: aggregate validation walks the fields in
/// this order, so it also decides which failing field is reported first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Address,
    Phone,
    Nationality,
    PreferredLanguage,
    HasLinkedIn,
    LinkedInUrl,
    CvFile,
    PortfolioFile,
    Email,
    SendCopyToEmail,
    ExperienceLevel,
    CurrentInstitution,
    OtherInstitution,
    HasWorkExperience,
    WorkExperience,
    Interests,
    HasAttendedConference,
    PreviousConferences,
    ReferralSource,
    Notes,
}

impl FieldId {
    /// All fields in declaration order
    pub const ALL: [FieldId; 20] = [
        FieldId::Address,
        FieldId::Phone,
        FieldId::Nationality,
        FieldId::PreferredLanguage,
        FieldId::HasLinkedIn,
        FieldId::LinkedInUrl,
        FieldId::CvFile,
        FieldId::PortfolioFile,
        FieldId::Email,
        FieldId::SendCopyToEmail,
        FieldId::ExperienceLevel,
        FieldId::CurrentInstitution,
        FieldId::OtherInstitution,
        FieldId::HasWorkExperience,
        FieldId::WorkExperience,
        FieldId::Interests,
        FieldId::HasAttendedConference,
        FieldId::PreviousConferences,
        FieldId::ReferralSource,
        FieldId::Notes,
    ];

    /// All fields in the order they are laid out on screen
    pub const DISPLAY_ORDER: [FieldId; 20] = [
        FieldId::Address,
        FieldId::Phone,
        FieldId::Email,
        FieldId::SendCopyToEmail,
        FieldId::Nationality,
        FieldId::PreferredLanguage,
        FieldId::ExperienceLevel,
        FieldId::CurrentInstitution,
        FieldId::OtherInstitution,
        FieldId::HasWorkExperience,
        FieldId::WorkExperience,
        FieldId::HasLinkedIn,
        FieldId::LinkedInUrl,
        FieldId::HasAttendedConference,
        FieldId::PreviousConferences,
        FieldId::CvFile,
        FieldId::PortfolioFile,
        FieldId::Interests,
        FieldId::ReferralSource,
        FieldId::Notes,
    ];

    /// Wire name used in drafts, exports and error maps
    pub fn name(self) -> &'static str {
        match self {
            FieldId::Address => "address",
            FieldId::Phone => "phone",
            FieldId::Nationality => "nationality",
            FieldId::PreferredLanguage => "preferredLanguage",
            FieldId::HasLinkedIn => "hasLinkedIn",
            FieldId::LinkedInUrl => "linkedInUrl",
            FieldId::CvFile => "cvFile",
            FieldId::PortfolioFile => "portfolioFile",
            FieldId::Email => "email",
            FieldId::SendCopyToEmail => "sendCopyToEmail",
            FieldId::ExperienceLevel => "experienceLevel",
            FieldId::CurrentInstitution => "currentInstitution",
            FieldId::OtherInstitution => "otherInstitution",
            FieldId::HasWorkExperience => "hasWorkExperience",
            FieldId::WorkExperience => "workExperience",
            FieldId::Interests => "interests",
            FieldId::HasAttendedConference => "hasAttendedConference",
            FieldId::PreviousConferences => "previousConferences",
            FieldId::ReferralSource => "referralSource",
            FieldId::Notes => "notes",
        }
    }

    /// Human-readable label, with `*` marking required fields
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Address => "Address *",
            FieldId::Phone => "Phone Number *",
            FieldId::Nationality => "Nationality *",
            FieldId::PreferredLanguage => "Preferred Language *",
            FieldId::HasLinkedIn => "Do you have a LinkedIn profile? *",
            FieldId::LinkedInUrl => "LinkedIn URL *",
            FieldId::CvFile => "CV Upload *",
            FieldId::PortfolioFile => "Portfolio/Additional Documents",
            FieldId::Email => "Email Address",
            FieldId::SendCopyToEmail => "Send confirmation email to this address",
            FieldId::ExperienceLevel => "Experience Level *",
            FieldId::CurrentInstitution => "Current Institution *",
            FieldId::OtherInstitution => "Specify Institution *",
            FieldId::HasWorkExperience => "Do you have relevant work experience?",
            FieldId::WorkExperience => "Describe Your Work Experience",
            FieldId::Interests => "Areas of Interest",
            FieldId::HasAttendedConference => "Have you attended academic conferences before?",
            FieldId::PreviousConferences => "List Previous Conferences",
            FieldId::ReferralSource => "How did you hear about HPAIR?",
            FieldId::Notes => "Additional Notes or Comments",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::Address
            | FieldId::WorkExperience
            | FieldId::PreviousConferences
            | FieldId::Notes => FieldKind::LongText,
            FieldId::Phone | FieldId::LinkedInUrl | FieldId::Email | FieldId::OtherInstitution => {
                FieldKind::ShortText
            }
            FieldId::Nationality => FieldKind::Choice(NATIONALITIES),
            FieldId::PreferredLanguage => FieldKind::Choice(LANGUAGES),
            FieldId::HasLinkedIn | FieldId::HasWorkExperience | FieldId::HasAttendedConference => {
                FieldKind::Choice(YES_NO)
            }
            FieldId::ExperienceLevel => FieldKind::Choice(EXPERIENCE_LEVELS),
            FieldId::CurrentInstitution => FieldKind::Choice(INSTITUTIONS),
            FieldId::ReferralSource => FieldKind::Choice(REFERRAL_SOURCES),
            FieldId::CvFile | FieldId::PortfolioFile => FieldKind::File,
            FieldId::SendCopyToEmail => FieldKind::Flag,
            FieldId::Interests => FieldKind::MultiSelect(INTERESTS),
        }
    }

    pub fn section(self) -> Section {
        match self {
            FieldId::Address
            | FieldId::Phone
            | FieldId::Email
            | FieldId::SendCopyToEmail
            | FieldId::Nationality
            | FieldId::PreferredLanguage => Section::BasicInformation,
            FieldId::ExperienceLevel
            | FieldId::CurrentInstitution
            | FieldId::OtherInstitution
            | FieldId::HasWorkExperience
            | FieldId::WorkExperience => Section::Background,
            FieldId::HasLinkedIn
            | FieldId::LinkedInUrl
            | FieldId::HasAttendedConference
            | FieldId::PreviousConferences => Section::Networks,
            FieldId::CvFile | FieldId::PortfolioFile => Section::Documents,
            FieldId::Interests | FieldId::ReferralSource => Section::Interests,
            FieldId::Notes => Section::Additional,
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self.kind(), FieldKind::LongText)
    }

    pub fn is_file(self) -> bool {
        matches!(self.kind(), FieldKind::File)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    fn from_str(s: &str) -> FormResult<Self> {
        FieldId::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Visual grouping of fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    BasicInformation,
    Background,
    Networks,
    Documents,
    Interests,
    Additional,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::BasicInformation => "Basic Information",
            Section::Background => "Academic & Professional Background",
            Section::Networks => "Professional Networks",
            Section::Documents => "Document Upload",
            Section::Interests => "Interests & Preferences",
            Section::Additional => "Additional Information",
        }
    }
}

/// The semantic type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    ShortText,
    LongText,
    Choice(&'static [ChoiceOption]),
    Flag,
    File,
    MultiSelect(&'static [&'static str]),
}

impl FieldKind {
    /// Initial value for a freshly opened form
    pub fn initial_value(self) -> FieldValue {
        match self {
            FieldKind::ShortText | FieldKind::LongText => FieldValue::Text(String::new()),
            FieldKind::Choice(_) => FieldValue::Choice(String::new()),
            FieldKind::Flag => FieldValue::Flag(true),
            FieldKind::File => FieldValue::File(None),
            FieldKind::MultiSelect(_) => FieldValue::Set(Vec::new()),
        }
    }

    pub fn accepts(self, value: &FieldValue) -> bool {
        matches!(
            (self, value),
            (FieldKind::ShortText | FieldKind::LongText, FieldValue::Text(_))
                | (FieldKind::Choice(_), FieldValue::Choice(_))
                | (FieldKind::Flag, FieldValue::Flag(_))
                | (FieldKind::File, FieldValue::File(_))
                | (FieldKind::MultiSelect(_), FieldValue::Set(_))
        )
    }

    pub fn type_name(self) -> &'static str {
        match self {
            FieldKind::ShortText | FieldKind::LongText => "text",
            FieldKind::Choice(_) => "choice",
            FieldKind::Flag => "flag",
            FieldKind::File => "file",
            FieldKind::MultiSelect(_) => "set",
        }
    }
}

/// Reference to an attached file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl FileRef {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Build a reference from a file on disk, guessing the MIME type from its extension
    pub fn from_path(path: &Path) -> FormResult<Self> {
        let metadata = std::fs::metadata(path)
            .map_err(|_| FormError::FileNotFound(path.display().to_string()))?;
        if !metadata.is_file() {
            return Err(FormError::FileNotFound(path.display().to_string()));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, metadata.len(), mime_for_path(path)))
    }
}

/// MIME type for an upload, keyed on file extension
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Selected option value, empty when nothing is selected
    Choice(String),
    Flag(bool),
    File(Option<FileRef>),
    /// Selected options in the order they were picked
    Set(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Choice(_) => "choice",
            FieldValue::Flag(_) => "flag",
            FieldValue::File(_) => "file",
            FieldValue::Set(_) => "set",
        }
    }

    /// Get the string value (returns empty string for non-string values)
    pub fn as_str(&self) -> &str {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => s,
            _ => "",
        }
    }

    pub fn as_file(&self) -> Option<&FileRef> {
        match self {
            FieldValue::File(f) => f.as_ref(),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }

    pub fn as_set(&self) -> &[String] {
        match self {
            FieldValue::Set(items) => items,
            _ => &[],
        }
    }

    /// Whether the value counts as filled in for progress purposes
    pub fn is_filled(&self) -> bool {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => !s.trim().is_empty(),
            FieldValue::Flag(b) => *b,
            FieldValue::File(f) => f.is_some(),
            FieldValue::Set(items) => !items.is_empty(),
        }
    }

    /// Push a character to a text value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = self {
            s.push(c);
        }
    }

    /// Remove the last character from a text value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = self {
            s.pop();
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self, kind: FieldKind) -> String {
        match (self, kind) {
            (FieldValue::Choice(v), FieldKind::Choice(options)) => options
                .iter()
                .find(|o| o.value == v)
                .map(|o| o.label.to_string())
                .unwrap_or_default(),
            (FieldValue::Text(s), _) | (FieldValue::Choice(s), _) => s.clone(),
            (FieldValue::Flag(b), _) => (if *b { "[x]" } else { "[ ]" }).to_string(),
            (FieldValue::File(Some(f)), _) => format!("{} ({})", f.name, format_size(f.size)),
            (FieldValue::File(None), _) => String::new(),
            (FieldValue::Set(items), _) => items.join(", "),
        }
    }
}

/// Human-readable byte size, e.g. `1.5 MB`
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_id {
        use super::*;

        #[test]
        fn test_name_round_trips_through_from_str() {
            for field in FieldId::ALL {
                assert_eq!(field.name().parse::<FieldId>().unwrap(), field);
            }
        }

        #[test]
        fn test_unknown_name_is_rejected() {
            let err = "linkedinUrl".parse::<FieldId>().unwrap_err();
            assert!(matches!(err, FormError::UnknownField(name) if name == "linkedinUrl"));
        }

        #[test]
        fn test_serde_uses_wire_names() {
            assert_eq!(
                serde_json::to_string(&FieldId::HasLinkedIn).unwrap(),
                "\"hasLinkedIn\""
            );
            assert_eq!(
                serde_json::to_string(&FieldId::LinkedInUrl).unwrap(),
                "\"linkedInUrl\""
            );
            assert_eq!(
                serde_json::to_string(&FieldId::PreferredLanguage).unwrap(),
                "\"preferredLanguage\""
            );
        }

        #[test]
        fn test_display_order_covers_every_field_once() {
            let mut display = FieldId::DISPLAY_ORDER.to_vec();
            display.sort();
            assert_eq!(display, FieldId::ALL.to_vec());
        }

        #[test]
        fn test_long_text_fields_are_multiline() {
            assert!(FieldId::Address.is_multiline());
            assert!(FieldId::Notes.is_multiline());
            assert!(!FieldId::Phone.is_multiline());
        }
    }

    mod field_value {
        use super::*;

        #[test]
        fn test_initial_values_match_kind() {
            for field in FieldId::ALL {
                let kind = field.kind();
                assert!(kind.accepts(&kind.initial_value()), "{field}");
            }
        }

        #[test]
        fn test_send_copy_defaults_to_true() {
            assert_eq!(
                FieldId::SendCopyToEmail.kind().initial_value(),
                FieldValue::Flag(true)
            );
        }

        #[test]
        fn test_is_filled_trims_text() {
            assert!(!FieldValue::Text("   ".into()).is_filled());
            assert!(FieldValue::Text(" a ".into()).is_filled());
            assert!(!FieldValue::Choice(String::new()).is_filled());
            assert!(!FieldValue::File(None).is_filled());
            assert!(FieldValue::Set(vec!["Economics".into()]).is_filled());
        }

        #[test]
        fn test_push_and_pop_only_touch_text() {
            let mut value = FieldValue::Text("ab".into());
            value.push_char('c');
            assert_eq!(value.as_str(), "abc");
            value.pop_char();
            assert_eq!(value.as_str(), "ab");

            let mut flag = FieldValue::Flag(false);
            flag.push_char('x');
            assert_eq!(flag, FieldValue::Flag(false));
        }

        #[test]
        fn test_choice_display_uses_label() {
            let value = FieldValue::Choice("mid-career".into());
            assert_eq!(
                value.display_value(FieldId::ExperienceLevel.kind()),
                "Mid-Career Professional (5+ years)"
            );
        }

        #[test]
        fn test_file_display_includes_size() {
            let value = FieldValue::File(Some(FileRef::new("cv.pdf", 2048, "application/pdf")));
            assert_eq!(value.display_value(FieldKind::File), "cv.pdf (2.0 KB)");
        }
    }

    mod file_ref {
        use super::*;

        #[test]
        fn test_mime_for_known_extensions() {
            assert_eq!(mime_for_path(Path::new("cv.PDF")), "application/pdf");
            assert_eq!(mime_for_path(Path::new("cv.doc")), "application/msword");
            assert_eq!(
                mime_for_path(Path::new("cv.docx")),
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            );
            assert_eq!(
                mime_for_path(Path::new("archive")),
                "application/octet-stream"
            );
        }

        #[test]
        fn test_from_path_reads_size() {
            let dir = std::env::temp_dir().join(format!("intake-tui-{}", uuid::Uuid::new_v4()));
            std::fs::create_dir_all(&dir).unwrap();
            let path = dir.join("resume.pdf");
            std::fs::write(&path, vec![0u8; 100]).unwrap();

            let file = FileRef::from_path(&path).unwrap();
            assert_eq!(file.name, "resume.pdf");
            assert_eq!(file.size, 100);
            assert_eq!(file.mime, "application/pdf");

            std::fs::remove_dir_all(&dir).unwrap();
        }

        #[test]
        fn test_from_path_missing_file() {
            let err = FileRef::from_path(Path::new("/definitely/not/here.pdf")).unwrap_err();
            assert!(matches!(err, FormError::FileNotFound(_)));
        }
    }
}
