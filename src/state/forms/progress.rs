//! Completion progress derived from the current snapshot

use super::field::FieldId;
use super::options::{OTHER_INSTITUTION, YES};
use super::snapshot::FormSnapshot;

/// Fields that always count towards progress
pub const BASE_REQUIRED: [FieldId; 7] = [
    FieldId::Address,
    FieldId::Phone,
    FieldId::Nationality,
    FieldId::PreferredLanguage,
    FieldId::HasLinkedIn,
    FieldId::CvFile,
    FieldId::ExperienceLevel,
];

/// Completion percentage in `0..=100`.
///
/// A conditional field joins the count only once its gate is open and it has
/// a value, so it adds to the numerator and denominator together.
pub fn compute_progress(snapshot: &FormSnapshot) -> u8 {
    let mut total = BASE_REQUIRED.len();
    let mut completed = BASE_REQUIRED
        .iter()
        .filter(|&&field| is_complete(snapshot, field))
        .count();

    let conditional = [
        (FieldId::HasLinkedIn, YES, FieldId::LinkedInUrl),
        (
            FieldId::CurrentInstitution,
            OTHER_INSTITUTION,
            FieldId::OtherInstitution,
        ),
    ];
    for (gate, open_value, field) in conditional {
        if snapshot.is(gate, open_value) && !snapshot.text(field).is_empty() {
            total += 1;
            completed += 1;
        }
    }

    // f64::round rounds half away from zero
    (100.0 * completed as f64 / total as f64).round() as u8
}

fn is_complete(snapshot: &FormSnapshot, field: FieldId) -> bool {
    if field.is_file() {
        snapshot.file(field).is_some()
    } else {
        snapshot.get(field).is_filled()
    }
}
