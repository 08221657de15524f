//! Form domain layer
//!
//! This module provides type-safe field values, the validation rules, the
//! progress calculation and the controller that owns the live snapshot.

mod field;
mod form_state;
mod options;
mod progress;
mod snapshot;
mod validation;

#[cfg(test)]
pub(crate) mod fixtures;

pub use field::{FieldId, FieldKind, FieldValue, Section};
pub use form_state::{Form, FormAction, IntakeForm};
pub use options::{label_for, EXPERIENCE_LEVELS, OTHER_INSTITUTION};
pub use snapshot::FormSnapshot;
