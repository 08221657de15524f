//! The complete set of field values at a point in time

use super::field::{FieldId, FieldValue, FileRef};
use crate::error::{FormError, FormResult};
use std::collections::BTreeMap;

/// Ordered mapping from every known field to its current value.
///
/// Every `FieldId` is always present, and each value always matches its
/// field's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    values: BTreeMap<FieldId, FieldValue>,
}

impl FormSnapshot {
    /// A snapshot holding the initial value of every field
    pub fn new() -> Self {
        Self {
            values: FieldId::ALL
                .iter()
                .map(|&f| (f, f.kind().initial_value()))
                .collect(),
        }
    }

    pub fn get(&self, field: FieldId) -> &FieldValue {
        // Every field is inserted in `new` and never removed
        &self.values[&field]
    }

    /// Replace a field's value, rejecting values of the wrong kind
    pub fn set(&mut self, field: FieldId, value: FieldValue) -> FormResult<()> {
        let kind = field.kind();
        if !kind.accepts(&value) {
            return Err(FormError::KindMismatch {
                field: field.name(),
                expected: kind.type_name(),
                actual: value.type_name(),
            });
        }
        self.values.insert(field, value);
        Ok(())
    }

    /// String content of a text or choice field
    pub fn text(&self, field: FieldId) -> &str {
        self.get(field).as_str()
    }

    pub fn file(&self, field: FieldId) -> Option<&FileRef> {
        self.get(field).as_file()
    }

    pub fn flag(&self, field: FieldId) -> bool {
        self.get(field).as_flag()
    }

    pub fn set_items(&self, field: FieldId) -> &[String] {
        self.get(field).as_set()
    }

    /// Whether a choice or text field holds exactly `value`
    pub fn is(&self, field: FieldId, value: &str) -> bool {
        self.text(field) == value
    }

    /// Iterate fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &FieldValue)> {
        self.values.iter().map(|(&f, v)| (f, v))
    }
}

impl Default for FormSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
