//! Form state management for the intake form

use super::field::{FieldId, FieldKind, FieldValue, FileRef};
use super::options::{NO, OTHER_INSTITUTION, YES};
use super::progress::compute_progress;
use super::snapshot::FormSnapshot;
use super::validation::{self, compute_errors, validate, ValidationErrors};
use crate::error::FormResult;
use std::collections::BTreeSet;
use std::path::Path;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Buttons on the actions row, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    SaveDraft,
    RestoreDraft,
    Reset,
}

impl FormAction {
    pub const ALL: [FormAction; 4] = [
        FormAction::Submit,
        FormAction::SaveDraft,
        FormAction::RestoreDraft,
        FormAction::Reset,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormAction::Submit => "Submit Application",
            FormAction::SaveDraft => "Save Draft",
            FormAction::RestoreDraft => "Restore Draft",
            FormAction::Reset => "Reset",
        }
    }
}

/// Why a submission attempt was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitBlocked {
    /// First failing field in declaration order
    pub field: FieldId,
    pub message: String,
    pub error_count: usize,
}

/// Owns the mutable snapshot and everything derived from user interaction
#[derive(Debug, Clone)]
pub struct IntakeForm {
    snapshot: FormSnapshot,
    touched: BTreeSet<FieldId>,
    errors: ValidationErrors,
    /// Index into the visible fields; `visible_fields().len()` is the actions row
    pub active_field_index: usize,
    /// Which button is selected when on the actions row
    pub selected_button: usize,
    /// Highlighted option on the interests field
    pub option_cursor: usize,
    /// Path typed into the active file field, attached on Enter
    pub file_path_input: String,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self {
            snapshot: FormSnapshot::new(),
            touched: BTreeSet::new(),
            errors: ValidationErrors::new(),
            active_field_index: 0,
            selected_button: 0,
            option_cursor: 0,
            file_path_input: String::new(),
        }
    }

    pub fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched.contains(&field)
    }

    pub fn progress(&self) -> u8 {
        compute_progress(&self.snapshot)
    }

    pub fn is_valid(&self) -> bool {
        validation::is_valid(&self.snapshot)
    }

    /// Touched, passing and non-empty: the field earns a "valid" marker
    pub fn is_field_valid_display(&self, field: FieldId) -> bool {
        self.is_touched(field)
            && !self.errors.contains(field)
            && self.snapshot.get(field).is_filled()
    }

    /// Apply a single edit.
    ///
    /// Only the edited field is re-validated. Changing a gating field to its
    /// closed value clears the dependent field's error but keeps its value.
    pub fn update_field(&mut self, field: FieldId, value: FieldValue) -> FormResult<()> {
        let anchor = self.active();
        self.snapshot.set(field, value)?;
        self.touched.insert(field);

        let error = validate(field, self.snapshot.get(field), &self.snapshot);
        self.errors.set(field, error);
        self.clear_dependent_errors(field);

        if let Some(anchor) = anchor {
            self.focus(anchor);
        }
        Ok(())
    }

    fn clear_dependent_errors(&mut self, field: FieldId) {
        let value = self.snapshot.text(field);
        match field {
            FieldId::HasLinkedIn if value == NO => self.errors.clear(FieldId::LinkedInUrl),
            FieldId::CurrentInstitution if value != OTHER_INSTITUTION => {
                self.errors.clear(FieldId::OtherInstitution)
            }
            FieldId::HasWorkExperience if value == NO => {
                self.errors.clear(FieldId::WorkExperience)
            }
            FieldId::HasAttendedConference if value == NO => {
                self.errors.clear(FieldId::PreviousConferences)
            }
            _ => {}
        }
    }

    /// Validate the whole form.
    ///
    /// On failure every error is surfaced and the cursor jumps to the first
    /// failing field. On success a copy of the snapshot is returned so later
    /// edits cannot leak into the submission.
    pub fn try_submit(&mut self) -> Result<FormSnapshot, SubmitBlocked> {
        let errors = compute_errors(&self.snapshot);
        let blocked = errors.first().map(|(field, message)| SubmitBlocked {
            field,
            message: message.to_string(),
            error_count: errors.len(),
        });
        self.errors = errors;
        match blocked {
            Some(blocked) => {
                self.focus(blocked.field);
                Err(blocked)
            }
            None => Ok(self.snapshot.clone()),
        }
    }

    /// Back to a blank form
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Write several values back at once, e.g. from a saved draft
    pub fn restore_values(
        &mut self,
        values: impl IntoIterator<Item = (FieldId, FieldValue)>,
    ) -> FormResult<()> {
        for (field, value) in values {
            let filled = value.is_filled();
            self.snapshot.set(field, value)?;
            // Blank restored fields stay quiet until edited or submitted
            if filled {
                self.touched.insert(field);
            }
        }
        for field in self.touched.clone() {
            let error = validate(field, self.snapshot.get(field), &self.snapshot);
            self.errors.set(field, error);
        }
        self.set_active_field(self.active_field_index);
        Ok(())
    }

    // ─── Visibility and navigation ──────────────────────────────────────────

    /// Whether a field is currently shown
    pub fn is_visible(&self, field: FieldId) -> bool {
        let s = &self.snapshot;
        match field {
            FieldId::LinkedInUrl => s.is(FieldId::HasLinkedIn, YES),
            FieldId::OtherInstitution => s.is(FieldId::CurrentInstitution, OTHER_INSTITUTION),
            FieldId::WorkExperience => s.is(FieldId::HasWorkExperience, YES),
            FieldId::PreviousConferences => s.is(FieldId::HasAttendedConference, YES),
            FieldId::SendCopyToEmail => !s.text(FieldId::Email).is_empty(),
            _ => true,
        }
    }

    /// Shown fields in screen order
    pub fn visible_fields(&self) -> Vec<FieldId> {
        FieldId::DISPLAY_ORDER
            .iter()
            .copied()
            .filter(|&f| self.is_visible(f))
            .collect()
    }

    /// The field under the cursor, `None` on the actions row
    pub fn active(&self) -> Option<FieldId> {
        self.visible_fields().get(self.active_field_index).copied()
    }

    /// Move the cursor to a field, making no change if it is hidden
    pub fn focus(&mut self, field: FieldId) {
        if let Some(index) = self.visible_fields().iter().position(|&f| f == field) {
            self.active_field_index = index;
        }
    }

    /// Returns true if the actions row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active().is_none()
    }

    pub fn selected_action(&self) -> FormAction {
        FormAction::ALL[self.selected_button % FormAction::ALL.len()]
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % FormAction::ALL.len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = FormAction::ALL.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    // ─── Editing helpers for the active field ───────────────────────────────

    /// Type a character into the active text or file-path field
    pub fn push_char(&mut self, c: char) -> FormResult<()> {
        let Some(field) = self.active() else {
            return Ok(());
        };
        match field.kind() {
            FieldKind::ShortText | FieldKind::LongText => {
                let mut value = self.snapshot.get(field).clone();
                value.push_char(c);
                self.update_field(field, value)
            }
            FieldKind::File => {
                self.file_path_input.push(c);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Delete the last character of the active text or file-path field
    pub fn pop_char(&mut self) -> FormResult<()> {
        let Some(field) = self.active() else {
            return Ok(());
        };
        match field.kind() {
            FieldKind::ShortText | FieldKind::LongText => {
                let mut value = self.snapshot.get(field).clone();
                value.pop_char();
                self.update_field(field, value)
            }
            FieldKind::File => {
                self.file_path_input.pop();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Line break in the active long-text field
    pub fn newline(&mut self) -> FormResult<()> {
        match self.active() {
            Some(field) if field.is_multiline() => self.push_char('\n'),
            _ => Ok(()),
        }
    }

    /// Step a choice field to the next or previous option.
    /// The empty "not selected" slot sits before the first option.
    pub fn cycle_choice(&mut self, field: FieldId, forward: bool) -> FormResult<()> {
        let FieldKind::Choice(options) = field.kind() else {
            return Ok(());
        };
        let slots = options.len() + 1;
        let current = options
            .iter()
            .position(|o| o.value == self.snapshot.text(field))
            .map_or(0, |i| i + 1);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        let value = match next {
            0 => String::new(),
            n => options[n - 1].value.to_string(),
        };
        self.update_field(field, FieldValue::Choice(value))
    }

    pub fn toggle_flag(&mut self, field: FieldId) -> FormResult<()> {
        let current = self.snapshot.flag(field);
        self.update_field(field, FieldValue::Flag(!current))
    }

    /// Add an interest if absent, remove it if present
    pub fn toggle_interest(&mut self, interest: &str) -> FormResult<()> {
        let mut interests = self.snapshot.set_items(FieldId::Interests).to_vec();
        if let Some(pos) = interests.iter().position(|i| i == interest) {
            interests.remove(pos);
        } else {
            interests.push(interest.to_string());
        }
        self.update_field(FieldId::Interests, FieldValue::Set(interests))
    }

    pub fn attach_file(&mut self, field: FieldId, file: FileRef) -> FormResult<()> {
        self.update_field(field, FieldValue::File(Some(file)))
    }

    pub fn detach_file(&mut self, field: FieldId) -> FormResult<()> {
        self.file_path_input.clear();
        self.update_field(field, FieldValue::File(None))
    }

    /// Attach the file named by `file_path_input` to the active file field
    pub fn attach_from_input(&mut self) -> FormResult<Option<(FieldId, FileRef)>> {
        let Some(field) = self.active().filter(|f| f.is_file()) else {
            return Ok(None);
        };
        let path = self.file_path_input.trim().to_string();
        if path.is_empty() {
            return Ok(None);
        }
        let file = FileRef::from_path(Path::new(&path))?;
        self.attach_file(field, file.clone())?;
        self.file_path_input.clear();
        Ok(Some((field, file)))
    }
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for IntakeForm {
    fn field_count(&self) -> usize {
        self.visible_fields().len() + 1 // visible fields, actions
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
        self.option_cursor = 0;
    }
}
