//! Session-scoped draft storage keeping only the most recent saves

use crate::error::{FormError, FormResult};
use crate::state::{FieldId, FieldKind, FieldValue, FormSnapshot, IntakeForm};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default number of drafts retained
pub const DEFAULT_CAPACITY: usize = 3;

/// File attachment as stored in a draft: no MIME, so it cannot be restored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftFile {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DraftValue {
    Flag(bool),
    Set(Vec<String>),
    File(Option<DraftFile>),
    Text(String),
}

impl From<&FieldValue> for DraftValue {
    fn from(value: &FieldValue) -> Self {
        match value {
            FieldValue::Text(s) | FieldValue::Choice(s) => DraftValue::Text(s.clone()),
            FieldValue::Flag(b) => DraftValue::Flag(*b),
            FieldValue::File(f) => DraftValue::File(f.as_ref().map(|f| DraftFile {
                name: f.name.clone(),
                size: f.size,
            })),
            FieldValue::Set(items) => DraftValue::Set(items.clone()),
        }
    }
}

/// One saved draft: every field by wire name plus the save time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRecord {
    pub timestamp: i64,
    #[serde(flatten)]
    pub fields: BTreeMap<FieldId, DraftValue>,
}

impl DraftRecord {
    pub fn from_snapshot(timestamp: i64, snapshot: &FormSnapshot) -> Self {
        Self {
            timestamp,
            fields: snapshot.iter().map(|(f, v)| (f, v.into())).collect(),
        }
    }

    /// Field values that can be written back into a form.
    ///
    /// File fields are skipped. A stored value that does not fit its
    /// field's kind is an error.
    pub fn restorable_values(&self) -> FormResult<Vec<(FieldId, FieldValue)>> {
        self.fields
            .iter()
            .filter(|(field, _)| !field.is_file())
            .map(|(&field, value)| {
                let kind = field.kind();
                let restored = match (kind, value) {
                    (FieldKind::ShortText | FieldKind::LongText, DraftValue::Text(s)) => {
                        FieldValue::Text(s.clone())
                    }
                    (FieldKind::Choice(_), DraftValue::Text(s)) => FieldValue::Choice(s.clone()),
                    (FieldKind::Flag, DraftValue::Flag(b)) => FieldValue::Flag(*b),
                    (FieldKind::MultiSelect(_), DraftValue::Set(items)) => {
                        FieldValue::Set(items.clone())
                    }
                    _ => {
                        return Err(FormError::KindMismatch {
                            field: field.name(),
                            expected: kind.type_name(),
                            actual: value.type_name(),
                        })
                    }
                };
                Ok((field, restored))
            })
            .collect()
    }

    /// Write this draft's scalar fields back through the controller
    pub fn restore_into(&self, form: &mut IntakeForm) -> FormResult<()> {
        form.restore_values(self.restorable_values()?)
    }
}

impl DraftValue {
    fn type_name(&self) -> &'static str {
        match self {
            DraftValue::Flag(_) => "flag",
            DraftValue::Set(_) => "set",
            DraftValue::File(_) => "file",
            DraftValue::Text(_) => "text",
        }
    }
}

/// Drafts keyed by millisecond timestamp, held as serialized JSON
#[derive(Debug, Clone)]
pub struct DraftStore {
    entries: BTreeMap<i64, String>,
    capacity: usize,
}

impl DraftStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Save at the current wall-clock time
    pub fn save(&mut self, snapshot: &FormSnapshot) -> FormResult<i64> {
        let timestamp = Utc::now().timestamp_millis();
        self.save_at(timestamp, snapshot)?;
        Ok(timestamp)
    }

    /// Save under `timestamp`, replacing any draft already there and evicting
    /// the oldest drafts beyond capacity
    pub fn save_at(&mut self, timestamp: i64, snapshot: &FormSnapshot) -> FormResult<()> {
        let json = serde_json::to_string(&DraftRecord::from_snapshot(timestamp, snapshot))?;
        self.entries.insert(timestamp, json);
        while self.entries.len() > self.capacity {
            if let Some((evicted, _)) = self.entries.pop_first() {
                tracing::debug!(timestamp = evicted, "Evicted old draft");
            }
        }
        tracing::debug!(timestamp, drafts = self.entries.len(), "Saved draft");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, timestamp: i64) -> FormResult<Option<DraftRecord>> {
        self.entries
            .get(&timestamp)
            .map(|json| serde_json::from_str(json).map_err(FormError::from))
            .transpose()
    }

    /// The most recently saved draft
    pub fn latest(&self) -> FormResult<Option<DraftRecord>> {
        match self.entries.last_key_value() {
            Some((&timestamp, _)) => self.get(timestamp),
            None => Ok(None),
        }
    }
}

impl Default for DraftStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
