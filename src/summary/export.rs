//! Downloadable JSON summary of a submitted application

use super::record::FORM_VERSION;
use crate::error::FormResult;
use crate::state::{FieldId, FieldValue, FormSnapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A non-file field value as written to the export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExportValue {
    Flag(bool),
    Set(Vec<String>),
    Text(String),
}

/// The exported document.
///
/// Every non-file field keeps its own snapshot value under its wire name.
/// Attachments are reduced to `cvFileName` and `portfolioFileName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    #[serde(flatten)]
    pub fields: BTreeMap<FieldId, ExportValue>,
    pub cv_file_name: String,
    pub portfolio_file_name: String,
    pub submission_date: DateTime<Utc>,
    pub form_version: String,
}

impl ExportDocument {
    pub fn from_snapshot(snapshot: &FormSnapshot, submitted_at: DateTime<Utc>) -> Self {
        let file_name = |field| {
            snapshot
                .file(field)
                .map(|f| f.name.clone())
                .unwrap_or_default()
        };
        let fields = snapshot
            .iter()
            .filter_map(|(field, value)| {
                let value = match value {
                    FieldValue::Text(s) | FieldValue::Choice(s) => ExportValue::Text(s.clone()),
                    FieldValue::Flag(b) => ExportValue::Flag(*b),
                    FieldValue::Set(items) => ExportValue::Set(items.clone()),
                    FieldValue::File(_) => return None,
                };
                Some((field, value))
            })
            .collect();

        Self {
            fields,
            cv_file_name: file_name(FieldId::CvFile),
            portfolio_file_name: file_name(FieldId::PortfolioFile),
            submission_date: submitted_at,
            form_version: FORM_VERSION.to_string(),
        }
    }

    /// Pretty JSON with 2-space indentation
    pub fn to_json(&self) -> FormResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(test)]
    pub fn from_json(json: &str) -> FormResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Field values as they would be written back into a form
    #[cfg(test)]
    pub fn scalar_values(&self) -> FormResult<Vec<(FieldId, FieldValue)>> {
        use crate::error::FormError;
        use crate::state::FieldKind;

        self.fields
            .iter()
            .map(|(&field, value)| {
                let kind = field.kind();
                let restored = match (kind, value) {
                    (FieldKind::ShortText | FieldKind::LongText, ExportValue::Text(s)) => {
                        FieldValue::Text(s.clone())
                    }
                    (FieldKind::Choice(_), ExportValue::Text(s)) => FieldValue::Choice(s.clone()),
                    (FieldKind::Flag, ExportValue::Flag(b)) => FieldValue::Flag(*b),
                    (FieldKind::MultiSelect(_), ExportValue::Set(items)) => {
                        FieldValue::Set(items.clone())
                    }
                    _ => {
                        return Err(FormError::KindMismatch {
                            field: field.name(),
                            expected: kind.type_name(),
                            actual: match value {
                                ExportValue::Flag(_) => "flag",
                                ExportValue::Set(_) => "set",
                                ExportValue::Text(_) => "text",
                            },
                        })
                    }
                };
                Ok((field, restored))
            })
            .collect()
    }

    /// `hpair_application_<millis>.json`, keyed on the submission time
    pub fn file_name(&self) -> String {
        format!(
            "hpair_application_{}.json",
            self.submission_date.timestamp_millis()
        )
    }

    /// Write the document into `dir`, returning the full path
    pub fn write_to(&self, dir: &Path) -> FormResult<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        std::fs::write(&path, self.to_json()?)?;
        tracing::info!(path = %path.display(), "Exported application summary");
        Ok(path)
    }
}
