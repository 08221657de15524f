//! Configuration handling for the intake form

use crate::drafts::store::DEFAULT_CAPACITY;
use crate::state::Notification;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_AUTOSAVE_DELAY_MS: u64 = 1000;
const DEFAULT_SUBMISSION_DELAY_MS: u64 = 1500;
const DEFAULT_EMAIL_DELAY_MS: u64 = 2000;

/// User configuration; every key is optional
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntakeConfig {
    /// Quiet period before an automatic draft save
    pub autosave_delay_ms: Option<u64>,
    /// Number of drafts kept for the session
    pub max_drafts: Option<usize>,
    /// Where exported summaries are written
    pub export_dir: Option<PathBuf>,
    /// Simulated submission latency
    pub submission_delay_ms: Option<u64>,
    /// Simulated email latency
    pub email_delay_ms: Option<u64>,
    /// How long notifications stay on screen
    pub notification_ms: Option<u64>,
}

impl IntakeConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "hpair", "intake-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: IntakeConfig = serde_json::from_str(&content)?;
                tracing::info!(path = %path.display(), "Loaded config");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_delay_ms.unwrap_or(DEFAULT_AUTOSAVE_DELAY_MS))
    }

    pub fn max_drafts(&self) -> usize {
        self.max_drafts.unwrap_or(DEFAULT_CAPACITY)
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(
            self.submission_delay_ms
                .unwrap_or(DEFAULT_SUBMISSION_DELAY_MS),
        )
    }

    pub fn email_delay(&self) -> Duration {
        Duration::from_millis(self.email_delay_ms.unwrap_or(DEFAULT_EMAIL_DELAY_MS))
    }

    pub fn notification_duration(&self) -> Duration {
        self.notification_ms
            .map_or(Notification::DEFAULT_DURATION, Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IntakeConfig::default();
        assert_eq!(config.autosave_delay(), Duration::from_millis(1000));
        assert_eq!(config.max_drafts(), 3);
        assert_eq!(config.export_dir(), PathBuf::from("."));
        assert_eq!(config.submission_delay(), Duration::from_millis(1500));
        assert_eq!(config.email_delay(), Duration::from_millis(2000));
        assert_eq!(config.notification_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn test_serialization() {
        let config = IntakeConfig {
            autosave_delay_ms: Some(250),
            max_drafts: Some(5),
            export_dir: Some(PathBuf::from("/tmp/exports")),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: IntakeConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.autosave_delay(), Duration::from_millis(250));
        assert_eq!(parsed.max_drafts(), 5);
        assert_eq!(parsed.export_dir(), PathBuf::from("/tmp/exports"));
        assert!(parsed.email_delay_ms.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: IntakeConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.autosave_delay_ms.is_none());
        assert!(parsed.export_dir.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"max_drafts": 2, "unknown_field": "value"}"#;
        let parsed: IntakeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.max_drafts(), 2);
    }

    #[test]
    fn test_load_returns_ok() {
        let result = IntakeConfig::load();
        assert!(result.is_ok());
    }
}
