// ABOUTME: Client configuration loaded from an optional TOML file
// ABOUTME: Every field has a default so an empty file is a valid config

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::error::{BoardError, Result};

/// Settings for a [`JobBoardClient`](crate::board::JobBoardClient) session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Base URL the `/api/jobs` path is appended to.
    pub api_base_url: String,
    /// HTTP request timeout.
    pub timeout_secs: u64,
    /// Quiet period before a filter request runs.
    pub debounce_ms: u64,
    /// Number of skeleton cards shown while a fetch is pending.
    pub skeleton_count: usize,
    /// Cap on distinct values offered per checkbox group.
    pub max_filter_options: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: 30,
            debounce_ms: 300,
            skeleton_count: 6,
            max_filter_options: 5,
        }
    }
}

impl BoardConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| BoardError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            BoardError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.skeleton_count, 6);
        assert_eq!(config.max_filter_options, 5);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = BoardConfig::from_toml_str(
            r#"
            api_base_url = "https://jobs.example.com"
            debounce_ms = 150
            "#,
        )
        .unwrap();

        assert_eq!(config.api_base_url, "https://jobs.example.com");
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "skeleton_count = 3").unwrap();

        let config = BoardConfig::load(file.path()).unwrap();
        assert_eq!(config.skeleton_count, 3);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = BoardConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = BoardConfig::from_toml_str("debounce_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));
    }
}
