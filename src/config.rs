//! User configuration
//!
//! Loaded from `<config_dir>/docdesk/config.json` when present, then
//! overridden by `DOCDESK_*` environment variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DocdeskError, Result};

pub const DEFAULT_API_URL: &str =
    "https://wappbackpocwala-ead4gxcqgec7avg0.eastus-01.azurewebsites.net";
pub const DEFAULT_SPEECH_URL: &str =
    "https://wappgaicbackendnew-hjdyapc3bff5avdg.eastus-01.azurewebsites.net";
pub const DEFAULT_RECORD_SECONDS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Origin of the document backend
    pub api_url: String,
    /// Origin of the speech-to-text backend
    pub speech_url: String,
    pub record_seconds: u64,
    /// Extensions offered by the file picker
    pub upload_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            speech_url: DEFAULT_SPEECH_URL.into(),
            record_seconds: DEFAULT_RECORD_SECONDS,
            upload_extensions: vec!["pdf".into(), "doc".into(), "docx".into()],
        }
    }
}

impl Config {
    /// Load from the default location, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let config = Self::load_from(&path)?;
        config.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| DocdeskError::Config(format!("{}: {}", path.display(), e)))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| DocdeskError::Config("no config directory on this system".into()))?;
        Ok(dir.join("docdesk").join("config.json"))
    }

    /// Apply `DOCDESK_API_URL`, `DOCDESK_SPEECH_URL` and
    /// `DOCDESK_RECORD_SECONDS` looked up through `lookup`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = lookup("DOCDESK_API_URL") {
            self.api_url = url;
        }
        if let Some(url) = lookup("DOCDESK_SPEECH_URL") {
            self.speech_url = url;
        }
        if let Some(secs) = lookup("DOCDESK_RECORD_SECONDS") {
            self.record_seconds = secs.trim().parse().map_err(|_| {
                DocdeskError::Config(format!("DOCDESK_RECORD_SECONDS is not a number: {}", secs))
            })?;
        }
        self.normalize()
    }

    fn normalize(mut self) -> Result<Self> {
        self.api_url = self.api_url.trim().trim_end_matches('/').to_string();
        self.speech_url = self.speech_url.trim().trim_end_matches('/').to_string();

        if self.api_url.is_empty() || self.speech_url.is_empty() {
            return Err(DocdeskError::Config("backend URLs must not be empty".into()));
        }
        if self.record_seconds == 0 {
            return Err(DocdeskError::Config("record_seconds must be at least 1".into()));
        }
        Ok(self)
    }

    pub fn record_duration(&self) -> Duration {
        Duration::from_secs(self.record_seconds)
    }
}
