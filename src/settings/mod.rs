// Persisted application settings: theme preference and event definition

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::theme::ThemePreference;

const APP_DIR: &str = "eventdown";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not determine a configuration directory")]
    NoConfigDir,
    #[error("could not access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything the application persists. Read once at startup; the theme is
/// rewritten on every toggle, the event definition only changes by editing
/// the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: ThemePreference,
    #[serde(default = "default_event_name")]
    pub event_name: String,
    #[serde(default = "default_target")]
    pub target: DateTime<Local>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            event_name: default_event_name(),
            target: default_target(),
        }
    }
}

fn default_event_name() -> String {
    "Halloween 2025".to_owned()
}

/// Built-in event deadline; a trusted constant.
pub fn default_target() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 10, 31, 23, 59, 59)
        .earliest()
        .expect("built-in event date is a valid local time")
}

impl Settings {
    /// Loads the persisted settings, falling back to defaults (light theme)
    /// when no file exists or the store is unusable. Never fails.
    pub fn load() -> Self {
        match config_file_path() {
            Some(path) => match Self::load_from_file(&path) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("settings at {} unusable ({e}), using defaults", path.display());
                    Self::default()
                }
            },
            None => {
                warn!("no configuration directory available, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Best-effort write; callers log the error and move on.
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = config_file_path().ok_or(SettingsError::NoConfigDir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        self.save_to_file(path)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join("logs"))
}
