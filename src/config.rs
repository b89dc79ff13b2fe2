//! Host configuration
//!
//! An optional TOML file chooses the data directory and the timer durations
//! used before any snapshot exists:
//!
//! ```toml
//! data_dir = "/home/me/.local/share/pomotodo"
//!
//! [pomodoro]
//! work_minutes = 50
//! short_break_minutes = 10
//! long_break_minutes = 30
//! ```

use crate::pomodoro::TimerSettings;
use crate::validation::ValidationError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "pomotodo";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PomodoroConfig {
    pub work_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the snapshot files
    pub data_dir: Option<PathBuf>,
    pub pomodoro: PomodoroConfig,
}

impl AppConfig {
    /// Default location of the config file, `<config dir>/pomotodo/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load the configuration
    ///
    /// # Arguments
    /// * `path` - Explicit config file, which must exist; `None` uses the
    ///   default location and falls back to defaults when it is absent
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Data directory: `override_dir`, else the configured one, else
    /// `<data dir>/pomotodo`, else `.pomotodo` in the working directory
    pub fn data_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.data_dir.clone())
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR)))
            .unwrap_or_else(|| PathBuf::from(format!(".{APP_DIR}")))
    }

    /// Initial timer durations
    pub fn timer_settings(&self) -> Result<TimerSettings, ValidationError> {
        TimerSettings::from_minutes(
            self.pomodoro.work_minutes,
            self.pomodoro.short_break_minutes,
            self.pomodoro.long_break_minutes,
        )
    }
}
