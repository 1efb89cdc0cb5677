//! User settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings file read when no `--config` is given.
pub const DEFAULT_CONFIG_PATH: &str = "noughts.toml";

/// Presentation and logging preferences.
///
/// Every field has a default, so a partial file (or no file) is fine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How long a flashed status message stays up, in milliseconds.
    flash_ms: u64,

    /// How long the "Board Reset!" message stays up, in milliseconds.
    reset_flash_ms: u64,

    /// File receiving logs while the terminal UI owns the screen.
    log_file: PathBuf,

    /// Default `tracing` filter when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            flash_ms: 2000,
            reset_flash_ms: 1500,
            log_file: PathBuf::from("noughts.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;
        let settings = Self::from_toml_str(&content)?;
        info!("Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path` when it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads settings for the command line.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and defaults are used otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Self::load_or_default(DEFAULT_CONFIG_PATH),
        }
    }

    /// Overrides the log file.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Flash duration for rejected moves.
    pub fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.flash_ms)
    }

    /// Flash duration after a reset.
    pub fn reset_flash_duration(&self) -> Duration {
        Duration::from_millis(self.reset_flash_ms)
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.flash_duration(), Duration::from_millis(2000));
        assert_eq!(settings.reset_flash_duration(), Duration::from_millis(1500));
        assert_eq!(settings.log_filter(), "info");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::from_toml_str("flash_ms = 500\n").unwrap();
        assert_eq!(*settings.flash_ms(), 500);
        assert_eq!(*settings.reset_flash_ms(), 1500);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let err = Settings::from_toml_str("flash_ms = \"soon\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse settings"));
        assert!(err.file.ends_with("settings.rs"));
    }

    #[test]
    fn test_log_file_override() {
        let settings = Settings::default().with_log_file(PathBuf::from("other.log"));
        assert_eq!(settings.log_file(), &PathBuf::from("other.log"));
    }
}
