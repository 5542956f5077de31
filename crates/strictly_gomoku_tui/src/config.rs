//! Setup configuration loaded from TOML and overridden by CLI flags.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;
use strictly_gomoku::WinRule;
use tracing::{debug, info, instrument};

/// Board sizes offered on the setup screen.
pub const SIZE_CHOICES: RangeInclusive<usize> = 3..=25;

/// Run lengths offered on the setup screen.
pub const RUN_LENGTH_CHOICES: RangeInclusive<usize> = 3..=7;

/// Initial values for the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupConfig {
    /// Cells per side.
    #[serde(default = "default_size")]
    size: usize,

    /// Consecutive marks needed to win.
    #[serde(default = "default_run_length")]
    run_length: usize,
}

#[instrument]
fn default_size() -> usize {
    3
}

#[instrument]
fn default_run_length() -> usize {
    3
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            run_length: default_run_length(),
        }
    }
}

impl SetupConfig {
    /// Creates a configuration with explicit values.
    pub fn new(size: usize, run_length: usize) -> Self {
        Self { size, run_length }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(size = config.size, run_length = config.run_length, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Cells per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Consecutive marks needed to win.
    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Replaces values given on the command line.
    pub fn with_overrides(mut self, size: Option<usize>, run_length: Option<usize>) -> Self {
        if let Some(size) = size {
            self.size = size;
        }
        if let Some(run_length) = run_length {
            self.run_length = run_length;
        }
        self
    }

    /// Validates the values as a game rule.
    #[instrument]
    pub fn rule(&self) -> Result<WinRule, ConfigError> {
        WinRule::new(self.size, self.run_length).map_err(|e| ConfigError::new(e.to_string()))
    }
}

/// Configuration error.
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
    #[instrument(skip(message))]
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
    fn test_defaults_fill_missing_keys() {
        let config = SetupConfig::from_toml("size = 10").unwrap();
        assert_eq!(config, SetupConfig::new(10, 3));
        assert_eq!(SetupConfig::from_toml("").unwrap(), SetupConfig::default());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = SetupConfig::from_toml("size = \"big\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let config = SetupConfig::new(10, 5).with_overrides(None, Some(4));
        assert_eq!(config, SetupConfig::new(10, 4));
    }

    #[test]
    fn test_rule_validation() {
        assert!(SetupConfig::new(3, 3).rule().is_ok());
        let err = SetupConfig::new(3, 5).rule().unwrap_err();
        assert!(err.message.contains("Run length 5"));
    }

    #[test]
    fn test_missing_file() {
        assert!(SetupConfig::from_file("/nonexistent/strictly_gomoku.toml").is_err());
    }
}
