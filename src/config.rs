//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use strictly_twenty48::DEFAULT_BOARD_SIZE;
use tracing::{debug, info, instrument};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_2048.toml";

/// Settings for a play session, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct AppConfig {
    /// Side length of the board.
    board_size: usize,

    /// JSON file holding the best score.
    best_score_path: PathBuf,

    /// File receiving logs while the terminal UI is running.
    log_file: PathBuf,

    /// Fixed seed for reproducible games.
    seed: Option<u64>,

    /// Bind h/j/k/l as moves.
    vim_keys: bool,

    /// Bind w/a/s/d as moves.
    wasd_keys: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            best_score_path: PathBuf::from("strictly_2048_best.json"),
            log_file: PathBuf::from("strictly_2048.log"),
            seed: None,
            vim_keys: false,
            wasd_keys: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or
    /// holds invalid values.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed TOML or invalid values.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    ///
    /// # Errors
    ///
    /// A present but unreadable or invalid file is still an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::metadata(path.as_ref()) {
            Ok(_) => Self::from_file(path),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::new(format!("Failed to read config file: {}", e))),
        }
    }

    /// Checks values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the board size is zero.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::new("board_size must be at least 1".to_string()));
        }
        Ok(())
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
