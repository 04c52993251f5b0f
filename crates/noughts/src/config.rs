//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    #[serde(default = "default_size")]
    size: usize,

    /// Display name of the computer opponent.
    #[serde(default = "default_computer_name")]
    computer_name: String,

    /// Glyph drawn for the computer opponent.
    #[serde(default = "default_computer_glyph")]
    computer_glyph: char,

    /// Glyphs offered to the first and second seat when none is typed.
    #[serde(default = "default_glyphs")]
    default_glyphs: [char; 2],
}

fn default_size() -> usize {
    3
}

fn default_computer_name() -> String {
    "Terminator".to_string()
}

fn default_computer_glyph() -> char {
    'T'
}

fn default_glyphs() -> [char; 2] {
    ['X', 'O']
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            computer_name: default_computer_name(),
            computer_glyph: default_computer_glyph(),
            default_glyphs: default_glyphs(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            let config = Self::from_file(path)?;
            info!(size = config.size, "Config loaded");
            Ok(config)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns a copy with the board size replaced.
    pub fn with_size(mut self, size: usize) -> Result<Self, ConfigError> {
        self.size = size;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::new("Board size must be at least 1".to_string()));
        }
        if self.default_glyphs[0] == self.default_glyphs[1] {
            return Err(ConfigError::new(format!(
                "Default glyphs must differ, both are '{}'",
                self.default_glyphs[0]
            )));
        }
        if self.computer_glyph == self.default_glyphs[0] {
            return Err(ConfigError::new(format!(
                "Computer glyph '{}' clashes with the first player's default glyph",
                self.computer_glyph
            )));
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
