//! Game configuration loaded from TOML.

use crate::messages::Language;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a play session.
///
/// ```toml
/// language = "en"
/// seed = 42
/// show_guide = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Language of the game text.
    #[serde(default)]
    language: Language,

    /// Seed for the computer's tie-breaking. Unset means OS entropy.
    #[serde(default)]
    seed: Option<u64>,

    /// Print the numbered position guide at the start of each round.
    #[serde(default = "default_show_guide")]
    show_guide: bool,
}

fn default_show_guide() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            seed: None,
            show_guide: default_show_guide(),
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

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(language = %config.language, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line values on top of the file's values.
    pub fn with_overrides(
        mut self,
        language: Option<Language>,
        seed: Option<u64>,
        hide_guide: bool,
    ) -> Self {
        if let Some(language) = language {
            self.language = language;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if hide_guide {
            self.show_guide = false;
        }
        self
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
