//! Game configuration loaded from TOML and command-line flags.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_guessing::Difficulty;
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_guessing.toml";

/// Settings for a game session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Difficulty used when the player leaves the difficulty prompt empty.
    #[serde(default)]
    default_difficulty: Difficulty,

    /// Seed for reproducible targets. Drawn from entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(default_difficulty: Difficulty, seed: Option<u64>) -> Self {
        Self {
            default_difficulty,
            seed,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(default_difficulty = %config.default_difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the session configuration from parsed flags.
    ///
    /// An explicit `--config` must exist. Otherwise [`DEFAULT_CONFIG_FILE`]
    /// is read if present. Flags override values from the file.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        Self::resolve_in(cli, Path::new("."))
    }

    /// Like [`GameConfig::resolve`], looking for [`DEFAULT_CONFIG_FILE`] in
    /// `dir` instead of the working directory.
    #[instrument(skip(cli), fields(dir = %dir.display()))]
    pub fn resolve_in(cli: &Cli, dir: &Path) -> Result<Self, ConfigError> {
        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if default_path.is_file() => Self::from_file(&default_path)?,
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };

        Ok(base.with_overrides(cli.difficulty, cli.seed))
    }

    /// Replaces file values with any flags that were given.
    pub fn with_overrides(self, difficulty: Option<Difficulty>, seed: Option<u64>) -> Self {
        Self {
            default_difficulty: difficulty.unwrap_or(self.default_difficulty),
            seed: seed.or(self.seed),
        }
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
