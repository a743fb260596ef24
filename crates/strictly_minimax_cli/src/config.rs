//! Game configuration for the driver.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_minimax::Scoring;
use tracing::{debug, info, instrument};

/// Engine strength, expressed as a search depth.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// One ply of lookahead.
    Low,
    /// Five plies.
    Medium,
    /// Full lookahead on a 3x3 board.
    #[default]
    High,
}

impl Difficulty {
    /// Search depth for this difficulty.
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Low => 1,
            Difficulty::Medium => 5,
            Difficulty::High => 9,
        }
    }
}

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Engine strength.
    #[serde(default)]
    difficulty: Difficulty,

    /// How the engine values wins.
    #[serde(default)]
    scoring: Scoring,

    /// Whether the human (X) moves first.
    #[serde(default = "default_human_first")]
    human_first: bool,
}

#[instrument]
fn default_human_first() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            scoring: Scoring::default(),
            human_first: default_human_first(),
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

        info!(
            difficulty = %config.difficulty,
            scoring = %config.scoring,
            human_first = config.human_first,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Applies command-line overrides on top of file or default values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        difficulty: Option<Difficulty>,
        scoring: Option<Scoring>,
        engine_first: bool,
    ) -> Self {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(scoring) = scoring {
            self.scoring = scoring;
        }
        if engine_first {
            self.human_first = false;
        }
        self
    }

    /// Search depth implied by the difficulty.
    pub fn depth(&self) -> u32 {
        self.difficulty.depth()
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
