//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_connect_four::Token;
use tracing::{debug, info, instrument};

/// Settings for a single match.
///
/// ```toml
/// rows = 6
/// cols = 7
/// token0 = "red"
/// token1 = "yellow"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of grid rows (6-9).
    #[serde(default = "default_rows")]
    rows: usize,

    /// Number of grid columns (7-9).
    #[serde(default = "default_cols")]
    cols: usize,

    /// Token for player 0.
    #[serde(default = "default_token0")]
    token0: Option<Token>,

    /// Token for player 1.
    #[serde(default = "default_token1")]
    token1: Option<Token>,
}

fn default_rows() -> usize {
    6
}

fn default_cols() -> usize {
    7
}

fn default_token0() -> Option<Token> {
    Some(Token::Red)
}

fn default_token1() -> Option<Token> {
    Some(Token::Yellow)
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            token0: default_token0(),
            token1: default_token1(),
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

        let config = Self::from_toml(&content)?;
        info!(rows = config.rows, cols = config.cols, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces each setting for which an override is given.
    pub fn with_overrides(
        self,
        rows: Option<usize>,
        cols: Option<usize>,
        token0: Option<Token>,
        token1: Option<Token>,
    ) -> Self {
        Self {
            rows: rows.unwrap_or(self.rows),
            cols: cols.unwrap_or(self.cols),
            token0: token0.or(self.token0),
            token1: token1.or(self.token1),
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
        let config = GameConfig::default();
        assert_eq!(*config.rows(), 6);
        assert_eq!(*config.cols(), 7);
        assert_eq!(*config.token0(), Some(Token::Red));
        assert_eq!(*config.token1(), Some(Token::Yellow));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GameConfig::from_toml("rows = 9\ntoken1 = \"blue\"\n").unwrap();
        assert_eq!(*config.rows(), 9);
        assert_eq!(*config.cols(), 7);
        assert_eq!(*config.token1(), Some(Token::Blue));
    }

    #[test]
    fn test_overrides_win() {
        let config = GameConfig::default().with_overrides(Some(8), None, Some(Token::Green), None);
        assert_eq!(*config.rows(), 8);
        assert_eq!(*config.cols(), 7);
        assert_eq!(*config.token0(), Some(Token::Green));
        assert_eq!(*config.token1(), Some(Token::Yellow));
    }

    #[test]
    fn test_unknown_token_rejected() {
        let err = GameConfig::from_toml("token0 = \"magenta\"\n").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
