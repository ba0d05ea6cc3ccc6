//! Command-line interface for strictly_connect_four.

use crate::config::{ConfigError, GameConfig};
use clap::Parser;
use strictly_connect_four::Token;

/// Strictly Connect Four - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_connect_four")]
#[command(about = "Play Connect Four in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Number of grid rows (6-9)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of grid columns (7-9)
    #[arg(long)]
    pub cols: Option<usize>,

    /// Token for player 0 (red, yellow, blue, green, purple, orange)
    #[arg(long)]
    pub token0: Option<Token>,

    /// Token for player 1
    #[arg(long)]
    pub token1: Option<Token>,
}

impl Cli {
    /// Resolves the game settings: config file first, then flag overrides.
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        Ok(base.with_overrides(self.rows, self.cols, self.token0, self.token1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_flags() {
        let cli = Cli::try_parse_from([
            "strictly_connect_four",
            "--rows",
            "9",
            "--token0",
            "Purple",
        ])
        .unwrap();
        let config = cli.game_config().unwrap();
        assert_eq!(*config.rows(), 9);
        assert_eq!(*config.token0(), Some(Token::Purple));
        assert_eq!(*config.token1(), Some(Token::Yellow));
    }

    #[test]
    fn test_rejects_unknown_token() {
        assert!(Cli::try_parse_from(["strictly_connect_four", "--token1", "pink"]).is_err());
    }
}
