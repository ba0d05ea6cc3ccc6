//! Interactive game loop over an injected line source.

use crate::config::GameConfig;
use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use strictly_connect_four::{GameError, GameState, Outcome, PLAYER_COUNT};
use tracing::{debug, info, instrument, warn};

/// Error that stops the game loop.
#[derive(Debug, Display, Error, From)]
pub enum DriverError {
    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),

    /// The game could not be set up.
    #[display("Game error: {}", _0)]
    Game(GameError),
}

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Drop into this column.
    Drop(usize),
    /// Leave the match.
    Quit,
}

impl Command {
    /// Parses a trimmed input line.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            return Ok(Command::Quit);
        }
        line.parse::<usize>()
            .map(Command::Drop)
            .map_err(|_| format!("'{}' is not a column number", line))
    }
}

/// Runs a two-player match, reading one column per line from `input` and
/// writing the grid and prompts to `output`.
///
/// Players alternate; an invalid move re-prompts the same player.
#[derive(Debug)]
pub struct Driver<R, W> {
    game: GameState,
    input: R,
    output: W,
    current: usize,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    /// Creates a driver for a game already in the `Ready` phase.
    pub fn new(game: GameState, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
            current: 0,
        }
    }

    /// Builds the game from `config` and assigns the configured tokens.
    #[instrument(skip(input, output))]
    pub fn from_config(config: &GameConfig, input: R, output: W) -> Result<Self, GameError> {
        let mut game = GameState::new(*config.rows(), *config.cols())?;
        game.set_player_tokens(*config.token0(), *config.token1())?;
        Ok(Self::new(game, input, output))
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Consumes the driver, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until the game ends, the player quits, or input runs out.
    ///
    /// Returns the outcome, or `None` if the match was abandoned.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Option<Outcome>, DriverError> {
        loop {
            if let Some(outcome) = self.game.check_outcome() {
                write!(self.output, "{}", self.game.display())?;
                writeln!(self.output, "{}", outcome)?;
                info!(%outcome, "Match finished");
                return Ok(Some(outcome));
            }

            write!(self.output, "{}", self.game.display())?;
            let token = self.game.player_token(self.current)?;
            write!(
                self.output,
                "Player {} ({}), choose a column: ",
                self.current, token
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                info!("Input ended before the match finished");
                return Ok(None);
            }

            match Command::parse(&line) {
                Ok(Command::Quit) => {
                    info!(player = self.current, "Player quit");
                    return Ok(None);
                }
                Ok(Command::Drop(col)) => match self.game.drop_token(self.current, col) {
                    Ok(()) => {
                        debug!(player = self.current, col, "Move accepted");
                        self.current = (self.current + 1) % PLAYER_COUNT;
                    }
                    Err(e) => {
                        warn!(player = self.current, col, error = %e, "Move rejected");
                        writeln!(self.output, "{}", e)?;
                    }
                },
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(Command::parse("3\n"), Ok(Command::Drop(3)));
        assert_eq!(Command::parse(" QUIT "), Ok(Command::Quit));
        assert!(Command::parse("-1").is_err());
        assert!(Command::parse("left").is_err());
    }
}
