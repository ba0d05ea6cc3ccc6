//! The Connect Four game state machine.

use super::action::{DropRequest, TokenAssignment};
use super::contracts::{Contract, DropContract, PlayerIndexValid, TokenAssignmentContract};
use super::invariants::assert_invariants;
use super::rules;
use super::{GameError, Grid, GridDisplay, Outcome, Phase, Square, Token};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Number of players in a match.
pub const PLAYER_COUNT: usize = 2;

/// Complete state of a Connect Four match.
///
/// The state is mutated only through [`set_player_tokens`](Self::set_player_tokens)
/// and [`drop_token`](Self::drop_token); the phase additionally moves to
/// [`Phase::Over`] through [`check_outcome`](Self::check_outcome).
///
/// Turn order is not enforced. Callers decide which player moves next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    grid: Grid,
    players: [Option<Token>; PLAYER_COUNT],
    num_dropped: usize,
    last_drop: Option<(usize, usize)>,
    phase: Phase,
}

impl GameState {
    /// Creates a game with an empty `rows × cols` grid in [`Phase::New`].
    ///
    /// Fails with [`GameError::InvalidArgument`] unless `6 <= rows <= 9`
    /// and `7 <= cols <= 9`.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        let grid = Grid::new(rows, cols)?;
        info!(rows, cols, "Creating new game");
        Ok(Self {
            grid,
            players: [None; PLAYER_COUNT],
            num_dropped: 0,
            last_drop: None,
            phase: Phase::New,
        })
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of grid columns.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Returns true if `(row, col)` lies inside the grid.
    pub fn is_in_bounds(&self, row: usize, col: usize) -> bool {
        self.grid.is_in_bounds(row, col)
    }

    /// Returns the token at `(row, col)`, or `None` if the square is empty.
    pub fn token_at(&self, row: usize, col: usize) -> Result<Option<Token>, GameError> {
        self.grid.get(row, col).map(Square::token).ok_or_else(|| {
            GameError::out_of_bounds(format!(
                "({}, {}) is outside the {}x{} grid",
                row,
                col,
                self.rows(),
                self.cols()
            ))
        })
    }

    /// Read access to the whole grid, for renderers.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Text rendering of the grid.
    pub fn display(&self) -> GridDisplay<'_> {
        GridDisplay::new(&self.grid)
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Assigns tokens to player 0 and player 1.
    ///
    /// Moves [`Phase::New`] to [`Phase::Ready`]. Tokens may be reassigned
    /// while `Ready`. Every check runs first: on error the previous tokens
    /// are kept.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn set_player_tokens(
        &mut self,
        token0: Option<Token>,
        token1: Option<Token>,
    ) -> Result<(), GameError> {
        let assignment = TokenAssignment::new(token0, token1);
        TokenAssignmentContract::pre(self, &assignment)?;

        let (Some(token0), Some(token1)) = (token0, token1) else {
            return Err(GameError::missing_value("player token"));
        };

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.players = [Some(token0), Some(token1)];
        if self.phase == Phase::New {
            debug!("Tokens assigned, game is ready");
            self.phase = Phase::Ready;
        }

        #[cfg(debug_assertions)]
        TokenAssignmentContract::post(&before, self)?;

        Ok(())
    }

    /// Returns the token of `player` (0 or 1).
    pub fn player_token(&self, player: usize) -> Result<Token, GameError> {
        PlayerIndexValid::check(player)?;
        if self.phase == Phase::New {
            return Err(GameError::invalid_state("player tokens have not been assigned"));
        }
        self.players[player]
            .ok_or_else(|| GameError::invalid_state("player tokens have not been assigned"))
    }

    /// Number of tokens dropped so far.
    pub fn num_dropped(&self) -> Result<usize, GameError> {
        self.require_drops("number of dropped tokens")?;
        Ok(self.num_dropped)
    }

    /// Row of the most recent drop.
    pub fn last_drop_row(&self) -> Result<usize, GameError> {
        self.require_last_drop().map(|(row, _)| row)
    }

    /// Column of the most recent drop.
    pub fn last_drop_col(&self) -> Result<usize, GameError> {
        self.require_last_drop().map(|(_, col)| col)
    }

    /// Drops `player`'s token into `col`.
    ///
    /// The token lands in the lowest empty row. The grid square, last-drop
    /// position, counter and phase change together or not at all. Outcome
    /// detection is left to [`check_outcome`](Self::check_outcome).
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn drop_token(&mut self, player: usize, col: usize) -> Result<(), GameError> {
        let request = DropRequest::new(player, col);
        DropContract::pre(self, &request)?;

        let row = self
            .grid
            .landing_row(col)
            .ok_or_else(|| GameError::invalid_state(format!("column {} is full", col)))?;
        let token = self.player_token(player)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.grid.set(row, col, Square::Occupied(token))?;
        self.last_drop = Some((row, col));
        self.num_dropped += 1;
        if self.phase == Phase::Ready {
            debug!("First drop, game is playable");
            self.phase = Phase::Playable;
        }
        debug!(row, col, %token, num_dropped = self.num_dropped, "Token dropped");

        #[cfg(debug_assertions)]
        DropContract::post(&before, self)?;

        Ok(())
    }

    /// Returns true if `token` has four in a row anywhere on the grid.
    pub fn has_connect_four(&self, token: Token) -> bool {
        rules::has_connect_four(&self.grid, token)
    }

    /// Evaluates the grid without changing anything.
    ///
    /// Player 0 is checked first, so if both players somehow hold a run,
    /// player 0 is reported as the winner.
    pub fn outcome(&self) -> Option<Outcome> {
        let winner = self.players.into_iter().enumerate().find_map(|(player, token)| {
            token
                .filter(|&token| self.has_connect_four(token))
                .map(|token| Outcome::Winner { player, token })
        });

        winner.or_else(|| rules::is_full(&self.grid).then_some(Outcome::Draw))
    }

    /// Evaluates the grid and ends the game on a win or a draw.
    ///
    /// Meant to be called after every drop. Repeated calls without a new
    /// drop return the same outcome and leave the phase alone.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn check_outcome(&mut self) -> Option<Outcome> {
        let outcome = self.outcome()?;
        if self.phase != Phase::Over {
            info!(%outcome, "Game over");
            self.phase = Phase::Over;
        }
        assert_invariants(self);
        Some(outcome)
    }

    fn require_drops(&self, what: &str) -> Result<(), GameError> {
        if self.phase.has_drops() {
            Ok(())
        } else {
            Err(GameError::invalid_state(format!(
                "{} is unavailable while the game is {}",
                what, self.phase
            )))
        }
    }

    fn require_last_drop(&self) -> Result<(usize, usize), GameError> {
        self.require_drops("last drop position")?;
        self.last_drop
            .ok_or_else(|| GameError::invalid_state("no token has been dropped"))
    }

    pub(crate) fn dropped(&self) -> usize {
        self.num_dropped
    }

    pub(crate) fn last_drop(&self) -> Option<(usize, usize)> {
        self.last_drop
    }

    pub(crate) fn player_tokens(&self) -> [Option<Token>; PLAYER_COUNT] {
        self.players
    }

    #[cfg(test)]
    pub(crate) fn corrupt_drop_count(&mut self, num_dropped: usize) {
        self.num_dropped = num_dropped;
    }
}
