//! Contract-based validation for Connect Four.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions run before any mutation, so a failed check
//! leaves the game exactly as it was.

use super::action::{DropRequest, TokenAssignment};
use super::invariants::{ConnectFourInvariants, InvariantSet};
use super::{GameError, GameState, Phase, PLAYER_COUNT};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Drop Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the player index is 0 or 1.
pub struct PlayerIndexValid;

impl PlayerIndexValid {
    /// Checks that `player` names one of the two players.
    pub fn check(player: usize) -> Result<(), GameError> {
        if player < PLAYER_COUNT {
            Ok(())
        } else {
            Err(GameError::invalid_argument(format!(
                "player must be 0 or 1, got {}",
                player
            )))
        }
    }
}

/// Precondition: the column lies inside the grid.
pub struct ColumnInBounds;

impl ColumnInBounds {
    /// Checks `0 <= col < cols`.
    pub fn check(drop: &DropRequest, game: &GameState) -> Result<(), GameError> {
        if drop.col < game.cols() {
            Ok(())
        } else {
            Err(GameError::out_of_bounds(format!(
                "column {} (grid has {} columns)",
                drop.col,
                game.cols()
            )))
        }
    }
}

/// Precondition: the game is in a phase that accepts drops.
pub struct PhaseAcceptsDrops;

impl PhaseAcceptsDrops {
    /// Checks that the phase is `Ready` or `Playable`.
    pub fn check(game: &GameState) -> Result<(), GameError> {
        if game.phase().accepts_drops() {
            Ok(())
        } else {
            Err(GameError::invalid_state(format!(
                "cannot drop a token while the game is {}",
                game.phase()
            )))
        }
    }
}

/// Precondition: the target column still has an empty square.
pub struct ColumnHasSpace;

impl ColumnHasSpace {
    /// Checks that the column is not full.
    pub fn check(drop: &DropRequest, game: &GameState) -> Result<(), GameError> {
        if game.grid().is_column_full(drop.col) {
            Err(GameError::invalid_state(format!("column {} is full", drop.col)))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for a drop.
pub struct LegalDrop;

impl LegalDrop {
    /// Validates all preconditions for a drop, in order.
    #[instrument(skip(game))]
    pub fn check(drop: &DropRequest, game: &GameState) -> Result<(), GameError> {
        PlayerIndexValid::check(drop.player)?;
        ColumnInBounds::check(drop, game)?;
        PhaseAcceptsDrops::check(game)?;
        ColumnHasSpace::check(drop, game)?;
        Ok(())
    }
}

/// Contract for drop actions.
///
/// Preconditions:
/// - Player index is 0 or 1
/// - Column is inside the grid
/// - Phase is `Ready` or `Playable`
/// - Column is not full
///
/// Postconditions:
/// - Exactly one more token on the grid
/// - All [`ConnectFourInvariants`] hold
pub struct DropContract;

impl Contract<GameState, DropRequest> for DropContract {
    fn pre(game: &GameState, drop: &DropRequest) -> Result<(), GameError> {
        LegalDrop::check(drop, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), GameError> {
        let added = after.grid().occupied_count() as isize - before.grid().occupied_count() as isize;
        if added != 1 {
            warn!(added, "Drop did not add exactly one token");
            return Err(GameError::InvariantViolation(format!(
                "Postcondition failed: drop added {} tokens",
                added
            )));
        }

        ConnectFourInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Token Assignment Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: both tokens are supplied.
pub struct TokensPresent;

impl TokensPresent {
    /// Checks that neither token is missing.
    pub fn check(assignment: &TokenAssignment) -> Result<(), GameError> {
        match (assignment.token0, assignment.token1) {
            (Some(_), Some(_)) => Ok(()),
            (None, _) => Err(GameError::missing_value("token for player 0")),
            (_, None) => Err(GameError::missing_value("token for player 1")),
        }
    }
}

/// Precondition: the two tokens differ.
pub struct TokensDistinct;

impl TokensDistinct {
    /// Checks that the players were given different tokens.
    pub fn check(assignment: &TokenAssignment) -> Result<(), GameError> {
        match (assignment.token0, assignment.token1) {
            (Some(a), Some(b)) if a == b => Err(GameError::invalid_argument(format!(
                "both players cannot use {}",
                a
            ))),
            _ => Ok(()),
        }
    }
}

/// Precondition: tokens may only be assigned before the first drop.
pub struct PhaseAcceptsTokens;

impl PhaseAcceptsTokens {
    /// Checks that the phase is `New` or `Ready`.
    pub fn check(game: &GameState) -> Result<(), GameError> {
        match game.phase() {
            Phase::New | Phase::Ready => Ok(()),
            phase @ (Phase::Playable | Phase::Over) => Err(GameError::invalid_state(format!(
                "cannot assign tokens while the game is {}",
                phase
            ))),
        }
    }
}

/// Contract for token assignment.
///
/// Preconditions:
/// - Both tokens supplied
/// - Tokens are distinct
/// - Phase is `New` or `Ready`
///
/// Postconditions:
/// - Phase is `Ready`
/// - Both player tokens are set and distinct
pub struct TokenAssignmentContract;

impl Contract<GameState, TokenAssignment> for TokenAssignmentContract {
    #[instrument(skip(game))]
    fn pre(game: &GameState, assignment: &TokenAssignment) -> Result<(), GameError> {
        TokensPresent::check(assignment)?;
        TokensDistinct::check(assignment)?;
        PhaseAcceptsTokens::check(game)?;
        Ok(())
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), GameError> {
        if after.phase() != Phase::Ready {
            return Err(GameError::InvariantViolation(format!(
                "Postcondition failed: phase is {} after token assignment",
                after.phase()
            )));
        }
        match after.player_tokens() {
            [Some(a), Some(b)] if a != b => Ok(()),
            tokens => Err(GameError::InvariantViolation(format!(
                "Postcondition failed: player tokens {:?} are not distinct",
                tokens
            ))),
        }
    }
}
