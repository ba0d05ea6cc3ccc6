//! First-class invariants for Connect Four.
//!
//! Invariants are logical properties that must hold throughout a match.
//! They are testable independently and re-checked after every drop in
//! debug builds.

mod drop_count;
mod gravity;
mod last_drop;

pub use drop_count::DropCountInvariant;
pub use gravity::GravityInvariant;
pub use last_drop::LastDropInvariant;

use crate::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant a Connect Four game must satisfy.
pub type ConnectFourInvariants = (DropCountInvariant, GravityInvariant, LastDropInvariant);

/// Checks all Connect Four invariants (debug builds only).
#[cfg(debug_assertions)]
pub fn assert_invariants(game: &GameState) {
    if let Err(violations) = ConnectFourInvariants::check_all(game) {
        for violation in &violations {
            tracing::warn!(description = %violation.description, "Invariant violated");
        }
        debug_assert!(violations.is_empty(), "Invariants violated: {:?}", violations);
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_game: &GameState) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Token;

    #[test]
    fn test_fresh_game_satisfies_all() {
        let game = GameState::new(6, 7).unwrap();
        assert!(ConnectFourInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_after_drops_satisfies_all() {
        let mut game = GameState::new(7, 8).unwrap();
        game.set_player_tokens(Some(Token::Green), Some(Token::Purple))
            .unwrap();
        for (player, col) in [(0, 0), (1, 0), (0, 7), (1, 3), (0, 3)] {
            game.drop_token(player, col).unwrap();
            assert!(ConnectFourInvariants::check_all(&game).is_ok());
        }
    }

    #[test]
    fn test_violation_collects_descriptions() {
        let mut game = GameState::new(6, 7).unwrap();
        game.set_player_tokens(Some(Token::Red), Some(Token::Yellow))
            .unwrap();
        game.drop_token(0, 2).unwrap();
        game.corrupt_drop_count(5);

        let violations = ConnectFourInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, DropCountInvariant::description());
    }
}
