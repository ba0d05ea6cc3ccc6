//! Game lifecycle phases and outcomes.

use super::Token;
use serde::{Deserialize, Serialize};

/// Lifecycle stage of a match.
///
/// Phases only move forward: `New` → `Ready` → `Playable` → `Over`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::Display,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Phase {
    /// Constructed; player tokens not yet assigned.
    New,
    /// Tokens assigned; no drops yet.
    Ready,
    /// At least one drop made; match ongoing.
    Playable,
    /// A win or a full-grid draw has been detected.
    Over,
}

impl Phase {
    /// Returns true if tokens may be dropped in this phase.
    pub fn accepts_drops(self) -> bool {
        match self {
            Phase::Ready | Phase::Playable => true,
            Phase::New | Phase::Over => false,
        }
    }

    /// Returns true if at least one drop has been made.
    pub fn has_drops(self) -> bool {
        match self {
            Phase::Playable | Phase::Over => true,
            Phase::New | Phase::Ready => false,
        }
    }
}

/// Outcome of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed four in a row.
    Winner {
        /// Index of the winning player (0 or 1).
        player: usize,
        /// The winning player's token.
        token: Token,
    },
    /// The grid filled up with no four in a row.
    Draw,
}

impl Outcome {
    /// Returns the winning player index if there is one.
    pub fn winner(&self) -> Option<usize> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the match was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { player, token } => write!(f, "Player {} ({}) wins", player, token),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order_is_forward() {
        assert!(Phase::New < Phase::Ready);
        assert!(Phase::Ready < Phase::Playable);
        assert!(Phase::Playable < Phase::Over);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Playable.to_string(), "PLAYABLE");
    }

    #[test]
    fn test_outcome_display() {
        let outcome = Outcome::Winner {
            player: 1,
            token: Token::Blue,
        };
        assert_eq!(outcome.to_string(), "Player 1 (Blue) wins");
        assert_eq!(outcome.winner(), Some(1));
        assert!(Outcome::Draw.is_draw());
    }
}
