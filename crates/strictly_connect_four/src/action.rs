//! First-class action types for Connect Four.
//!
//! Actions describe what a caller asks for. They are validated by the
//! contracts before the game state is touched.

use super::Token;
use serde::{Deserialize, Serialize};

/// A request to drop a player's token into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DropRequest {
    /// Index of the acting player (0 or 1).
    pub player: usize,
    /// Target column.
    pub col: usize,
}

impl DropRequest {
    /// Creates a new drop request.
    pub fn new(player: usize, col: usize) -> Self {
        Self { player, col }
    }
}

impl std::fmt::Display for DropRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {} -> column {}", self.player, self.col)
    }
}

/// A request to assign tokens to both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenAssignment {
    /// Token for player 0.
    pub token0: Option<Token>,
    /// Token for player 1.
    pub token1: Option<Token>,
}

impl TokenAssignment {
    /// Creates a new token assignment.
    pub fn new(token0: Option<Token>, token1: Option<Token>) -> Self {
        Self { token0, token1 }
    }
}
