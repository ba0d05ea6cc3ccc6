//! Core domain types for Connect Four.

use serde::{Deserialize, Serialize};

/// A colored game piece.
///
/// Any two distinct tokens may be assigned to the two players. Names parse
/// case-insensitively (`"red"`, `"Red"`, `"RED"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    /// Red piece.
    Red,
    /// Yellow piece.
    Yellow,
    /// Blue piece.
    Blue,
    /// Green piece.
    Green,
    /// Purple piece.
    Purple,
    /// Orange piece.
    Orange,
}

impl Token {
    /// Single-character symbol used when rendering the grid.
    pub fn symbol(self) -> char {
        match self {
            Token::Red => 'R',
            Token::Yellow => 'Y',
            Token::Blue => 'B',
            Token::Green => 'G',
            Token::Purple => 'P',
            Token::Orange => 'O',
        }
    }
}

/// A square of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// No token has been dropped here.
    #[default]
    Empty,
    /// Square holds a token.
    Occupied(Token),
}

impl Square {
    /// Returns the token in this square, if any.
    pub fn token(self) -> Option<Token> {
        match self {
            Square::Empty => None,
            Square::Occupied(token) => Some(token),
        }
    }

    /// Returns true if no token occupies this square.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

impl From<Option<Token>> for Square {
    fn from(token: Option<Token>) -> Self {
        token.map_or(Square::Empty, Square::Occupied)
    }
}
