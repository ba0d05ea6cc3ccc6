//! Gravity invariant: no token floats above an empty square.

use super::Invariant;
use crate::{GameState, Grid};

/// Invariant: every occupied square sits on the bottom row or on another
/// occupied square.
pub struct GravityInvariant;

impl GravityInvariant {
    fn grid_holds(grid: &Grid) -> bool {
        (0..grid.cols()).all(|col| {
            (0..grid.rows().saturating_sub(1)).all(|row| {
                let here = grid.get(row, col);
                let below = grid.get(row + 1, col);
                !matches!((here, below), (Some(h), Some(b)) if !h.is_empty() && b.is_empty())
            })
        })
    }
}

impl Invariant<GameState> for GravityInvariant {
    fn holds(game: &GameState) -> bool {
        Self::grid_holds(game.grid())
    }

    fn description() -> &'static str {
        "Tokens rest on the bottom row or on another token"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Square, Token};

    #[test]
    fn test_stacked_column_holds() {
        let mut grid = Grid::new(6, 7).unwrap();
        grid.set(5, 1, Square::Occupied(Token::Red)).unwrap();
        grid.set(4, 1, Square::Occupied(Token::Yellow)).unwrap();
        assert!(GravityInvariant::grid_holds(&grid));
    }

    #[test]
    fn test_floating_token_violates() {
        let mut grid = Grid::new(6, 7).unwrap();
        grid.set(3, 4, Square::Occupied(Token::Red)).unwrap();
        assert!(!GravityInvariant::grid_holds(&grid));
    }
}
