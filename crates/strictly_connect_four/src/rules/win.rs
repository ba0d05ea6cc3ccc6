//! Four-in-a-row detection.

use crate::{Grid, Square, Token};
use tracing::instrument;

/// Number of aligned tokens needed to win.
pub const RUN_LENGTH: usize = 4;

/// A direction a run can extend in from its starting square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Down and to the right.
    DiagonalDown,
    /// Up and to the right.
    DiagonalUp,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// Row and column step for one square along this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }

    /// Position `steps` squares from `(row, col)`, if it is on the grid.
    fn step(self, grid: &Grid, row: usize, col: usize, steps: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.delta();
        let steps = steps as isize;
        let row = row.checked_add_signed(dr * steps)?;
        let col = col.checked_add_signed(dc * steps)?;
        grid.is_in_bounds(row, col).then_some((row, col))
    }
}

/// Returns true if the run of [`RUN_LENGTH`] squares starting at
/// `(row, col)` and heading in `direction` is entirely `token`.
fn run_from(grid: &Grid, token: Token, row: usize, col: usize, direction: Direction) -> bool {
    (0..RUN_LENGTH).all(|i| {
        direction
            .step(grid, row, col, i)
            .and_then(|(r, c)| grid.get(r, c))
            == Some(Square::Occupied(token))
    })
}

/// Checks whether `token` has four in a row anywhere on the grid.
///
/// Every square is tried as the start of a run in each [`Direction`].
#[instrument(skip(grid))]
pub fn has_connect_four(grid: &Grid, token: Token) -> bool {
    (0..grid.rows()).any(|row| {
        (0..grid.cols()).any(|col| {
            Direction::ALL
                .iter()
                .any(|&direction| run_from(grid, token, row, col, direction))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(token: Token, cells: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(6, 7).unwrap();
        for &(row, col) in cells {
            grid.set(row, col, Square::Occupied(token)).unwrap();
        }
        grid
    }

    #[test]
    fn test_empty_grid_has_no_run() {
        let grid = Grid::new(6, 7).unwrap();
        assert!(!has_connect_four(&grid, Token::Red));
    }

    #[test]
    fn test_horizontal_run() {
        let grid = grid_with(Token::Red, &[(5, 0), (5, 1), (5, 2), (5, 3)]);
        assert!(has_connect_four(&grid, Token::Red));
        assert!(!has_connect_four(&grid, Token::Yellow));
    }

    #[test]
    fn test_horizontal_run_at_right_edge() {
        let grid = grid_with(Token::Red, &[(0, 3), (0, 4), (0, 5), (0, 6)]);
        assert!(has_connect_four(&grid, Token::Red));
    }

    #[test]
    fn test_vertical_run() {
        let grid = grid_with(Token::Yellow, &[(2, 6), (3, 6), (4, 6), (5, 6)]);
        assert!(has_connect_four(&grid, Token::Yellow));
    }

    #[test]
    fn test_ascending_diagonal() {
        let grid = grid_with(Token::Red, &[(5, 0), (4, 1), (3, 2), (2, 3)]);
        assert!(has_connect_four(&grid, Token::Red));
    }

    #[test]
    fn test_descending_diagonal() {
        let grid = grid_with(Token::Red, &[(2, 0), (3, 1), (4, 2), (5, 3)]);
        assert!(has_connect_four(&grid, Token::Red));
    }

    #[test]
    fn test_three_is_not_enough() {
        let grid = grid_with(Token::Red, &[(5, 0), (5, 1), (5, 2)]);
        assert!(!has_connect_four(&grid, Token::Red));
    }

    #[test]
    fn test_run_does_not_wrap_rows() {
        let grid = grid_with(Token::Red, &[(4, 5), (4, 6), (5, 0), (5, 1)]);
        assert!(!has_connect_four(&grid, Token::Red));
    }

    #[test]
    fn test_mixed_tokens_break_run() {
        let mut grid = grid_with(Token::Red, &[(5, 0), (5, 1), (5, 3), (5, 4)]);
        grid.set(5, 2, Square::Occupied(Token::Yellow)).unwrap();
        assert!(!has_connect_four(&grid, Token::Red));
    }
}
