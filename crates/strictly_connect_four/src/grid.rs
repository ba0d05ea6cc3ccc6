//! Fixed-size playing grid.

use super::{GameError, Square};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::instrument;

/// Supported numbers of rows.
pub const ROW_RANGE: RangeInclusive<usize> = 6..=9;

/// Supported numbers of columns.
pub const COL_RANGE: RangeInclusive<usize> = 7..=9;

/// A `rows × cols` grid of squares.
///
/// Squares are stored in row-major order. Row 0 is the top of the grid,
/// so tokens fall toward `rows - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    squares: Vec<Square>,
}

impl Grid {
    /// Creates an empty grid.
    ///
    /// Fails with [`GameError::InvalidArgument`] unless `rows` is in
    /// [`ROW_RANGE`] and `cols` is in [`COL_RANGE`].
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        if !ROW_RANGE.contains(&rows) || !COL_RANGE.contains(&cols) {
            return Err(GameError::invalid_argument(format!(
                "unsupported grid size {}x{} (rows must be {}..={}, columns {}..={})",
                rows,
                cols,
                ROW_RANGE.start(),
                ROW_RANGE.end(),
                COL_RANGE.start(),
                COL_RANGE.end(),
            )));
        }

        Ok(Self {
            rows,
            cols,
            squares: vec![Square::Empty; rows * cols],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if `(row, col)` lies inside the grid.
    pub fn is_in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Gets the square at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        if self.is_in_bounds(row, col) {
            Some(self.squares[row * self.cols + col])
        } else {
            None
        }
    }

    /// Sets the square at `(row, col)`.
    pub(crate) fn set(&mut self, row: usize, col: usize, square: Square) -> Result<(), GameError> {
        if !self.is_in_bounds(row, col) {
            return Err(GameError::out_of_bounds(format!("({}, {})", row, col)));
        }
        self.squares[row * self.cols + col] = square;
        Ok(())
    }

    /// Returns the lowest empty row of `col`, or `None` if the column is
    /// full or out of bounds.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.squares[row * self.cols + col].is_empty())
    }

    /// Returns true if `col` has no empty square left.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col).is_none()
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Returns true if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over the grid one row at a time, top row first.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Token;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(6, 7).unwrap();
        assert_eq!(grid.occupied_count(), 0);
        assert!(grid.squares().iter().all(|s| s.is_empty()));
        assert_eq!(grid.rows_iter().count(), 6);
        assert!(grid.rows_iter().all(|row| row.len() == 7));
    }

    #[test]
    fn test_rejects_unsupported_sizes() {
        for (rows, cols) in [(5, 7), (10, 7), (6, 6), (6, 10), (0, 0)] {
            assert!(
                matches!(Grid::new(rows, cols), Err(GameError::InvalidArgument(_))),
                "{}x{} should be rejected",
                rows,
                cols
            );
        }
    }

    #[test]
    fn test_landing_row_follows_gravity() {
        let mut grid = Grid::new(6, 7).unwrap();
        assert_eq!(grid.landing_row(2), Some(5));

        grid.set(5, 2, Square::Occupied(Token::Red)).unwrap();
        assert_eq!(grid.landing_row(2), Some(4));
        assert_eq!(grid.landing_row(7), None);
    }

    #[test]
    fn test_column_full() {
        let mut grid = Grid::new(6, 7).unwrap();
        for row in 0..6 {
            grid.set(row, 0, Square::Occupied(Token::Yellow)).unwrap();
        }
        assert!(grid.is_column_full(0));
        assert!(!grid.is_column_full(1));
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::new(9, 9).unwrap();
        assert!(grid.is_in_bounds(8, 8));
        assert!(!grid.is_in_bounds(9, 0));
        assert!(!grid.is_in_bounds(0, 9));
        assert_eq!(grid.get(9, 0), None);
    }
}
