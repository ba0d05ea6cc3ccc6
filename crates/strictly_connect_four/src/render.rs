//! Text rendering of the grid.

use super::{Grid, Square};
use std::fmt;

/// Renders a [`Grid`] as text, one line per row with a column index footer.
///
/// ```text
/// | | | | | | | |
/// | | | |Y| | | |
/// | | |R|R| | | |
///  0 1 2 3 4 5 6
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GridDisplay<'a> {
    grid: &'a Grid,
}

impl<'a> GridDisplay<'a> {
    /// Wraps a grid for display.
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    fn symbol(square: Square) -> char {
        match square {
            Square::Empty => ' ',
            Square::Occupied(token) => token.symbol(),
        }
    }
}

impl fmt::Display for GridDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows_iter() {
            for &square in row {
                write!(f, "|{}", Self::symbol(square))?;
            }
            writeln!(f, "|")?;
        }
        for col in 0..self.grid.cols() {
            write!(f, " {}", col)?;
        }
        writeln!(f)
    }
}
