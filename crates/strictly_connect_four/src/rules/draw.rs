//! Draw detection logic for Connect Four.

use super::win::has_connect_four;
use crate::{Grid, Token};
use tracing::instrument;

/// Checks if the grid is full (all squares occupied).
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.is_full()
}

/// A draw is a full grid on which neither token has four in a row.
#[instrument(skip(grid))]
pub fn is_draw(grid: &Grid, tokens: [Token; 2]) -> bool {
    is_full(grid) && tokens.iter().all(|&token| !has_connect_four(grid, token))
}
