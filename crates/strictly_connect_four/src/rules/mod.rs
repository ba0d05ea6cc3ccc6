//! Game rules for Connect Four.
//!
//! Pure functions over a [`Grid`](crate::Grid). Rules are kept apart from
//! grid storage so the state machine and the contracts can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{has_connect_four, Direction, RUN_LENGTH};
