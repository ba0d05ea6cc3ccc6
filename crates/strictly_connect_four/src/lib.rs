//! Pure Connect Four game logic.
//!
//! # Architecture
//!
//! - **Types**: [`Token`], [`Square`] and the fixed-size [`Grid`]
//! - **Phases**: the [`Phase`] lifecycle and the final [`Outcome`]
//! - **Rules**: four-in-a-row and full-grid detection
//! - **Contracts**: preconditions for drops and token assignment
//! - **Invariants**: properties re-checked after every drop in debug builds
//! - **Render**: [`GridDisplay`], a text rendering of the grid
//!
//! # Example
//!
//! ```
//! use strictly_connect_four::{GameState, Outcome, Phase, Token};
//!
//! # fn example() -> Result<(), strictly_connect_four::GameError> {
//! let mut game = GameState::new(6, 7)?;
//! game.set_player_tokens(Some(Token::Red), Some(Token::Yellow))?;
//!
//! for col in 0..4 {
//!     game.drop_token(0, col)?;
//!     game.check_outcome();
//! }
//!
//! assert_eq!(game.phase(), Phase::Over);
//! assert_eq!(game.outcome(), Some(Outcome::Winner { player: 0, token: Token::Red }));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod game;
mod grid;
mod invariants;
mod phases;
mod render;
pub mod rules;
mod types;

pub use action::{DropRequest, TokenAssignment};
pub use contracts::{
    ColumnHasSpace, ColumnInBounds, Contract, DropContract, LegalDrop, PhaseAcceptsDrops,
    PhaseAcceptsTokens, PlayerIndexValid, TokenAssignmentContract, TokensDistinct,
    TokensPresent,
};
pub use error::GameError;
pub use game::{GameState, PLAYER_COUNT};
pub use grid::{Grid, COL_RANGE, ROW_RANGE};
pub use invariants::{
    ConnectFourInvariants, DropCountInvariant, GravityInvariant, Invariant, InvariantSet,
    InvariantViolation, LastDropInvariant,
};
pub use phases::{Outcome, Phase};
pub use render::GridDisplay;
pub use types::{Square, Token};
