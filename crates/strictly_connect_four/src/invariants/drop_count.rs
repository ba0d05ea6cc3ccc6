//! Drop count invariant: the counter matches the grid.

use super::Invariant;
use crate::GameState;

/// Invariant: the drop counter equals the number of occupied squares.
pub struct DropCountInvariant;

impl Invariant<GameState> for DropCountInvariant {
    fn holds(game: &GameState) -> bool {
        game.dropped() == game.grid().occupied_count()
    }

    fn description() -> &'static str {
        "Drop counter matches occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Token;

    #[test]
    fn test_empty_game_holds() {
        let game = GameState::new(6, 7).unwrap();
        assert!(DropCountInvariant::holds(&game));
    }

    #[test]
    fn test_counter_follows_drops() {
        let mut game = GameState::new(6, 7).unwrap();
        game.set_player_tokens(Some(Token::Red), Some(Token::Yellow))
            .unwrap();
        game.drop_token(0, 0).unwrap();
        game.drop_token(1, 0).unwrap();
        assert!(DropCountInvariant::holds(&game));
    }

    #[test]
    fn test_detects_drift() {
        let mut game = GameState::new(6, 7).unwrap();
        game.set_player_tokens(Some(Token::Red), Some(Token::Yellow))
            .unwrap();
        game.drop_token(0, 0).unwrap();
        game.corrupt_drop_count(3);
        assert!(!DropCountInvariant::holds(&game));
    }
}
