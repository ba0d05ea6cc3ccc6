//! Last drop invariant: the recorded coordinates point at a real token.

use super::Invariant;
use crate::GameState;

/// Invariant: before any drop there is no last-drop position; afterwards it
/// is inside the grid and occupied.
pub struct LastDropInvariant;

impl Invariant<GameState> for LastDropInvariant {
    fn holds(game: &GameState) -> bool {
        match (game.dropped(), game.last_drop()) {
            (0, None) => true,
            (0, Some(_)) | (_, None) => false,
            (_, Some((row, col))) => game
                .grid()
                .get(row, col)
                .is_some_and(|square| !square.is_empty()),
        }
    }

    fn description() -> &'static str {
        "Last drop position is set exactly when a token was dropped"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Token;

    #[test]
    fn test_unset_before_first_drop() {
        let game = GameState::new(6, 7).unwrap();
        assert_eq!(game.last_drop(), None);
        assert!(LastDropInvariant::holds(&game));
    }

    #[test]
    fn test_points_at_latest_token() {
        let mut game = GameState::new(6, 7).unwrap();
        game.set_player_tokens(Some(Token::Red), Some(Token::Yellow))
            .unwrap();
        game.drop_token(1, 6).unwrap();
        assert_eq!(game.last_drop(), Some((5, 6)));
        assert!(LastDropInvariant::holds(&game));
    }
}
