//! No-move-after-win invariant: a won board is never extended.

use super::super::GameHistory;
use super::super::rules::check_winner;
use super::Invariant;

/// Invariant: only the last snapshot may hold a completed line.
pub struct NoMoveAfterWinInvariant;

impl Invariant<GameHistory> for NoMoveAfterWinInvariant {
    fn holds(game: &GameHistory) -> bool {
        let snapshots = game.snapshots();
        snapshots
            .iter()
            .take(snapshots.len().saturating_sub(1))
            .all(|board| check_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No move follows a winning board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_winning_last_step_holds() {
        let mut game = GameHistory::new();
        for index in [0, 4, 1, 5, 2] {
            game.apply_move(index).unwrap();
        }
        assert!(game.current_winner().is_some());
        assert!(NoMoveAfterWinInvariant::holds(&game));
    }

    #[test]
    fn test_step_after_win_violates() {
        let mut game = GameHistory::new();
        for index in [0, 4, 1, 5, 2] {
            game.apply_move(index).unwrap();
        }
        let board = game.current_board().with_mark(Position::BottomRight, Player::O);
        game.snapshots.push(board);
        assert!(!NoMoveAfterWinInvariant::holds(&game));
    }
}
