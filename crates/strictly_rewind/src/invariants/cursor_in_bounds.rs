//! Cursor invariant: the viewed step indexes a recorded snapshot.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `0 <= viewed_step < snapshots.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.viewed_step() < game.snapshots().len()
    }

    fn description() -> &'static str {
        "Viewed step is within the recorded history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_after_moves_holds() {
        let mut game = GameHistory::new();
        game.apply_move(3).unwrap();
        game.apply_move(7).unwrap();
        assert!(CursorInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut game = GameHistory::new();
        game.viewed_step = 1;
        assert!(!CursorInBoundsInvariant::holds(&game));
    }
}
