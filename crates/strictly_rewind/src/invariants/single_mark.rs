//! Single mark invariant: each step adds exactly one mark for the right player.

use super::super::{GameHistory, Player, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square.
///
/// That square goes from empty to the mark of the player owning the
/// transition: X from even steps, O from odd steps.
pub struct SingleMarkInvariant;

impl Invariant<GameHistory> for SingleMarkInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.snapshots()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let expected = Square::Occupied(Player::for_step(step));
                let mut changed = pair[0]
                    .squares()
                    .iter()
                    .zip(pair[1].squares())
                    .filter(|(before, after)| before != after);

                matches!(
                    (changed.next(), changed.next()),
                    (Some((Square::Empty, after)), None) if *after == expected
                )
            })
    }

    fn description() -> &'static str {
        "Each step adds exactly one mark, alternating X and O"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(SingleMarkInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = GameHistory::new();
        for index in [0, 4, 2, 6, 8] {
            game.apply_move(index).unwrap();
        }
        assert!(SingleMarkInvariant::holds(&game));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = GameHistory::new();
        game.apply_move(0).unwrap();
        let board = game.snapshots[1].with_mark(Position::Center, Player::X);
        game.snapshots.push(board);
        assert!(!SingleMarkInvariant::holds(&game));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let mut game = GameHistory::new();
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::Center, Player::O);
        game.snapshots.push(board);
        assert!(!SingleMarkInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut game = GameHistory::new();
        game.apply_move(0).unwrap();
        let board = Board::new().with_mark(Position::TopLeft, Player::O);
        game.snapshots.push(board);
        assert!(!SingleMarkInvariant::holds(&game));
    }
}
