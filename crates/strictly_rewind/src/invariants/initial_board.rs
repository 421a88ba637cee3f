//! Initial board invariant: history starts from an empty board.

use super::super::{Board, GameHistory};
use super::Invariant;

/// Invariant: step 0 exists and holds the all-empty board.
pub struct InitialBoardInvariant;

impl Invariant<GameHistory> for InitialBoardInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.snapshots().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with an empty board"
    }
}
