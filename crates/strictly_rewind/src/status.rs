//! Derived game status.
//!
//! Status is never stored. It is recomputed from the board at the viewed
//! step, so jumping back past a win yields an in-progress status again.

use super::rules::{check_winner, is_full};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of the board currently being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still possible.
    InProgress {
        /// Player whose mark the next move places.
        next: Player,
    },
    /// A player owns a complete line.
    Won(Player),
    /// Board is full with no complete line.
    Draw,
}

impl GameStatus {
    /// Evaluates `board`, with `next` to move if the game is still open.
    #[instrument(skip(board))]
    pub fn from_board(board: &Board, next: Player) -> Self {
        if let Some(winner) = check_winner(board) {
            GameStatus::Won(winner)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { next }
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true once the viewed board accepts no more moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(player) => write!(f, "Winner: {}", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
