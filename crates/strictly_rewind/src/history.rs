//! Rewindable move history.
//!
//! [`GameHistory`] owns every board snapshot since the start of the game and
//! a cursor into them. Moving from an earlier step discards the snapshots
//! after it and appends the new one, so only one line of play is ever kept.
//! Turn, winner and status are recomputed from the cursor on every read.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::error::HistoryError;
use super::rules::{Line, check_winner, winning_line};
use super::status::GameStatus;
use super::{Board, Player, Position, Square};
use derive_getters::Getters;
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// One entry of the jump menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    step: usize,
    /// True for the empty starting board.
    is_initial: bool,
    /// Move that produced the snapshot at `step`.
    last_move: Option<Move>,
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_initial {
            write!(f, "Go to game start")
        } else {
            write!(f, "Go to move #{}", self.step)
        }
    }
}

/// Board snapshots over time plus the step currently viewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) viewed_step: usize,
}

#[allow(clippy::len_without_is_empty)]
impl GameHistory {
    /// Creates a history holding only the empty board, viewed at step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            viewed_step: 0,
        }
    }

    /// Places the next player's mark at a raw cell index (0-8).
    ///
    /// See [`GameHistory::place`]. An index outside the board is rejected with
    /// [`MoveError::OutOfBounds`] and leaves the history untouched.
    #[instrument(skip(self), fields(viewed_step = self.viewed_step))]
    pub fn apply_move(&mut self, index: usize) -> Result<Move, MoveError> {
        let Some(position) = Position::from_index(index) else {
            debug!(index, "Ignoring out-of-bounds move");
            return Err(MoveError::OutOfBounds(index));
        };
        self.place(position)
    }

    /// Places the next player's mark on the viewed board.
    ///
    /// The move is rejected if the viewed board already has a winner or the
    /// square is taken. A rejected move changes nothing: no snapshots are
    /// discarded and the cursor stays put.
    ///
    /// An accepted move drops every snapshot after the viewed step, appends
    /// the new board and moves the cursor onto it.
    #[instrument(skip(self), fields(viewed_step = self.viewed_step, len = self.snapshots.len()))]
    pub fn place(&mut self, position: Position) -> Result<Move, MoveError> {
        let action = Move::new(self.next_player(), position);

        if let Err(e) = MoveContract::pre(self, &action) {
            debug!(error = %e, "Ignoring illegal move");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let next = self.current_board().with_mark(position, action.player);

        let kept = self.viewed_step + 1;
        if kept < self.snapshots.len() {
            debug!(
                discarded = self.snapshots.len() - kept,
                "Discarding snapshots after viewed step"
            );
        }
        self.snapshots.truncate(kept);
        self.snapshots.push(next);
        self.viewed_step = self.snapshots.len() - 1;

        #[cfg(debug_assertions)]
        debug_assert!(
            MoveContract::post(&before, self).is_ok(),
            "Move postcondition violated"
        );

        debug!(%action, step = self.viewed_step, "Move applied");
        if let Some(winner) = check_winner(&next) {
            info!(%winner, step = self.viewed_step, "Game won");
        }

        Ok(action)
    }

    /// Moves the cursor to `step` without touching the snapshots.
    ///
    /// Fails with [`HistoryError::StepOutOfRange`] if `step` is not a recorded
    /// step; the cursor is left where it was.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.snapshots.len() {
            debug!("Rejecting jump past recorded history");
            return Err(HistoryError::StepOutOfRange {
                step,
                len: self.snapshots.len(),
            });
        }

        self.viewed_step = step;
        debug!(step, "Jumped");
        Ok(())
    }

    /// Board at the viewed step.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.viewed_step]
    }

    /// Winner of the board at the viewed step, if any.
    ///
    /// `None` covers both an open board and a draw; see [`GameHistory::status`].
    pub fn current_winner(&self) -> Option<Player> {
        check_winner(self.current_board())
    }

    /// Completed line on the viewed board, for highlighting.
    pub fn winning_line(&self) -> Option<Line> {
        winning_line(self.current_board())
    }

    /// True if X places the next mark from the viewed step.
    pub fn is_x_next(&self) -> bool {
        self.viewed_step % 2 == 0
    }

    /// Player placing the next mark from the viewed step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.viewed_step)
    }

    /// Status of the viewed board.
    pub fn status(&self) -> GameStatus {
        GameStatus::from_board(self.current_board(), self.next_player())
    }

    /// One jump-menu entry per recorded snapshot.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let mut entries = vec![MoveEntry {
            step: 0,
            is_initial: true,
            last_move: None,
        }];
        entries.extend(
            self.snapshots
                .windows(2)
                .enumerate()
                .map(|(i, pair)| MoveEntry {
                    step: i + 1,
                    is_initial: false,
                    last_move: move_between(&pair[0], &pair[1]),
                }),
        );
        entries
    }

    /// Moves that produced each snapshot after the first, in order.
    pub fn moves(&self) -> Vec<Move> {
        self.snapshots
            .windows(2)
            .filter_map(|pair| move_between(&pair[0], &pair[1]))
            .collect()
    }

    /// Step currently viewed.
    pub fn viewed_step(&self) -> usize {
        self.viewed_step
    }

    /// Last recorded step.
    pub fn latest_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// True when the cursor is on the last recorded step.
    pub fn is_latest(&self) -> bool {
        self.viewed_step == self.latest_step()
    }

    /// Number of recorded snapshots, including the empty starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// All recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Recovers the move that turned `before` into `after`.
fn move_between(before: &Board, after: &Board) -> Option<Move> {
    Position::iter().find_map(|pos| match (before.get(pos), after.get(pos)) {
        (Square::Empty, Square::Occupied(player)) => Some(Move::new(player, pos)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history() {
        let game = GameHistory::new();
        assert_eq!(game.len(), 1);
        assert_eq!(game.viewed_step(), 0);
        assert_eq!(*game.current_board(), Board::new());
        assert!(game.is_x_next());
        assert!(game.is_latest());
    }

    #[test]
    fn test_apply_move_returns_move() {
        let mut game = GameHistory::new();
        let first = game.apply_move(4).unwrap();
        let second = game.apply_move(0).unwrap();

        assert_eq!(first, Move::new(Player::X, Position::Center));
        assert_eq!(second, Move::new(Player::O, Position::TopLeft));
        assert_eq!(game.moves(), vec![first, second]);
    }

    #[test]
    fn test_moves_recover_every_cell() {
        let mut game = GameHistory::new();
        for index in [8, 0, 6, 2, 1, 7, 3, 5, 4] {
            game.apply_move(index).unwrap();
        }

        let cells: Vec<usize> = game.moves().iter().map(|m| m.position.to_index()).collect();
        assert_eq!(cells, [8, 0, 6, 2, 1, 7, 3, 5, 4]);
        assert_eq!(game.moves()[8], Move::new(Player::X, Position::Center));
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut game = GameHistory::new();
        assert_eq!(game.apply_move(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(game, GameHistory::new());
    }

    #[test]
    fn test_rejected_move_does_not_truncate() {
        let mut game = GameHistory::new();
        for index in [0, 4, 8] {
            game.apply_move(index).unwrap();
        }
        game.jump_to(1).unwrap();

        assert_eq!(
            game.apply_move(0),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
        assert_eq!(game.len(), 4);
        assert_eq!(game.viewed_step(), 1);
    }

    #[test]
    fn test_jump_out_of_range_keeps_cursor() {
        let mut game = GameHistory::new();
        game.apply_move(0).unwrap();

        assert_eq!(
            game.jump_to(2),
            Err(HistoryError::StepOutOfRange { step: 2, len: 2 })
        );
        assert_eq!(game.viewed_step(), 1);
    }

    #[test]
    fn test_move_list_labels() {
        let mut game = GameHistory::new();
        game.apply_move(2).unwrap();
        game.apply_move(6).unwrap();

        let entries = game.move_list();
        let labels: Vec<String> = entries.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["Go to game start", "Go to move #1", "Go to move #2"]);
        assert!(*entries[0].is_initial());
        assert_eq!(*entries[0].last_move(), None);
        assert_eq!(
            *entries[2].last_move(),
            Some(Move::new(Player::O, Position::BottomLeft))
        );
    }

    #[test]
    fn test_status_tracks_cursor() {
        let mut game = GameHistory::new();
        for index in [0, 4, 1, 5, 2] {
            game.apply_move(index).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert!(game.winning_line().unwrap().contains(Position::TopRight));

        game.jump_to(3).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress { next: Player::O });
        assert!(game.winning_line().is_none());
        assert!(!game.is_latest());
    }
}
