//! Contract-based validation for applying moves to a history.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::history::GameHistory;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::check_winner;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the viewed board has no winner yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] if the viewed board is won.
    #[instrument(skip(game))]
    pub fn check(game: &GameHistory) -> Result<(), MoveError> {
        match check_winner(game.current_board()) {
            Some(winner) => Err(MoveError::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameHistory) -> Result<(), MoveError> {
        if game.current_board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Composite precondition, checked in order: game not over, then square empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameHistory) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

/// Contract for applying a move at the viewed step.
///
/// Preconditions:
/// - Viewed board has no winner
/// - Square must be empty
///
/// Postconditions:
/// - Snapshots up to the old cursor are kept unchanged
/// - Exactly one snapshot follows them and the cursor points at it
/// - All history invariants hold
pub struct MoveContract;

impl Contract<GameHistory, Move> for MoveContract {
    fn pre(game: &GameHistory, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), MoveError> {
        let kept = before.viewed_step() + 1;
        let prefix = &before.snapshots()[..kept];

        if after.len() != kept + 1 || !after.snapshots().starts_with(prefix) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history is not the viewed prefix plus one snapshot"
                    .to_string(),
            ));
        }

        if after.viewed_step() != kept {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: cursor does not point at the new snapshot".to_string(),
            ));
        }

        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
