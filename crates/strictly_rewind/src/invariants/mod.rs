//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold after every applied move.
//! They are testable independently and serve as documentation of system guarantees.

use tracing::warn;

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();

                $(
                    if !$inv::holds(state) {
                        warn!(invariant = $inv::description(), "Invariant violated");
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod cursor_in_bounds;
pub mod initial_board;
pub mod no_move_after_win;
pub mod single_mark;

pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use initial_board::InitialBoardInvariant;
pub use no_move_after_win::NoMoveAfterWinInvariant;
pub use single_mark::SingleMarkInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    InitialBoardInvariant,
    SingleMarkInvariant,
    NoMoveAfterWinInvariant,
    CursorInBoundsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameHistory, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameHistory::new();
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut game = GameHistory::new();
        for index in [0, 4, 8] {
            game.apply_move(index).unwrap();
        }
        game.jump_to(1).unwrap();
        assert!(HistoryInvariants::check_all(&game).is_ok());

        game.apply_move(2).unwrap();
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = GameHistory::new();
        game.apply_move(4).unwrap();

        // Corrupt the initial board and push the cursor past the end.
        game.snapshots[0] = game.snapshots[0].with_mark(Position::TopLeft, Player::O);
        game.viewed_step = 5;

        let violations = HistoryInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameHistory::new();

        type TwoInvariants = (InitialBoardInvariant, CursorInBoundsInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
