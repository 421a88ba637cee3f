//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules never look at
//! history; they are shared by the history engine and by presentation code.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, check_winner, winning_line};
