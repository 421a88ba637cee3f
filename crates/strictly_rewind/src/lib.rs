//! Strictly Rewind - tic-tac-toe with time travel
//!
//! Pure game logic for a two-player tic-tac-toe game whose whole move
//! history can be revisited. Rendering is left to a presentation layer,
//! which calls into [`GameHistory`] and redraws from its queries.
//!
//! # Architecture
//!
//! - **Rules**: stateless win and draw detection over a single [`Board`]
//! - **History**: board snapshots over time plus a cursor, with move
//!   application and jumping
//! - **Contracts**: preconditions and invariants checked around every move
//!
//! # Example
//!
//! ```
//! use strictly_rewind::{GameHistory, GameStatus, Player};
//!
//! let mut game = GameHistory::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     game.apply_move(cell).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//!
//! // Rewind and branch: the winning line is discarded.
//! game.jump_to(4).unwrap();
//! game.apply_move(8).unwrap();
//! assert_eq!(game.current_winner(), None);
//! assert_eq!(game.len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod history;
mod position;
mod status;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use error::HistoryError;
pub use history::{GameHistory, MoveEntry};
pub use position::Position;
pub use rules::{Line, check_winner, is_draw, winning_line};
pub use status::GameStatus;
pub use types::{Board, Player, Square};
