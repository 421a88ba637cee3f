//! Application state and key handling.
//!
//! The app keeps only UI state (cursor, focus, selection). Everything about
//! the game is read back from [`GameHistory`] when drawing.

use crossterm::event::KeyCode;
use strictly_rewind::{GameHistory, Position};
use tracing::{debug, info};

use crate::input::{digit_cell, move_cursor};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move through the jump menu.
    History,
}

/// Main application state.
pub struct App {
    game: GameHistory,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: Option<String>,
    color: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(color: bool) -> Self {
        Self {
            game: GameHistory::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: None,
            color,
            should_quit: false,
        }
    }

    /// Gets the game history.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted jump-menu step.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback from the last key press, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether to draw with colors.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        self.message = None;

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char('n') => self.restart(),
            code if digit_cell(code).is_some() => {
                if let Some(pos) = digit_cell(code).and_then(Position::from_index) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(self.game.latest_step()),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Err(e) = self.game.jump_to(self.selected) {
                    self.message = Some(e.to_string());
                }
            }
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected = self.game.viewed_step();
                Focus::History
            }
            Focus::History => Focus::Board,
        };
        debug!(focus = ?self.focus, "Focus changed");
    }

    fn place(&mut self, pos: Position) {
        match self.game.place(pos) {
            Ok(action) => {
                self.selected = self.game.viewed_step();
                self.message = Some(format!("{} played {}", action.player, pos.label()));
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Starts a new game.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game = GameHistory::new();
        self.cursor = Position::Center;
        self.focus = Focus::Board;
        self.selected = 0;
        self.message = Some("New game. Player X's turn.".to_string());
    }
}
