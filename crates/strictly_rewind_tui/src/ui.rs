//! Stateless UI rendering for tic-tac-toe with history.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_rewind::{GameHistory, Player, Position, Square};

use crate::app::{App, Focus};

/// Draws the whole screen from the app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = Palette::new(app.color());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and history
            Constraint::Length(4), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Rewind - Tic Tac Toe")
        .style(palette.fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_board(frame, body[0], app, &palette);
    draw_history(frame, body[1], app, &palette);
    draw_status(frame, chunks[2], app, &palette);

    let help = Paragraph::new(
        "arrows: move  enter: place/jump  1-9: place  tab: switch pane  n: new game  q: quit",
    )
    .style(palette.fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let border = if app.focus() == Focus::Board {
        palette.fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [0, 2, 4].into_iter().enumerate() {
        draw_row(frame, rows[chunk], app, palette, row);
    }
    draw_separator(frame, rows[1], palette);
    draw_separator(frame, rows[3], palette);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, chunk) in [0, 2, 4].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(row * 3 + col) {
            draw_cell(frame, cols[chunk], app, palette, pos);
        }
    }
    draw_separator_vertical(frame, cols[1], palette);
    draw_separator_vertical(frame, cols[3], palette);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, pos: Position) {
    let game = app.game();

    let (symbol, mut style) = match game.current_board().get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            palette.fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            palette.fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            palette.fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if game.winning_line().is_some_and(|line| line.contains(pos)) {
        style = style.add_modifier(Modifier::UNDERLINED);
        if palette.color {
            style = style.fg(Color::Green);
        }
    }

    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {} ", symbol), style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let game = app.game();
    let focused = app.focus() == Focus::History;

    let lines: Vec<Line> = game
        .move_list()
        .into_iter()
        .map(|entry| {
            let step = *entry.step();
            let marker = if step == game.viewed_step() { "▶ " } else { "  " };
            let label = match entry.last_move() {
                Some(action) => format!("{}{} ({})", marker, entry, action),
                None => format!("{}{}", marker, entry),
            };

            let mut style = Style::default();
            if step == game.viewed_step() {
                style = style.add_modifier(Modifier::BOLD);
            }
            if focused && step == app.selected() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(Span::styled(label, style))
        })
        .collect();

    let border = if focused {
        palette.fg(Color::Yellow)
    } else {
        Style::default()
    };
    let history = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("History")
            .border_style(border),
    );
    frame.render_widget(history, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let game = app.game();

    let mut lines = vec![Line::from(Span::styled(
        status_text(game),
        palette.fg(Color::Yellow),
    ))];
    if let Some(message) = app.message() {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            palette.fg(Color::Gray),
        )));
    }

    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// Status line for the viewed step, noting when it is behind the latest move.
fn status_text(game: &GameHistory) -> String {
    if game.is_latest() {
        game.status().to_string()
    } else {
        format!(
            "{} (viewing move {} of {})",
            game.status(),
            game.viewed_step(),
            game.latest_step()
        )
    }
}

fn draw_separator(frame: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(palette.fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("│")
        .style(palette.fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

/// Drops foreground colors when running with `--no-color`.
struct Palette {
    color: bool,
}

impl Palette {
    fn new(color: bool) -> Self {
        Self { color }
    }

    fn fg(&self, color: Color) -> Style {
        if self.color {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_at_latest() {
        let mut game = GameHistory::new();
        game.apply_move(0).unwrap();
        assert_eq!(status_text(&game), "Next player: O");
    }

    #[test]
    fn test_status_text_when_rewound() {
        let mut game = GameHistory::new();
        for cell in [0, 4, 1, 5, 2] {
            game.apply_move(cell).unwrap();
        }
        assert_eq!(status_text(&game), "Winner: X");

        game.jump_to(2).unwrap();
        assert_eq!(status_text(&game), "Next player: X (viewing move 2 of 5)");
    }
}
