//! TUI rendering with ratatui
//!
//! Draws the guess grid, the message line and the on-screen keyboard from a
//! game snapshot.

use super::app::App;
use crate::game::{GameSnapshot, GameStatus};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::output::{Palette, Rgb};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let snapshot = app.snapshot();
    let grid_height = u16::try_from(snapshot.max_attempts * 2).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Min(grid_height),    // Guess grid
            Constraint::Length(3),           // Message
            Constraint::Length(8),           // Keyboard
            Constraint::Length(1),           // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, &snapshot, &app.palette, chunks[1]);
    render_message(f, &snapshot, &app.palette, chunks[2]);
    render_keyboard(f, &snapshot, &app.palette, chunks[3]);
    render_help(f, &snapshot, chunks[4]);
}

fn color(rgb: Rgb) -> Color {
    let Rgb(r, g, b) = rgb;
    Color::Rgb(r, g, b)
}

fn tile(letter: char, background: Rgb, palette: &Palette) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        Style::default()
            .fg(color(palette.text))
            .bg(color(background))
            .add_modifier(Modifier::BOLD),
    )
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, area);
}

/// One line per attempt, each tile followed by a gap, blank line between rows
fn grid_lines(snapshot: &GameSnapshot, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(snapshot.max_attempts * 2);

    for row in 0..snapshot.max_attempts {
        let mut spans = Vec::with_capacity(snapshot.word_length * 2);

        if let Some(attempt) = snapshot.attempts.get(row) {
            for (&letter, &fb) in attempt.word.letters().iter().zip(attempt.feedback.letters()) {
                spans.push(tile(char::from(letter), palette.feedback(fb), palette));
                spans.push(Span::raw(" "));
            }
        } else {
            let pending = if snapshot.current_row() == Some(row) {
                snapshot.buffer.as_str()
            } else {
                ""
            };
            for letter in pending.chars().chain(std::iter::repeat(' ')).take(snapshot.word_length) {
                spans.push(tile(letter, palette.border, palette));
                spans.push(Span::raw(" "));
            }
        }

        spans.pop();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    lines
}

fn render_grid(f: &mut Frame, snapshot: &GameSnapshot, palette: &Palette, area: Rect) {
    let grid = Paragraph::new(grid_lines(snapshot, palette))
        .alignment(Alignment::Center)
        .block(Block::default().style(Style::default().bg(color(palette.empty))));
    f.render_widget(grid, area);
}

fn render_message(f: &mut Frame, snapshot: &GameSnapshot, palette: &Palette, area: Rect) {
    let mut spans = Vec::new();

    if let Some(message) = &snapshot.message {
        spans.push(Span::styled(
            message.text.clone(),
            Style::default()
                .fg(color(palette.message(message.kind)))
                .add_modifier(Modifier::BOLD),
        ));
    }

    if snapshot.status == GameStatus::Lost
        && let Some(solution) = &snapshot.solution
    {
        spans.push(Span::raw(format!("  The word was {}.", solution.to_uppercase())));
    }

    let message = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    f.render_widget(message, area);
}

fn keyboard_lines(snapshot: &GameSnapshot, palette: &Palette) -> Vec<Line<'static>> {
    let key_style = |bg: Rgb| {
        Style::default()
            .fg(color(palette.text))
            .bg(color(bg))
            .add_modifier(Modifier::BOLD)
    };

    let mut lines = Vec::with_capacity(KEYBOARD_ROWS.len() * 2);
    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let mut spans = Vec::new();

        if i == KEYBOARD_ROWS.len() - 1 {
            spans.push(Span::styled(" ENTER ", key_style(palette.unused_key)));
            spans.push(Span::raw(" "));
        }

        for c in row.chars() {
            spans.push(tile(c, palette.key(snapshot.keyboard.get(c)), palette));
            spans.push(Span::raw(" "));
        }

        if i == KEYBOARD_ROWS.len() - 1 {
            spans.push(Span::styled(" ⌫ ", key_style(palette.unused_key)));
        } else {
            spans.pop();
        }

        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    lines
}

fn render_keyboard(f: &mut Frame, snapshot: &GameSnapshot, palette: &Palette, area: Rect) {
    let keyboard = Paragraph::new(keyboard_lines(snapshot, palette)).alignment(Alignment::Center);
    f.render_widget(keyboard, area);
}

fn render_help(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let help_text = if snapshot.status.is_terminal() {
        "n: New Game | q/Esc: Quit"
    } else {
        "Type a word | Enter: Submit | Backspace: Delete | Ctrl+N: New Game | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
