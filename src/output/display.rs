//! Display functions for line-mode play and command results

use super::formatters::{attempt_row, feedback_symbol, keyboard_rows, pending_row};
use super::palette::{Palette, Rgb};
use crate::commands::CheckResult;
use crate::game::{GameSnapshot, GameStatus, Message};
use colored::Colorize;

/// Print the guess grid: submitted rows, the pending row, then blanks
pub fn print_board(snapshot: &GameSnapshot, palette: &Palette) {
    println!();
    for row in 0..snapshot.max_attempts {
        if let Some(attempt) = snapshot.attempts.get(row) {
            println!("  {}", attempt_row(attempt, palette));
        } else if snapshot.current_row() == Some(row) {
            println!("  {}", pending_row(&snapshot.buffer, snapshot.word_length, palette));
        } else {
            println!("  {}", pending_row("", snapshot.word_length, palette));
        }
    }
    println!();
}

/// Print the keyboard with per-letter colouring
pub fn print_keyboard(snapshot: &GameSnapshot, palette: &Palette) {
    for (indent, row) in keyboard_rows(&snapshot.keyboard, palette).iter().enumerate() {
        println!("  {}{row}", " ".repeat(indent));
    }
    println!();
}

/// Print the current message, coloured by kind
pub fn print_message(message: &Message, palette: &Palette) {
    let Rgb(r, g, b) = palette.message(message.kind);
    println!("  {}", message.text.truecolor(r, g, b).bold());
}

/// Print the end-of-game summary: answer on a loss, then the share grid
pub fn print_summary(snapshot: &GameSnapshot) {
    if snapshot.status == GameStatus::Lost
        && let Some(solution) = &snapshot.solution
    {
        println!("  The word was {}", solution.to_uppercase().bright_yellow().bold());
    }
    println!("\n{}\n", snapshot.share_text());
}

/// Print the evaluation of a single guess
pub fn print_check_result(result: &CheckResult, palette: &Palette) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.solution.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", attempt_row(&result.attempt(), palette));
    let symbols: String = result.feedback.letters().iter().map(|&f| feedback_symbol(f)).collect();
    println!("  {}  {}", result.feedback.to_emoji(), symbols);

    println!(
        "\n  Correct: {}  Present: {}",
        result.feedback.count_correct().to_string().green().bold(),
        result.feedback.count_present().to_string().yellow().bold()
    );
    if !result.guess_is_word {
        println!("  {}", "Note: the guess is not in the word list".red());
    }
    println!();
}
