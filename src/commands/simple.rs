//! Simple line-based game
//!
//! Text-based play without the TUI. Each typed line is fed to the game as
//! individual key presses followed by Enter.

use crate::game::{Game, GameConfig};
use crate::input::{InputAction, KeyPress};
use crate::output::{Palette, print_board, print_keyboard, print_message, print_summary};
use crate::wordlists::WordSource;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the line-based game until the player quits or input ends
///
/// # Errors
///
/// Returns an error if a game cannot be started or there's an I/O error
/// reading user input.
pub fn run_simple<S: WordSource, R: Rng + ?Sized>(
    source: &S,
    config: GameConfig,
    rng: &mut R,
    palette: &Palette,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Wordle - Line Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word in {} tries.",
        config.word_length, config.max_attempts
    );
    println!("Commands: '/new' for a new game, '/quit' to exit\n");

    let mut game = Game::new(source, config, rng).map_err(|e| e.to_string())?;

    loop {
        let snapshot = game.snapshot();
        print_board(&snapshot, palette);
        print_keyboard(&snapshot, palette);

        if snapshot.status.is_terminal() {
            print_summary(&snapshot);

            match get_user_input("Play again? (yes/no)")? {
                Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                    game = Game::new(source, config, rng).map_err(|e| e.to_string())?;
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => break,
            }
        }

        let prompt = format!(
            "Guess {}/{}",
            snapshot.attempts.len() + 1,
            snapshot.max_attempts
        );
        let Some(input) = get_user_input(&prompt)? else {
            break;
        };

        match input.to_lowercase().as_str() {
            "/quit" | "/q" | "/exit" => break,
            "/new" | "/n" => {
                game = Game::new(source, config, rng).map_err(|e| e.to_string())?;
                println!("\n🔄 New game started!\n");
            }
            _ if input.chars().filter(char::is_ascii_alphabetic).count() > config.word_length => {
                println!("  {}", "Too long!".red().bold());
            }
            _ => {
                enter_line(&mut game, &input);
                if let Some(message) = game.message() {
                    print_message(message, palette);
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Replace the pending guess with `line` and submit it
fn enter_line<S: WordSource>(game: &mut Game<'_, S>, line: &str) {
    while !game.buffer().is_empty() {
        game.apply(InputAction::Backspace);
    }
    for c in line.chars() {
        game.press(&KeyPress::char(c));
    }
    game.apply(InputAction::Enter);
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{GameStatus, Outcome};
    use crate::wordlists::Dictionary;

    #[test]
    fn enter_line_replaces_pending_letters() {
        let dict = Dictionary::from_slices(&["crane"], &["trace"]);
        let mut game =
            Game::with_solution(&dict, GameConfig::default(), Word::new("crane").unwrap()).unwrap();

        enter_line(&mut game, "xyz");
        assert_eq!(game.buffer(), "xyz");

        enter_line(&mut game, "Trace");
        assert_eq!(game.attempts().len(), 1);
        assert!(game.buffer().is_empty());
    }

    #[test]
    fn enter_line_skips_non_letters() {
        let dict = Dictionary::from_slices(&["crane"], &[]);
        let mut game =
            Game::with_solution(&dict, GameConfig::default(), Word::new("crane").unwrap()).unwrap();

        enter_line(&mut game, "c r-a n e");
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.apply(InputAction::Enter), Outcome::Ignored);
    }
}
