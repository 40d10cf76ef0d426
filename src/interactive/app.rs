//! TUI application state and logic

use crate::game::{Game, GameConfig, GameError, GameSnapshot};
use crate::input::KeyPress;
use crate::output::Palette;
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
///
/// Owns the running game and the shortcuts that live outside it (quit, new
/// game). Every other key goes through the input classifier.
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub config: GameConfig,
    pub game: Game<'a, Dictionary>,
    pub palette: Palette,
    pub should_quit: bool,
    rng: StdRng,
}

impl<'a> App<'a> {
    /// Create the app and start its first game
    ///
    /// # Errors
    ///
    /// Returns `GameError` if no game can be started with `config`.
    pub fn new(
        dictionary: &'a Dictionary,
        config: GameConfig,
        mut rng: StdRng,
        palette: Palette,
    ) -> Result<Self, GameError> {
        let game = Game::new(dictionary, config, &mut rng)?;

        Ok(Self {
            dictionary,
            config,
            game,
            palette,
            should_quit: false,
            rng,
        })
    }

    /// Replace the current game with a fresh one
    ///
    /// # Errors
    ///
    /// Returns `GameError` if no solution can be chosen.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.game = Game::new(self.dictionary, self.config, &mut self.rng)?;
        Ok(())
    }

    /// Handle one key press
    ///
    /// # Errors
    ///
    /// Returns `GameError` if a requested new game cannot be started.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), GameError> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let over = self.game.status().is_terminal();

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game()?,
            KeyCode::Char('n' | 'N') if over => self.new_game()?,
            KeyCode::Char('q' | 'Q') if over => self.should_quit = true,
            _ => {
                let outcome = self.game.press(&KeyPress::from(key));
                tracing::trace!(?outcome, "key handled");
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
