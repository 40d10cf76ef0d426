//! Wordle - CLI
//!
//! Play Wordle in the terminal, either as a full-screen TUI or line by line.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::{
    commands::{check_guess, run_simple, word_stats},
    game::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig},
    output::{Palette, print_check_result},
    wordlists::{COMMON, Dictionary, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden word in a limited number of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of letters in the hidden word
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Number of guesses allowed
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Wordlist: 'all' (default, common + extended), 'common' (common words only), or path to a file of extra guesses
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Seed for choosing the hidden word
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Use the orange/blue colour-blind friendly palette
    #[arg(long, global = true)]
    high_contrast: bool,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file (the TUI only logs when this is set)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Show the feedback a guess would get against a solution
    Check {
        /// The guessed word
        guess: String,

        /// The hidden word to check against
        solution: String,
    },

    /// Count the playable words for the configured length
    Words,
}

/// Load the dictionary based on the -w flag
///
/// - "all": embedded common and extended lists
/// - "common": embedded common list only
/// - "<path>": embedded common list, extended list read from file
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    match wordlist_mode {
        "all" => Ok(Dictionary::embedded()),
        "common" => Ok(Dictionary::new(words_from_slice(COMMON), Vec::new())),
        path => {
            let extended = load_from_file(path)
                .with_context(|| format!("Failed to read word list '{path}'"))?;
            tracing::info!(path, words = extended.len(), "loaded custom word list");
            Ok(Dictionary::new(words_from_slice(COMMON), extended))
        }
    }
}

/// Initialize tracing
///
/// Precedence: `RUST_LOG` env var > `--log-level`. The TUI owns the terminal,
/// so without a log file it gets no subscriber at all.
fn init_logging(level: &str, log_file: Option<&Path>, tui: bool) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wordle_game={level}")));

    if let Some(path) = log_file {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .ok_or_else(|| anyhow!("Log file path has no file name: {}", path.display()))?;

        std::fs::create_dir_all(dir)
            .with_context(|| format!("Could not create log directory {}", dir.display()))?;

        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false),
            )
            .init();

        return Ok(Some(guard));
    }

    if !tui {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(None)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let _log_guard = init_logging(
        &cli.log_level,
        cli.log_file.as_deref(),
        matches!(command, Commands::Play),
    )?;

    let dictionary = load_dictionary(&cli.wordlist)?;
    let config = GameConfig::new(cli.length, cli.attempts);
    let palette = Palette::new(cli.high_contrast);

    match command {
        Commands::Play => run_play_command(&dictionary, config, cli.seed, palette),
        Commands::Simple => run_simple_command(&dictionary, config, cli.seed, &palette),
        Commands::Check { guess, solution } => {
            run_check_command(&guess, &solution, &dictionary, &palette)
        }
        Commands::Words => {
            run_words_command(&dictionary, config);
            Ok(())
        }
    }
}

fn run_play_command(
    dictionary: &Dictionary,
    config: GameConfig,
    seed: Option<u64>,
    palette: Palette,
) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(dictionary, config, make_rng(seed), palette)?;
    run_tui(app)
}

fn run_simple_command(
    dictionary: &Dictionary,
    config: GameConfig,
    seed: Option<u64>,
    palette: &Palette,
) -> Result<()> {
    let mut rng = make_rng(seed);
    run_simple(dictionary, config, &mut rng, palette).map_err(|e| anyhow!(e))
}

fn run_check_command(
    guess: &str,
    solution: &str,
    dictionary: &Dictionary,
    palette: &Palette,
) -> Result<()> {
    let result = check_guess(guess, solution, dictionary).map_err(|e| anyhow!(e))?;
    print_check_result(&result, palette);
    Ok(())
}

fn run_words_command(dictionary: &Dictionary, config: GameConfig) {
    let stats = word_stats(dictionary, config.word_length);
    println!(
        "{} possible solutions of {} letters",
        stats.solutions, stats.word_length
    );
    println!(
        "{} common words, {} accepted words in total",
        stats.common, stats.vocabulary
    );
}
