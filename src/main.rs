//! Hangman - CLI
//!
//! Classic hangman for the terminal, with a TUI mode and a plain CLI mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_simple,
    session::Session,
    wordlists::{WordBank, loader::load_from_file},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Classic hangman: guess the hidden word one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed the word picker for a reproducible session
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

/// Load the word bank based on the -w flag
fn load_word_bank(wordlist_mode: &str) -> Result<WordBank> {
    match wordlist_mode {
        "builtin" => Ok(WordBank::builtin()),
        path => {
            let words = load_from_file(path)?;
            let bank = WordBank::new(words)
                .map_err(|e| anyhow::anyhow!("{path}: {e} (invalid lines are skipped)"))?;
            Ok(bank)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let bank = load_word_bank(&cli.wordlist)?;
    let rng = cli.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut session = Session::new(bank, rng);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(session),
        Commands::Simple => run_simple(&mut session).map_err(|e| anyhow::anyhow!(e)),
    }
}

fn run_play_command(session: Session<StdRng>) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(session);
    run_tui(app)
}
