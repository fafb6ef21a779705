//! Simple interactive CLI mode
//!
//! Text-based hangman without the TUI: one guessed letter per line.

use crate::output::{print_guess_error, print_result, print_snapshot};
use crate::session::Session;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(session: &mut Session<R>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Hangman - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("The computer picked a word. Guess it one letter at a time.");
    println!("Each miss costs an attempt; run out and the round is lost.\n");
    println!("Commands: 'quit' to exit, 'new' to reset the session\n");

    let snapshot = session.snapshot();
    print_snapshot(&snapshot);

    loop {
        let input = get_user_input("\nGuess a letter")?;

        match input.as_str() {
            "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                session.start_session();
                println!("\n🔄 New session started! Wins and losses reset.\n");
                print_snapshot(&session.snapshot());
                continue;
            }
            _ => {}
        }

        let mut chars = input.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            println!("Type a single letter (or 'quit' / 'new').");
            continue;
        };

        match session.guess(ch) {
            Ok(_) => {
                let snapshot = session.snapshot();
                print_result(&snapshot);
                print_snapshot(&snapshot);
            }
            Err(error) => {
                // Rejected guesses change nothing; tell the player why
                print_guess_error(&error);
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
