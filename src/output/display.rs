//! Display functions for the plain CLI mode

use super::formatters::{attempts_bar, letters_display, masked_display, result_text};
use crate::core::Outcome;
use crate::session::Snapshot;
use colored::Colorize;

/// Print the state of play after a transition
pub fn print_snapshot(snapshot: &Snapshot) {
    println!(
        "\n   {}   {}",
        format!("Wins: {}", snapshot.wins).green(),
        format!("Losses: {}", snapshot.losses).red()
    );

    println!(
        "\n   {}",
        masked_display(&snapshot.masked).bright_white().bold()
    );

    let bar = attempts_bar(snapshot.attempts_left, 12);
    println!(
        "\n   Attempts left: [{}] {}",
        bar.yellow(),
        snapshot.attempts_left.to_string().bright_yellow()
    );

    if snapshot.guessed.is_empty() {
        println!("   Guessed:       (none yet)");
    } else {
        println!("   Guessed:       {}", letters_display(&snapshot.guessed));
    }
}

/// Print the one-shot result banner for a finished round
pub fn print_result(snapshot: &Snapshot) {
    if let Some(result) = &snapshot.result {
        let text = result_text(result);
        println!("\n{}", "═".repeat(60).cyan());
        match result.outcome {
            Outcome::Win => println!(" {} ", text.bright_green().bold()),
            _ => println!(" {} ", text.bright_red().bold()),
        }
        println!("{}", "═".repeat(60).cyan());
    }
}

/// Print a rejected guess so the player knows why nothing changed
pub fn print_guess_error(error: &crate::core::GuessError) {
    println!("\n{}", format!("❌ {error}").red());
}
