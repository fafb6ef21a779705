//! Formatting utilities for terminal output

use crate::core::Outcome;
use crate::session::RoundResult;

/// Format the masked word for display: letters separated by gaps
///
/// # Examples
/// ```
/// use hangman::output::formatters::masked_display;
///
/// assert_eq!(masked_display("M_O_"), "M  _  O  _");
/// ```
#[must_use]
pub fn masked_display(masked: &str) -> String {
    let mut result = String::with_capacity(masked.len() * 3);
    for (i, ch) in masked.chars().enumerate() {
        if i > 0 {
            result.push_str("  ");
        }
        result.push(ch);
    }
    result
}

/// Format the guessed letters as a comma-separated list
#[must_use]
pub fn letters_display(guessed: &[char]) -> String {
    guessed
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a round result as plain text
///
/// The loss message includes the revealed answer, uppercased.
#[must_use]
pub fn result_text(result: &RoundResult) -> String {
    match result.outcome {
        Outcome::Win => "YOU WON!!!".to_string(),
        Outcome::Loss => {
            format!("YOU LOST! ANSWER WAS: {}", result.answer.to_uppercase())
        }
        // Session only queues terminal results
        Outcome::Continue => unreachable!(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format remaining attempts as a bar
#[must_use]
pub fn attempts_bar(attempts_left: u8, width: usize) -> String {
    create_progress_bar(
        f64::from(attempts_left),
        f64::from(crate::core::MAX_ATTEMPTS),
        width,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_ATTEMPTS;

    #[test]
    fn masked_display_interleaves_gaps() {
        assert_eq!(masked_display("MOON"), "M  O  O  N");
        assert_eq!(masked_display("____"), "_  _  _  _");
        assert_eq!(masked_display("M"), "M");
        assert_eq!(masked_display(""), "");
    }

    #[test]
    fn letters_display_preserves_order() {
        assert_eq!(letters_display(&['Z', 'A', 'M']), "Z, A, M");
        assert_eq!(letters_display(&[]), "");
    }

    #[test]
    fn result_text_win() {
        let result = RoundResult {
            outcome: Outcome::Win,
            answer: "moon".to_string(),
        };
        assert_eq!(result_text(&result), "YOU WON!!!");
    }

    #[test]
    fn result_text_loss_reveals_answer() {
        let result = RoundResult {
            outcome: Outcome::Loss,
            answer: "cat".to_string(),
        };
        assert_eq!(result_text(&result), "YOU LOST! ANSWER WAS: CAT");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn attempts_bar_full_at_round_start() {
        let bar = attempts_bar(MAX_ATTEMPTS, 12);
        assert_eq!(bar, "████████████");
    }

    #[test]
    fn attempts_bar_empty_when_exhausted() {
        let bar = attempts_bar(0, 12);
        assert_eq!(bar, "░░░░░░░░░░░░");
    }
}
