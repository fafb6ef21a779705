//! Terminal output formatting
//!
//! Display utilities shared by the plain CLI mode and the TUI.

pub mod display;
pub mod formatters;

pub use display::{print_guess_error, print_result, print_snapshot};
