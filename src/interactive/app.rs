//! TUI application state and logic

use crate::core::Outcome;
use crate::output::formatters::result_text;
use crate::session::{Session, Snapshot};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<R: Rng> {
    pub session: Session<R>,
    pub snapshot: Snapshot,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(mut session: Session<R>) -> Self {
        let snapshot = session.snapshot();

        Self {
            session,
            snapshot,
            messages: vec![
                Message {
                    text: "Welcome! The computer picked a word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters to guess it, one at a time.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Feed one typed character to the session
    ///
    /// The session case-folds and validates; a rejected guess becomes an
    /// error message and changes nothing else.
    pub fn handle_guess(&mut self, ch: char) {
        match self.session.guess(ch) {
            Ok(outcome) => {
                self.snapshot = self.session.snapshot();

                if let Some(result) = &self.snapshot.result {
                    let style = match result.outcome {
                        Outcome::Win => MessageStyle::Success,
                        _ => MessageStyle::Error,
                    };
                    self.add_message(&result_text(result), style);
                    self.add_message("New round started automatically.", MessageStyle::Info);
                } else if outcome == Outcome::Continue {
                    let ch = ch.to_ascii_uppercase();
                    if self.snapshot.masked.contains(ch) {
                        self.add_message(&format!("'{ch}' is in the word!"), MessageStyle::Success);
                    } else {
                        self.add_message(
                            &format!("'{ch}' is not in the word."),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(error) => {
                self.add_message(&error.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Reset the session: stats zeroed, fresh round
    pub fn new_session(&mut self) {
        self.session.start_session();
        self.snapshot = self.session.snapshot();
        self.messages.clear();
        self.add_message(
            "New session started! Wins and losses reset.",
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Every letter is a guess, so quit and reset live on
            // Esc / Ctrl-C / Ctrl-N rather than plain letters
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.new_session();
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) => {
                    app.handle_guess(c);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
