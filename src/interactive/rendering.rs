//! TUI rendering with ratatui
//!
//! Layout for the hangman interface: masked word, attempts gauge, session
//! stats, guessed letters, and the message log.

use super::app::{App, MessageStyle};
use crate::core::{MAX_ATTEMPTS, Outcome};
use crate::output::formatters::{letters_display, masked_display, result_text};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Result banner
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Result banner
    render_banner(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN - Guess the Word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Masked word
            Constraint::Length(3), // Attempts gauge
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_attempts(f, app, chunks[1]);
}

fn render_word<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            masked_display(&app.snapshot.masked),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} letters", app.snapshot.masked.len()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_attempts<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let attempts = app.snapshot.attempts_left;

    // Green while safe, yellow when half spent, red near the end
    let color = match attempts {
        7.. => Color::Green,
        4..=6 => Color::Yellow,
        _ => Color::Red,
    };

    let percent = u16::from(attempts) * 100 / u16::from(MAX_ATTEMPTS);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{attempts}/{MAX_ATTEMPTS} wrong guesses left"));

    f.render_widget(gauge, area);
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Session stats
            Constraint::Length(4), // Guessed letters
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_stats(f, app, chunks[0]);
    render_guessed(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_stats<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Wins:   "),
            Span::styled(
                app.snapshot.wins.to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Losses: "),
            Span::styled(
                app.snapshot.losses.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_guessed<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let content = if app.snapshot.guessed.is_empty() {
        Line::from(Span::styled(
            "(none yet)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(letters_display(&app.snapshot.guessed))
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Guessed Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_banner<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (content, color) = match &app.snapshot.result {
        Some(result) => {
            let color = match result.outcome {
                Outcome::Win => Color::Green,
                _ => Color::Red,
            };
            (result_text(result), color)
        }
        None => ("Type a letter to guess".to_string(), Color::DarkGray),
    };

    let banner = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(banner, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let rounds = app.snapshot.wins + app.snapshot.losses;
    let rounds_text = format!("Rounds finished: {rounds}");
    let rounds_widget = Paragraph::new(rounds_text).alignment(Alignment::Center);
    f.render_widget(rounds_widget, chunks[0]);

    let win_rate = if rounds > 0 {
        f64::from(app.snapshot.wins) / f64::from(rounds) * 100.0
    } else {
        0.0
    };
    let stats = Paragraph::new(format!("Win rate: {win_rate:.0}%")).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Session")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
