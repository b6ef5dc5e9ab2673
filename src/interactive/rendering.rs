//! TUI rendering with ratatui
//!
//! Visualizations for the Ghost game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{odds_bar, outcome_detail};
use crate::solver::Outcome;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("👻 GHOST - Don't finish the word")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Current string
            Constraint::Percentage(50), // Hints
            Constraint::Min(4),         // History
        ])
        .split(area);

    render_current_string(f, app, chunks[0]);
    render_hints(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_string(f: &mut Frame, app: &App, area: Rect) {
    let text = app.session.text();
    let shown = if text.is_empty() {
        "_".to_string()
    } else {
        text.to_uppercase()
    };

    let mut content = vec![Line::from(vec![
        Span::raw("Word so far: "),
        Span::styled(
            shown,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if let Some(m) = app.last_computer_move {
        content.push(Line::from(format!(
            "Computer's last: {} ({})",
            m.letter.to_string().to_uppercase(),
            m.outcome.label()
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Current String ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let content = if !app.show_hints {
        vec![Line::from("Press TAB to show how each letter plays out")]
    } else if app.session.is_over() {
        vec![Line::from("Game over")]
    } else {
        app.hints()
            .iter()
            .map(|m| {
                let color = match m.outcome {
                    Outcome::Win => Color::Green,
                    Outcome::Uncertain { .. } => Color::Yellow,
                    Outcome::Loss { .. } => Color::Red,
                    Outcome::NoWordBelow | Outcome::DeadEnd => Color::DarkGray,
                };
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", m.letter.to_string().to_uppercase()),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(odds_bar(&m.outcome, 8), Style::default().fg(color)),
                    Span::raw(format!(" {}", outcome_detail(m))),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(format!(" Moves for {} ", app.session.current_participant()))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let history_items: Vec<ListItem> = history
        .iter()
        .rev()
        .take(8)
        .enumerate()
        .map(|(i, played)| {
            let mut content = format!(
                "{}: {} played {}",
                history.len() - i,
                played.participant,
                played.letter.to_string().to_uppercase()
            );
            if let Some(m) = played.classification {
                content.push_str(&format!(" [{}]", m.outcome.label()));
            }
            ListItem::new(content)
        })
        .collect();

    let list =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Record gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_record(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_record(f: &mut Frame, app: &App, area: Rect) {
    let games = app.stats.total_games;
    let losses = app.stats.computer_losses;
    // Cast is safe: the ratio never exceeds 100
    let pct = if games > 0 {
        (losses * 100 / games) as u16
    } else {
        0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Games Won vs Computer ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(pct)
        .label(format!("{losses}/{games} games"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => {
            let headline = app.session.outcome().map_or_else(String::new, |o| {
                format!("{} loses: {}", o.loser, o.reason)
            });
            (
                " Game over | Enter for a new game, Esc to quit ".to_string(),
                headline,
                Color::Green,
            )
        }
        InputMode::Playing => (
            format!(
                " {}'s turn | type a letter (a-z) ",
                app.session.current_participant()
            ),
            String::new(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Computer: {}", app.strategy.name()))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let players = Paragraph::new(format!(
        "Humans: {} | Min word: {}",
        app.config.human_players(),
        app.config.min_word_length()
    ))
    .alignment(Alignment::Center);
    f.render_widget(players, chunks[1]);

    let longest = Paragraph::new(format!("Longest string: {}", app.stats.longest_string))
        .alignment(Alignment::Center);
    f.render_widget(longest, chunks[2]);

    let help_text = if app.input_mode == InputMode::GameOver {
        "Esc: Quit | Enter: New Game"
    } else {
        "Esc: Quit | TAB: Hints"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
