//! TUI application state and logic

use crate::core::{GameConfig, Letter, Lexicon};
use crate::game::{GameError, GameSession, Participant};
use crate::solver::outcome::classify_children;
use crate::solver::{MoveClassification, StrategyType};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub lexicon: &'a Lexicon,
    pub config: GameConfig,
    pub strategy: StrategyType,
    pub session: GameSession<'a>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub show_hints: bool,
    pub last_computer_move: Option<MoveClassification>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    GameOver,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub computer_losses: usize,
    pub longest_string: usize,
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyDictionary` if no game can be played.
    pub fn new(
        lexicon: &'a Lexicon,
        config: GameConfig,
        strategy: StrategyType,
    ) -> Result<Self, GameError> {
        let session = GameSession::new(lexicon, config)?;

        let mut app = Self {
            lexicon,
            config,
            strategy,
            session,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Playing,
            show_hints: false,
            last_computer_move: None,
        };
        app.add_message(
            "Welcome! Add letters without completing a word.",
            MessageStyle::Info,
        );
        app.add_message(
            &format!("{} starts. Type a letter (a-z).", app.session.current_participant()),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Play a typed character for the human due to move, then let the computer reply
    pub fn handle_letter(&mut self, c: char) {
        if self.input_mode != InputMode::Playing {
            return;
        }

        let letter = match Letter::from_char(c.to_ascii_lowercase()) {
            Ok(letter) => letter,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let mover = self.session.current_participant();
        if let Err(e) = self.session.play_human(letter) {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }
        self.add_message(&format!("{mover} played {letter}"), MessageStyle::Info);

        self.run_computer();
        self.check_game_over();
    }

    fn run_computer(&mut self) {
        while !self.session.is_over() && self.session.current_participant().is_computer() {
            match self.session.play_computer(&mut self.strategy) {
                Ok(Some(m)) => {
                    self.last_computer_move = Some(m);
                    self.add_message(
                        &format!("Computer played {}", m.letter),
                        MessageStyle::Info,
                    );
                }
                Ok(None) => {}
                Err(e) => {
                    self.add_message(&e.to_string(), MessageStyle::Error);
                    return;
                }
            }
        }
    }

    fn check_game_over(&mut self) {
        let Some(outcome) = self.session.outcome().cloned() else {
            return;
        };

        self.stats.total_games += 1;
        self.stats.longest_string = self.stats.longest_string.max(outcome.final_string.len());
        self.input_mode = InputMode::GameOver;

        let headline = format!(
            "{} loses: {} ({})",
            outcome.loser,
            outcome.reason,
            outcome.final_string.to_uppercase()
        );
        if outcome.loser == Participant::Computer {
            self.stats.computer_losses += 1;
            self.add_message(&format!("🎉 {headline}"), MessageStyle::Success);
        } else {
            self.add_message(&format!("👻 {headline}"), MessageStyle::Error);
        }
        self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        match GameSession::new(self.lexicon, self.config) {
            Ok(session) => self.session = session,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }
        self.last_computer_move = None;
        self.messages.clear();
        self.input_mode = InputMode::Playing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn toggle_hints(&mut self) {
        self.show_hints = !self.show_hints;
        let state = if self.show_hints { "on" } else { "off" };
        self.add_message(&format!("Hints {state}"), MessageStyle::Info);
    }

    /// Classification of the letters available to the player to move
    #[must_use]
    pub fn hints(&self) -> Vec<MoveClassification> {
        if self.session.is_over() {
            return Vec::new();
        }
        classify_children(self.lexicon, self.session.position(), &self.config)
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
pub fn run_tui(app: App<'_>) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App<'_>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Tab => {
                    app.toggle_hints();
                }
                KeyCode::Enter if app.input_mode == InputMode::GameOver => {
                    app.new_game();
                }
                KeyCode::Char(c) if app.input_mode == InputMode::Playing => {
                    app.handle_letter(c);
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
