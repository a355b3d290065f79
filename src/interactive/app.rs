//! TUI application state and logic

use crate::core::{GuessKind, Round, Word};
use crate::engine::{EmptyWordList, GuessEngine, RoundSummary, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub engine: GuessEngine<'a>,
    pub rng: StdRng,
    pub round: Round,
    pub session: Session,
    pub last_summary: Option<RoundSummary>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
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

impl<'a> App<'a> {
    /// Create the app and start the first round
    ///
    /// # Errors
    /// Returns [`EmptyWordList`] if `words` is empty.
    pub fn new(words: &'a [Word], mut rng: StdRng) -> Result<Self, EmptyWordList> {
        let engine = GuessEngine::new(words);
        let round = engine.start_round(&mut rng)?;

        Ok(Self {
            engine,
            rng,
            round,
            session: Session::new(),
            last_summary: None,
            messages: vec![
                Message {
                    text: "Welcome! Guess the hidden word one letter at a time.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Seven wrong guesses and the round is lost.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            input_mode: InputMode::Guessing,
        })
    }

    /// Apply a typed letter to the current round
    pub fn handle_guess(&mut self, letter: char) {
        match self.round.apply_guess(letter) {
            Ok(report) => {
                let letter = report.letter;
                match report.kind {
                    GuessKind::Hit => {
                        self.add_message(
                            &format!("'{letter}' is in the word!"),
                            MessageStyle::Success,
                        );
                    }
                    GuessKind::Miss => {
                        self.add_message(
                            &format!("'{letter}' is not in the word."),
                            MessageStyle::Error,
                        );
                    }
                    GuessKind::Repeat => {
                        self.add_message(
                            &format!("'{letter}' was already tried."),
                            MessageStyle::Info,
                        );
                    }
                }

                if report.outcome.is_terminal() {
                    let summary = GuessEngine::summarize(&self.round);
                    self.session.record(&summary);
                    self.last_summary = Some(summary);
                    self.input_mode = InputMode::RoundOver;
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Replace the finished round with a fresh one
    pub fn new_round(&mut self) {
        match self.engine.start_round(&mut self.rng) {
            Ok(round) => {
                self.round = round;
                self.last_summary = None;
                self.input_mode = InputMode::Guessing;
                self.add_message("New round started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
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
pub fn run_tui(app: App) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') | KeyCode::Enter => {
                        app.new_round();
                    }
                    _ => {
                        // In the round-over popup, ignore other keys
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    // Every letter key is a guess, so quitting mid-round is Esc only
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        app.handle_guess(c);
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
