//! TUI application state and logic

use crate::core::{HintMode, RoundController, RoundState, SessionStats, Verdict, Vocabulary};
use crate::output::formatters::attempts_label;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Most messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub controller: RoundController<'a>,
    pub rng: StdRng,
    pub messages: Vec<Message>,
    pub hint: Option<Hint>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub mode: HintMode,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary, mut rng: StdRng) -> Self {
        let controller = RoundController::new(vocabulary, &mut rng);

        Self {
            controller,
            rng,
            messages: vec![
                Message {
                    text: "Welcome! Unscramble the letters to find the word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter submits, Tab skips to a new word, F1 shows a hint.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            hint: None,
            should_quit: false,
        }
    }

    pub fn new_puzzle(&mut self) {
        self.controller.new_puzzle(&mut self.rng);
        self.hint = None;
        self.add_message("New word! Good luck.", MessageStyle::Info);
    }

    pub fn submit(&mut self) {
        match self.controller.submit() {
            Some(Verdict::Correct) => {
                let score = self.controller.score().unwrap_or_default();
                let attempts = self.controller.attempts();
                self.add_message(
                    &format!("+{score} points ({attempts} {})", attempts_label(attempts)),
                    MessageStyle::Success,
                );
                self.add_message("Press Tab for another word or Esc to quit.", MessageStyle::Info);
            }
            Some(Verdict::Incorrect) => {
                self.add_message(
                    &format!("'{}' is not it.", self.controller.guess().trim()),
                    MessageStyle::Error,
                );
            }
            None => {}
        }
    }

    /// Reveal the next hint, cycling first → last → both
    pub fn next_hint(&mut self) {
        let mode = self.hint.as_ref().map_or(HintMode::First, |h| h.mode.next());
        let text = self.controller.hint(mode);
        self.add_message(&format!("Hint ({mode}): {text}"), MessageStyle::Info);
        self.hint = Some(Hint { mode, text });
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply a key press to the app
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_puzzle();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.controller.clear_guess();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.new_puzzle();
            }
            KeyCode::F(1) => {
                self.next_hint();
            }
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Backspace => {
                self.controller.pop_char();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.controller.push_char(c);
            }
            _ => {}
        }
    }

    /// Whether the guess box should show as errored
    #[must_use]
    pub fn guess_rejected(&self) -> bool {
        self.controller.state() == RoundState::Resolved(Verdict::Incorrect)
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(stats) => {
            info!(
                rounds = stats.rounds_started,
                solved = stats.rounds_solved,
                score = stats.total_score,
                "session finished"
            );
        }
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<SessionStats> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.controller.stats().clone())
}
