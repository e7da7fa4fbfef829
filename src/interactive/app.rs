//! TUI application state and logic

use crate::core::{BitWidth, GuessOutcome};
use crate::engine::{GuessEngine, SessionStats};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest answer the input field accepts
pub const MAX_INPUT_LEN: usize = 12;

/// Application state
pub struct App<R = StdRng> {
    pub engine: GuessEngine<R>,
    pub input_buffer: String,
    pub input_state: InputState,
    pub messages: Vec<Message>,
    pub stats: SessionStats,
    pub should_quit: bool,
}

/// Feedback attached to the input field after the last submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    Neutral,
    /// Last guess was a number but not the answer
    Wrong,
    /// Last guess was not a number at all
    NotANumber,
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

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(engine: GuessEngine<R>) -> Self {
        Self {
            engine,
            input_buffer: String::new(),
            input_state: InputState::Neutral,
            messages: vec![
                Message {
                    text: "Welcome! Type the decimal value of the binary number.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Use ←/→ or -/+ to change the bit width, n to skip.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: SessionStats::default(),
            should_quit: false,
        }
    }

    /// Check the typed answer against the current target
    pub fn submit(&mut self) {
        let input = self.input_buffer.clone();
        let outcome = self.engine.check_guess(&input);
        self.stats.record(outcome);

        match outcome {
            GuessOutcome::Correct => {
                self.input_state = InputState::Neutral;
                self.input_buffer.clear();
                let text = if self.stats.streak > 1 {
                    format!("Correct! {} in a row", self.stats.streak)
                } else {
                    "Correct!".to_string()
                };
                self.add_message(&text, MessageStyle::Success);
            }
            GuessOutcome::Wrong => {
                self.input_state = InputState::Wrong;
                self.add_message(
                    &format!("{} is not it. Try again!", input.trim()),
                    MessageStyle::Error,
                );
            }
            GuessOutcome::NotANumber => {
                self.input_state = InputState::NotANumber;
                self.add_message("Enter a whole decimal number", MessageStyle::Error);
            }
        }
    }

    /// Move to the next wider bit width
    pub fn wider(&mut self) {
        let width = self.engine.bit_width();
        if width.next() == width {
            self.add_message("Already at the widest setting", MessageStyle::Info);
        } else {
            self.change_width(width.next());
        }
    }

    /// Move to the next narrower bit width
    pub fn narrower(&mut self) {
        let width = self.engine.bit_width();
        if width.prev() == width {
            self.add_message("Already at the narrowest setting", MessageStyle::Info);
        } else {
            self.change_width(width.prev());
        }
    }

    fn change_width(&mut self, width: BitWidth) {
        self.engine.set_width(width);
        self.input_buffer.clear();
        self.input_state = InputState::Neutral;
        self.add_message(&format!("Now playing with {width}"), MessageStyle::Info);
    }

    /// Give up on the current target and show its value
    pub fn skip(&mut self) {
        let previous = self.engine.target();
        self.engine.new_round();
        self.input_buffer.clear();
        self.input_state = InputState::Neutral;
        self.stats.streak = 0;
        self.add_message(&format!("Skipped - it was {previous}"), MessageStyle::Info);
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

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('n') => self.skip(),
            KeyCode::Right | KeyCode::Up | KeyCode::Char('+') => self.wider(),
            KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => self.narrower(),
            // The answer field only takes decimal digits
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.input_buffer.len() < MAX_INPUT_LEN {
                    self.input_buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<SessionStats> {
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

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
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

    Ok(app.stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(GuessEngine::seeded(BitWidth::DEFAULT, 11))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn correct_answer_clears_input() {
        let mut app = app();
        let answer = app.engine.target().to_string();

        type_text(&mut app, &answer);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.engine.score(), 1);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_state, InputState::Neutral);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn wrong_answer_keeps_input_and_flags_error() {
        let mut app = app();
        let wrong = (app.engine.target() + 1).to_string();

        type_text(&mut app, &wrong);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.engine.score(), 0);
        assert_eq!(app.input_buffer, wrong);
        assert_eq!(app.input_state, InputState::Wrong);
    }

    #[test]
    fn malformed_answer_has_own_state() {
        let mut app = app();
        app.input_buffer = "abc".to_string();
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_state, InputState::NotANumber);
        assert_eq!(app.stats.malformed, 1);
    }

    #[test]
    fn empty_submit_is_not_a_number() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_state, InputState::NotANumber);
    }

    #[test]
    fn arrows_change_width() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.engine.bit_width().get(), 6);

        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.engine.bit_width().get(), 4);
        assert!((3..=7).contains(&app.engine.target()));

        press(&mut app, KeyCode::Left);
        assert_eq!(app.engine.bit_width().get(), 4);
        assert_eq!(
            app.messages.last().unwrap().text,
            "Already at the narrowest setting"
        );
    }

    #[test]
    fn skip_reveals_previous_target() {
        let mut app = app();
        let target = app.engine.target();
        type_text(&mut app, "12");
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.engine.score(), 0);
        assert!(app.input_buffer.is_empty());
        assert_eq!(
            app.messages.last().unwrap().text,
            format!("Skipped - it was {target}")
        );
    }

    #[test]
    fn plus_and_minus_change_width() {
        let mut app = app();
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.engine.bit_width().get(), 6);
        assert_eq!(app.engine.binary().len(), 6);

        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.engine.bit_width().get(), 4);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn command_keys_are_not_typed() {
        let mut app = app();
        let target = app.engine.target();
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('q'));

        assert!(app.input_buffer.is_empty());
        assert!(app.should_quit);
        assert_eq!(app.engine.bit_width().get(), 6);
        assert!(app.messages.iter().any(|m| m.text == format!("Skipped - it was {target}")));
    }

    #[test]
    fn only_digits_reach_the_input() {
        let mut app = app();
        type_text(&mut app, "1a2 .x3");
        assert_eq!(app.input_buffer, "123");
        assert!(!app.should_quit);
    }

    #[test]
    fn backspace_and_length_limit() {
        let mut app = app();
        type_text(&mut app, "12345678901234567");
        assert_eq!(app.input_buffer.len(), MAX_INPUT_LEN);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer.len(), MAX_INPUT_LEN - 1);
    }

    #[test]
    fn quit_keys() {
        let mut first = app();
        press(&mut first, KeyCode::Esc);
        assert!(first.should_quit);

        let mut second = app();
        second.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(second.should_quit);

        let mut third = app();
        press(&mut third, KeyCode::Char('q'));
        assert!(third.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("msg {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "msg 5");
    }
}
