//! Simple interactive CLI mode
//!
//! Line-based quiz without the TUI

use crate::core::GuessOutcome;
use crate::engine::{GuessEngine, SessionStats};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Quit,
    /// Skip the current target without scoring
    New,
    /// Change the bit width; `None` when the argument is missing or unreadable
    Bits(Option<u8>),
    Stats,
    Guess(String),
}

impl SimpleCommand {
    /// Interpret a line typed at the prompt
    ///
    /// Anything that is not a command is a guess, so the engine decides
    /// whether it is a readable number.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let lower = trimmed.to_lowercase();
        let mut parts = lower.split_whitespace();

        match parts.next() {
            Some("quit" | "q" | "exit") => Self::Quit,
            Some("new" | "n" | "skip") => Self::New,
            Some("stats" | "s") => Self::Stats,
            Some("bits" | "b") => Self::Bits(parts.next().and_then(|arg| arg.parse().ok())),
            _ => Self::Guess(trimmed.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<G: Rng>(engine: &mut GuessEngine<G>) -> Result<SessionStats, String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(engine, stdin.lock(), stdout.lock()).map_err(|e| e.to_string())
}

/// Drive a quiz session over arbitrary input and output streams
///
/// Ends on `quit` or end of input and returns the session tally.
///
/// # Errors
///
/// Returns any I/O error from `input` or `out`.
pub fn run_session<G, I, O>(
    engine: &mut GuessEngine<G>,
    mut input: I,
    mut out: O,
) -> io::Result<SessionStats>
where
    G: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                Binary Quiz - Interactive Mode                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Type the decimal value of each binary number.")?;
    writeln!(
        out,
        "Commands: 'bits <4-10>' to change width, 'new' to skip, 'stats', 'quit'\n"
    )?;

    let mut stats = SessionStats::default();

    loop {
        writeln!(
            out,
            "────────────────────────────────────────────────────────────"
        )?;
        writeln!(
            out,
            "Score: {}   Width: {}   Range: {}..={}",
            engine.score(),
            engine.bit_width(),
            engine.range().start(),
            engine.range().end()
        )?;
        writeln!(out, "\n    {}\n", engine.binary().bright_white().bold())?;
        write!(out, "Decimal value: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match SimpleCommand::parse(&line) {
            SimpleCommand::Quit => break,
            SimpleCommand::New => {
                let previous = engine.target();
                engine.new_round();
                writeln!(out, "Skipped. That one was {previous}.\n")?;
            }
            SimpleCommand::Bits(Some(bits)) => match engine.configure(bits) {
                Ok(()) => writeln!(out, "Now playing with {}.\n", engine.bit_width())?,
                Err(e) => writeln!(out, "{} {e}\n", "✗".red())?,
            },
            SimpleCommand::Bits(None) => writeln!(out, "Usage: bits <4-10>\n")?,
            SimpleCommand::Stats => print_stats(&mut out, &stats)?,
            SimpleCommand::Guess(text) => {
                let outcome = engine.check_guess(&text);
                stats.record(outcome);
                match outcome {
                    GuessOutcome::Correct => writeln!(
                        out,
                        "{} Score: {}\n",
                        "✓ Correct!".green().bold(),
                        engine.score()
                    )?,
                    GuessOutcome::Wrong => {
                        writeln!(out, "{} Try again.\n", "✗ Not quite.".red().bold())?;
                    }
                    GuessOutcome::NotANumber => writeln!(
                        out,
                        "{} '{text}' is not a whole number.\n",
                        "✗".yellow().bold()
                    )?,
                }
            }
        }
    }

    writeln!(
        out,
        "\n👋 Final score: {} ({} attempts)\n",
        engine.score(),
        stats.attempts
    )?;
    Ok(stats)
}

fn print_stats<O: Write>(out: &mut O, stats: &SessionStats) -> io::Result<()> {
    writeln!(out, "\n📊 Session statistics:")?;
    writeln!(out, "   Attempts:     {}", stats.attempts)?;
    writeln!(out, "   Correct:      {}", stats.correct)?;
    writeln!(out, "   Wrong:        {}", stats.wrong)?;
    writeln!(out, "   Not a number: {}", stats.malformed)?;
    writeln!(out, "   Accuracy:     {:.0}%", stats.accuracy())?;
    writeln!(
        out,
        "   Streak:       {} (best {})\n",
        stats.streak, stats.best_streak
    )
}
