//! Simple interactive CLI mode
//!
//! Line-oriented game without the TUI

use crate::core::{HintMode, RandomSource, RoundController, Verdict};
use crate::output::formatters::{attempts_label, spaced_letters};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    NewPuzzle,
    Hint(HintMode),
    Guess(String),
}

impl LineCommand {
    /// Parse one line; anything not starting with ':' is a guess
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let mut parts = trimmed.split_whitespace();

        match parts.next() {
            Some(":quit" | ":q" | ":exit") => Self::Quit,
            Some(":new" | ":n") => Self::NewPuzzle,
            Some(":hint" | ":h") => {
                Self::Hint(parts.next().map_or(HintMode::First, HintMode::from_name))
            }
            _ => Self::Guess(trimmed.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// Plays rounds until the player quits or input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R, I, W>(
    controller: &mut RoundController,
    rng: &mut R,
    mut input: I,
    output: &mut W,
) -> Result<()>
where
    R: RandomSource + ?Sized,
    I: BufRead,
    W: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                  Word Scramble - Simple Mode                 ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Unscramble the letters and type the word.")?;
    writeln!(
        output,
        "Commands: ':hint [first|last|both]', ':new' for another word, ':quit' to exit\n"
    )?;

    print_round(controller, output)?;

    loop {
        let Some(line) = read_line(&mut input, output, "Your guess")? else {
            writeln!(output, "\n👋 Thanks for playing!\n")?;
            break;
        };

        match LineCommand::parse(&line) {
            LineCommand::Quit => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                break;
            }
            LineCommand::NewPuzzle => {
                writeln!(
                    output,
                    "The word was {}.",
                    controller.round().answer().to_uppercase().bright_white()
                )?;
                controller.new_puzzle(rng);
                print_round(controller, output)?;
            }
            LineCommand::Hint(mode) => {
                writeln!(
                    output,
                    "💡 Hint ({mode}): {}\n",
                    controller.hint(mode).bright_yellow().bold()
                )?;
            }
            LineCommand::Guess(guess) => {
                controller.set_guess(&guess);
                match controller.submit() {
                    Some(Verdict::Correct) => {
                        print_solved(controller, output)?;
                        controller.new_puzzle(rng);
                        print_round(controller, output)?;
                    }
                    Some(Verdict::Incorrect) => {
                        let feedback = controller.feedback().unwrap_or_default();
                        writeln!(output, "{}\n", feedback.red().bold())?;
                    }
                    None => {
                        writeln!(output, "Type a guess, or ':quit' to exit.\n")?;
                    }
                }
            }
        }
    }

    print_session_summary(controller, output)?;
    Ok(())
}

fn print_round<W: Write>(controller: &RoundController, output: &mut W) -> Result<()> {
    let stats = controller.stats();
    writeln!(output, "{}", "─".repeat(60).cyan())?;
    writeln!(output, "Round {}", stats.rounds_started)?;
    writeln!(output, "{}", "─".repeat(60).cyan())?;

    if controller.scrambled().is_empty() {
        writeln!(output, "\nNo words available. Type ':quit' to exit.\n")?;
    } else {
        writeln!(
            output,
            "\n🔀 {}\n",
            spaced_letters(controller.scrambled()).bright_blue().bold()
        )?;
    }
    Ok(())
}

fn print_solved<W: Write>(controller: &RoundController, output: &mut W) -> Result<()> {
    let feedback = controller.feedback().unwrap_or_default();
    let score = controller.score().unwrap_or_default();
    let attempts = controller.attempts();

    writeln!(output, "\n{}", feedback.bright_green().bold())?;
    writeln!(
        output,
        "  +{} points in {attempts} {}",
        score.to_string().bright_yellow().bold(),
        attempts_label(attempts)
    )?;
    writeln!(
        output,
        "  Total score: {}\n",
        controller.stats().total_score.to_string().bright_cyan()
    )?;
    Ok(())
}

fn print_session_summary<W: Write>(controller: &RoundController, output: &mut W) -> Result<()> {
    let stats = controller.stats();
    writeln!(
        output,
        "Solved {} of {} rounds, {} points total.",
        stats.rounds_solved, stats.rounds_started, stats.total_score
    )?;
    Ok(())
}

/// Prompt and read one line; `None` at end of input
fn read_line<I: BufRead, W: Write>(
    input: &mut I,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;

    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim().to_string()))
    }
}
