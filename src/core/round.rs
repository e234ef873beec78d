//! Puzzle rounds and the controller that drives them
//!
//! A round is either awaiting a guess or resolved. Submitting moves it to
//! resolved; starting a new puzzle (or editing the guess after a miss)
//! moves it back.

use super::evaluate::{HintMode, get_hint, normalize_input, score_guess};
use super::random::RandomSource;
use super::scramble::{pick_random_word, scramble_with_attempts};
use super::vocabulary::{MAX_WORD_LENGTH, Vocabulary};
use tracing::{debug, warn};

/// Longest guess (in characters) the input accepts
pub const MAX_GUESS_LENGTH: usize = MAX_WORD_LENGTH;

/// Feedback shown after a correct guess
pub const FEEDBACK_CORRECT: &str = "🎉 Correct! Well done!";
/// Feedback shown after a wrong guess
pub const FEEDBACK_INCORRECT: &str = "❌ Try again!";

/// One puzzle: the answer and its scrambled display
///
/// Replaced as a whole when a new puzzle starts, never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleRound {
    answer: String,
    scrambled: String,
}

impl PuzzleRound {
    /// Draw a word and scramble it
    pub fn draw<R: RandomSource + ?Sized>(vocabulary: &Vocabulary, rng: &mut R) -> Self {
        let answer = pick_random_word(vocabulary, rng);
        let scramble = scramble_with_attempts(&answer, rng);

        debug!(
            length = answer.chars().count(),
            attempts = scramble.attempts,
            "drew new puzzle"
        );
        if answer.chars().count() >= 2 && scramble.is_unchanged(&answer) {
            warn!(
                attempts = scramble.attempts,
                "scramble left the answer unchanged"
            );
        }

        Self {
            answer,
            scrambled: scramble.text,
        }
    }

    #[inline]
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }
}

/// Outcome of a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingGuess,
    Resolved(Verdict),
}

/// In-memory tally for the current session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds_started: usize,
    pub rounds_solved: usize,
    pub total_score: u32,
    /// Fewest attempts needed to solve any round so far
    pub best_attempts: Option<u32>,
}

impl SessionStats {
    #[must_use]
    pub fn solve_rate(&self) -> f64 {
        if self.rounds_started == 0 {
            0.0
        } else {
            self.rounds_solved as f64 / self.rounds_started as f64 * 100.0
        }
    }
}

/// Drives puzzle rounds over a fixed vocabulary
pub struct RoundController<'a> {
    vocabulary: &'a Vocabulary,
    round: PuzzleRound,
    guess: String,
    attempts: u32,
    state: RoundState,
    feedback: Option<&'static str>,
    score: Option<u32>,
    stats: SessionStats,
}

impl<'a> RoundController<'a> {
    /// Create a controller and start its first round
    pub fn new<R: RandomSource + ?Sized>(vocabulary: &'a Vocabulary, rng: &mut R) -> Self {
        let mut controller = Self {
            vocabulary,
            round: PuzzleRound {
                answer: String::new(),
                scrambled: String::new(),
            },
            guess: String::new(),
            attempts: 0,
            state: RoundState::AwaitingGuess,
            feedback: None,
            score: None,
            stats: SessionStats::default(),
        };
        controller.new_puzzle(rng);
        controller
    }

    /// Replace the current round and reset all per-round state
    pub fn new_puzzle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.round = PuzzleRound::draw(self.vocabulary, rng);
        self.guess.clear();
        self.attempts = 0;
        self.state = RoundState::AwaitingGuess;
        self.feedback = None;
        self.score = None;
        self.stats.rounds_started += 1;
    }

    /// Append a character to the guess
    ///
    /// Returns `false` if the guess is full or the round is already solved.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.is_solved() || self.guess.chars().count() >= MAX_GUESS_LENGTH {
            return false;
        }
        self.guess.push(c);
        self.reset_feedback();
        true
    }

    pub fn pop_char(&mut self) -> Option<char> {
        if self.is_solved() {
            return None;
        }
        let popped = self.guess.pop();
        self.reset_feedback();
        popped
    }

    /// Replace the guess, truncated to [`MAX_GUESS_LENGTH`] characters
    pub fn set_guess(&mut self, text: &str) {
        if self.is_solved() {
            return;
        }
        self.guess = text.chars().take(MAX_GUESS_LENGTH).collect();
        self.reset_feedback();
    }

    pub fn clear_guess(&mut self) {
        self.set_guess("");
    }

    fn reset_feedback(&mut self) {
        self.state = RoundState::AwaitingGuess;
        self.feedback = None;
    }

    /// Check the current guess against the answer
    ///
    /// Blank guesses and guesses on a solved round are ignored and return
    /// `None`.
    pub fn submit(&mut self) -> Option<Verdict> {
        if self.is_solved() {
            return None;
        }

        let guess = normalize_input(Some(self.guess.as_str()));
        if guess.is_empty() {
            return None;
        }

        self.attempts += 1;
        let verdict = if guess == normalize_input(Some(self.round.answer.as_str())) {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };

        self.state = RoundState::Resolved(verdict);
        match verdict {
            Verdict::Correct => {
                let score = score_guess(&guess, &self.round.answer, self.attempts);
                self.feedback = Some(FEEDBACK_CORRECT);
                self.score = Some(score);
                self.stats.rounds_solved += 1;
                self.stats.total_score += score;
                self.stats.best_attempts = Some(
                    self.stats
                        .best_attempts
                        .map_or(self.attempts, |best| best.min(self.attempts)),
                );
            }
            Verdict::Incorrect => {
                self.feedback = Some(FEEDBACK_INCORRECT);
            }
        }

        debug!(attempts = self.attempts, ?verdict, "guess submitted");
        Some(verdict)
    }

    /// Hint for the current answer
    #[must_use]
    pub fn hint(&self, mode: HintMode) -> String {
        get_hint(&self.round.answer, mode)
    }

    #[must_use]
    pub const fn round(&self) -> &PuzzleRound {
        &self.round
    }

    #[must_use]
    pub fn scrambled(&self) -> &str {
        self.round.scrambled()
    }

    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub const fn feedback(&self) -> Option<&'static str> {
        self.feedback
    }

    /// Score of the current round, once solved
    #[must_use]
    pub const fn score(&self) -> Option<u32> {
        self.score
    }

    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.state, RoundState::Resolved(Verdict::Correct))
    }

    /// True when there is something to submit
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_solved() && !self.guess.trim().is_empty()
    }
}
