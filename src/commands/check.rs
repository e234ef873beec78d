//! Check command: evaluate a guess against an answer without playing a round

use crate::core::{is_anagram, normalize_input, score_guess};

/// Result of checking one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub normalized_guess: String,
    pub normalized_answer: String,
    pub anagram: bool,
    pub correct: bool,
    pub score: u32,
}

/// Evaluate `guess` as if it were submitted on attempt number `attempts`
#[must_use]
pub fn check_guess(guess: &str, answer: &str, attempts: u32) -> CheckResult {
    let normalized_guess = normalize_input(Some(guess));
    let normalized_answer = normalize_input(Some(answer));
    let correct = normalized_guess == normalized_answer;

    CheckResult {
        anagram: is_anagram(guess, answer),
        score: score_guess(guess, answer, attempts),
        correct,
        normalized_guess,
        normalized_answer,
    }
}
