//! Core puzzle logic
//!
//! Word selection, scrambling, guess evaluation and the round controller.
//! Nothing here does I/O; randomness comes in through [`RandomSource`].

mod evaluate;
mod random;
mod round;
mod scramble;
mod vocabulary;

pub use evaluate::{
    HintMode, SCORE_FIRST_ATTEMPT, SCORE_LATER_ATTEMPT, SCORE_SECOND_ATTEMPT, get_hint,
    is_anagram, normalize_input, score_guess,
};
pub use random::{RandomSource, SequenceSource};
pub use round::{
    FEEDBACK_CORRECT, FEEDBACK_INCORRECT, MAX_GUESS_LENGTH, PuzzleRound, RoundController,
    RoundState, SessionStats, Verdict,
};
pub use scramble::{
    MAX_SCRAMBLE_ATTEMPTS, Scramble, pick_random_word, scramble_unique, scramble_with_attempts,
    shuffle_letters,
};
pub use vocabulary::{MAX_WORD_LENGTH, Vocabulary};
