//! Word Scramble
//!
//! A word-unscrambling game: a word is drawn from a vocabulary, its letters
//! are shuffled, and the player types guesses until they find it. Correct
//! guesses score 10, 7 or 5 points depending on the attempt.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{RoundController, SequenceSource, Verdict, Vocabulary};
//!
//! let vocabulary = Vocabulary::from_words(["cat"]);
//! let mut rng = SequenceSource::default();
//! let mut round = RoundController::new(&vocabulary, &mut rng);
//!
//! assert_eq!(round.scrambled(), "atc");
//!
//! round.set_guess("CAT");
//! assert_eq!(round.submit(), Some(Verdict::Correct));
//! assert_eq!(round.score(), Some(10));
//! ```

// Core domain types and game rules
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
