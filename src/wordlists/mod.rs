//! Word lists for puzzles
//!
//! Provides the embedded vocabulary compiled into the binary, plus loading
//! from files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::VocabularyError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_distinct() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn words_can_be_scrambled() {
        // Every built-in word needs a permutation other than itself
        for &word in WORDS {
            let first = word.chars().next();
            assert!(word.chars().count() >= 2, "Word '{word}' is too short");
            assert!(
                word.chars().any(|c| Some(c) != first),
                "Word '{word}' has only one distinct letter"
            );
        }
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORDS_COUNT, 18, "Expected 18 built-in words");
    }
}
