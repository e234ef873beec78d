//! Puzzle vocabulary
//!
//! An ordered list of distinct lowercase words, fixed once built.

use rustc_hash::FxHashSet;
use std::fmt;
use std::ops::Deref;

/// Longest word (in characters) the guess box can hold
pub const MAX_WORD_LENGTH: usize = 24;

/// Immutable set of candidate answers
///
/// Entries are trimmed, lowercased, purely alphabetic, at most
/// [`MAX_WORD_LENGTH`] characters long, and unique. Order of first
/// appearance is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary, skipping blank, invalid and duplicate entries
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::from_words([" Galaxy", "galaxy", "r2d2", "", "dolphin"]);
    /// assert_eq!(vocabulary.words(), ["galaxy", "dolphin"]);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut kept = Vec::new();

        for raw in words {
            let Some(word) = canonical_word(raw.as_ref()) else {
                continue;
            };
            if seen.insert(word.clone()) {
                kept.push(word);
            }
        }

        Self { words: kept }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl Deref for Vocabulary {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} words", self.words.len())
    }
}

/// Normalize one raw entry, or `None` if it can't be a puzzle answer
fn canonical_word(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();

    if word.is_empty() || word.chars().count() > MAX_WORD_LENGTH {
        return None;
    }
    if !word.chars().all(char::is_alphabetic) {
        return None;
    }

    Some(word)
}
