//! Guess evaluation: normalization, anagram check, hints and scoring
//!
//! Every function here is total and never returns an error.

use std::fmt;

/// Score for a correct guess on the first attempt
pub const SCORE_FIRST_ATTEMPT: u32 = 10;
/// Score for a correct guess on the second attempt
pub const SCORE_SECOND_ATTEMPT: u32 = 7;
/// Score for a correct guess on any later attempt
pub const SCORE_LATER_ATTEMPT: u32 = 5;

/// Trim surrounding whitespace and lowercase; `None` becomes `""`
///
/// # Examples
/// ```
/// use word_scramble::core::normalize_input;
///
/// assert_eq!(normalize_input(Some("  HeLLo  ")), "hello");
/// assert_eq!(normalize_input(None), "");
/// ```
#[must_use]
pub fn normalize_input(text: Option<&str>) -> String {
    text.map_or_else(String::new, |t| t.trim().to_lowercase())
}

/// Do both strings use the same multiset of letters after normalization?
///
/// Either input being empty makes the answer `false`. Whitespace-only
/// inputs are not empty and are compared after normalization.
///
/// # Examples
/// ```
/// use word_scramble::core::is_anagram;
///
/// assert!(is_anagram("Listen", " Silent "));
/// assert!(!is_anagram("cat", "dog"));
/// assert!(!is_anagram("", "x"));
/// ```
#[must_use]
pub fn is_anagram(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    sorted_chars(&normalize_input(Some(a))) == sorted_chars(&normalize_input(Some(b)))
}

fn sorted_chars(text: &str) -> Vec<char> {
    let mut chars: Vec<char> = text.chars().collect();
    chars.sort_unstable();
    chars
}

/// Which part of the answer a hint reveals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HintMode {
    /// First letter
    #[default]
    First,
    /// Last letter
    Last,
    /// First and last letters, as `f...l`
    Both,
}

impl HintMode {
    /// Parse a mode name
    ///
    /// Supported names: "first", "last", "both". Unrecognized names fall
    /// back to `First`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "last" => Self::Last,
            "both" => Self::Both,
            _ => Self::First,
        }
    }

    /// The mode after this one, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::First => Self::Last,
            Self::Last => Self::Both,
            Self::Both => Self::First,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for HintMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reveal part of a word
///
/// # Examples
/// ```
/// use word_scramble::core::{HintMode, get_hint};
///
/// assert_eq!(get_hint("magnolia", HintMode::Both), "m...a");
/// assert_eq!(get_hint("a", HintMode::Both), "a");
/// assert_eq!(get_hint("", HintMode::First), "");
/// ```
#[must_use]
pub fn get_hint(word: &str, mode: HintMode) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let last = chars.next_back();

    match (mode, last) {
        (HintMode::First, _) => first.to_string(),
        (HintMode::Last, Some(last)) => last.to_string(),
        (HintMode::Both, Some(last)) => format!("{first}...{last}"),
        // Single character: first, last and both are all the word itself
        (HintMode::Last | HintMode::Both, None) => word.to_string(),
    }
}

/// Score a guess against the answer
///
/// Wrong guesses score 0. Correct guesses score by attempt count:
/// 1 → 10, 2 → 7, 3 or more → 5. An attempt count of 0 is treated as 1.
///
/// # Examples
/// ```
/// use word_scramble::core::score_guess;
///
/// assert_eq!(score_guess("cat", "CAT", 1), 10);
/// assert_eq!(score_guess("cat", "cat", 2), 7);
/// assert_eq!(score_guess("cat", "cat", 5), 5);
/// assert_eq!(score_guess("dog", "cat", 1), 0);
/// ```
#[must_use]
pub fn score_guess(guess: &str, answer: &str, attempts: u32) -> u32 {
    if normalize_input(Some(guess)) != normalize_input(Some(answer)) {
        return 0;
    }

    match attempts {
        0 | 1 => SCORE_FIRST_ATTEMPT,
        2 => SCORE_SECOND_ATTEMPT,
        _ => SCORE_LATER_ATTEMPT,
    }
}
