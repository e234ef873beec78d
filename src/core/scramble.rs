//! Word selection and letter scrambling

use super::random::RandomSource;

/// Upper bound on shuffles spent looking for a permutation that differs
/// from the original word
pub const MAX_SCRAMBLE_ATTEMPTS: usize = 20;

/// Result of scrambling a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scramble {
    /// The permuted letters
    pub text: String,
    /// Shuffles performed (0 when the word was too short to permute)
    pub attempts: usize,
}

impl Scramble {
    /// True when the scramble failed to move any letter of `word`
    #[must_use]
    pub fn is_unchanged(&self, word: &str) -> bool {
        self.text == word
    }
}

/// Pick a word uniformly at random
///
/// Returns an empty string for an empty vocabulary without consuming any
/// randomness.
///
/// # Examples
/// ```
/// use word_scramble::core::{SequenceSource, pick_random_word};
///
/// let words = vec!["only".to_string()];
/// assert_eq!(pick_random_word(&words, &mut SequenceSource::default()), "only");
/// assert_eq!(pick_random_word(&[], &mut SequenceSource::default()), "");
/// ```
pub fn pick_random_word<R: RandomSource + ?Sized>(vocabulary: &[String], rng: &mut R) -> String {
    if vocabulary.is_empty() {
        return String::new();
    }

    let index = rng.below(vocabulary.len());
    vocabulary
        .get(index)
        .cloned()
        .unwrap_or_default()
}

/// In-place Fisher–Yates shuffle
///
/// Walks `i` from the last index down to 1, swapping with a uniform `j` in
/// `[0, i]`.
pub fn shuffle_letters<T, R: RandomSource + ?Sized>(letters: &mut [T], rng: &mut R) {
    for i in (1..letters.len()).rev() {
        let j = rng.below(i + 1);
        letters.swap(i, j);
    }
}

/// Scramble a word, retrying until the result differs from the input
///
/// Words shorter than two characters come back unchanged. Otherwise up to
/// [`MAX_SCRAMBLE_ATTEMPTS`] shuffles are tried, each continuing from the
/// previous arrangement; if none differs, the last one is returned as is.
pub fn scramble_with_attempts<R: RandomSource + ?Sized>(word: &str, rng: &mut R) -> Scramble {
    let mut letters: Vec<char> = word.chars().collect();
    if letters.len() < 2 {
        return Scramble {
            text: word.to_string(),
            attempts: 0,
        };
    }

    let mut text = word.to_string();
    let mut attempts = 0;

    while text == word && attempts < MAX_SCRAMBLE_ATTEMPTS {
        shuffle_letters(&mut letters, rng);
        text = letters.iter().collect();
        attempts += 1;
    }

    Scramble { text, attempts }
}

/// Scramble a word so the result differs from the original where possible
///
/// The output is always an anagram of `word` with the same length.
///
/// # Examples
/// ```
/// use word_scramble::core::{SequenceSource, scramble_unique};
///
/// let mut rng = SequenceSource::new(vec![0]);
/// assert_eq!(scramble_unique("abc", &mut rng), "bca");
/// assert_eq!(scramble_unique("a", &mut rng), "a");
/// ```
pub fn scramble_unique<R: RandomSource + ?Sized>(word: &str, rng: &mut R) -> String {
    scramble_with_attempts(word, rng).text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::SequenceSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(word: &str) -> Vec<char> {
        let mut chars: Vec<char> = word.chars().collect();
        chars.sort_unstable();
        chars
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn pick_from_empty_is_empty_string() {
        let mut rng = SequenceSource::new(vec![5]);
        assert_eq!(pick_random_word(&[], &mut rng), "");
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn pick_from_single_word_is_deterministic() {
        let vocabulary = words(&["only"]);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(pick_random_word(&vocabulary, &mut rng), "only");
        }
    }

    #[test]
    fn pick_uses_drawn_index() {
        let vocabulary = words(&["galaxy", "dolphin", "festival", "bicycle"]);
        let mut rng = SequenceSource::new(vec![2]);
        assert_eq!(pick_random_word(&vocabulary, &mut rng), "festival");
    }

    #[test]
    fn pick_reaches_every_word() {
        let vocabulary = words(&["galaxy", "dolphin", "festival"]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pick_random_word(&vocabulary, &mut rng));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn shuffle_with_zero_draws() {
        // i=2 swaps with 0 -> cba, i=1 swaps with 0 -> bca
        let mut letters = vec!['a', 'b', 'c'];
        shuffle_letters(&mut letters, &mut SequenceSource::new(vec![0]));
        assert_eq!(letters, vec!['b', 'c', 'a']);
    }

    #[test]
    fn shuffle_with_identity_draws() {
        // j == i on every step leaves the slice untouched
        let mut letters = vec!['a', 'b', 'c', 'd'];
        shuffle_letters(&mut letters, &mut SequenceSource::new(vec![3, 2, 1]));
        assert_eq!(letters, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn short_words_unchanged() {
        let mut rng = SequenceSource::new(vec![0]);
        for word in ["", "a", "é"] {
            let scramble = scramble_with_attempts(word, &mut rng);
            assert_eq!(scramble.text, word);
            assert_eq!(scramble.attempts, 0);
        }
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn scripted_scramble_is_exact() {
        let mut rng = SequenceSource::new(vec![0]);
        let scramble = scramble_with_attempts("abc", &mut rng);
        assert_eq!(scramble.text, "bca");
        assert_eq!(scramble.attempts, 1);
    }

    #[test]
    fn retries_until_different() {
        // First shuffle of "ab" keeps it, second swaps
        let mut rng = SequenceSource::new(vec![1, 0]);
        let scramble = scramble_with_attempts("ab", &mut rng);
        assert_eq!(scramble.text, "ba");
        assert_eq!(scramble.attempts, 2);
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let mut rng = SequenceSource::new(vec![1]);
        let scramble = scramble_with_attempts("ab", &mut rng);
        assert_eq!(scramble.text, "ab");
        assert_eq!(scramble.attempts, MAX_SCRAMBLE_ATTEMPTS);
        assert!(scramble.is_unchanged("ab"));
        assert_eq!(rng.consumed(), MAX_SCRAMBLE_ATTEMPTS);
    }

    #[test]
    fn identical_letters_cannot_differ() {
        let mut rng = StdRng::seed_from_u64(11);
        let scramble = scramble_with_attempts("zzzz", &mut rng);
        assert_eq!(scramble.text, "zzzz");
        assert_eq!(scramble.attempts, MAX_SCRAMBLE_ATTEMPTS);
    }

    #[test]
    fn always_an_anagram_and_usually_different() {
        let mut rng = StdRng::seed_from_u64(2024);
        for word in ["magnolia", "computer", "kangaroo", "aab", "bicycle"] {
            for _ in 0..100 {
                let scrambled = scramble_unique(word, &mut rng);
                assert_eq!(scrambled.chars().count(), word.chars().count());
                assert_eq!(sorted(&scrambled), sorted(word));
                assert_ne!(scrambled, word, "'{word}' came back unscrambled");
            }
        }
    }

    #[test]
    fn handles_multibyte_letters() {
        let mut rng = StdRng::seed_from_u64(5);
        let scrambled = scramble_unique("naïve", &mut rng);
        assert_eq!(sorted(&scrambled), sorted("naïve"));
        assert_ne!(scrambled, "naïve");
    }
}
