//! Scramble command: print scrambles of a single word

use crate::core::{RandomSource, normalize_input, scramble_unique};

/// Produce `count` independent scrambles of `word`
///
/// The word is normalized first, so `" Galaxy"` scrambles the letters of
/// `"galaxy"`.
pub fn scramble_words<R: RandomSource + ?Sized>(
    word: &str,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let word = normalize_input(Some(word));
    (0..count).map(|_| scramble_unique(&word, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SequenceSource, is_anagram};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scrambles_are_anagrams() {
        let mut rng = StdRng::seed_from_u64(11);
        let scrambles = scramble_words("Bicycle", 10, &mut rng);

        assert_eq!(scrambles.len(), 10);
        for s in &scrambles {
            assert!(is_anagram(s, "bicycle"));
            assert_ne!(s, "bicycle");
        }
    }

    #[test]
    fn scripted_draws() {
        let mut rng = SequenceSource::default();
        assert_eq!(scramble_words(" ABC ", 1, &mut rng), ["bca"]);
    }

    #[test]
    fn zero_count() {
        let mut rng = SequenceSource::default();
        assert!(scramble_words("galaxy", 0, &mut rng).is_empty());
        assert_eq!(rng.consumed(), 0);
    }
}
