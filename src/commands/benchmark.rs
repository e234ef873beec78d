//! Benchmark command
//!
//! Measures how the scrambler behaves across a vocabulary: how many shuffles
//! it needs and how often it gives up and shows a word unscrambled.

use crate::core::{Vocabulary, scramble_with_attempts};
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Scramble statistics for one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordScrambleStats {
    pub word: String,
    pub trials: usize,
    /// Scrambles that came back identical to the word
    pub unchanged: usize,
    pub total_attempts: usize,
    pub max_attempts: usize,
}

impl WordScrambleStats {
    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_attempts as f64 / self.trials as f64
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub trials_per_word: usize,
    pub total_scrambles: usize,
    pub unchanged_scrambles: usize,
    /// Shuffles needed per scramble → number of scrambles
    pub distribution: FxHashMap<usize, usize>,
    /// Words that came back unchanged at least once
    pub problem_words: Vec<WordScrambleStats>,
    pub duration: Duration,
    pub scrambles_per_second: f64,
}

/// Scramble every word `trials` times
///
/// Each word gets its own generator seeded from `seed` and its position, so
/// results are reproducible regardless of how rayon schedules the work.
pub fn run_benchmark(
    vocabulary: &Vocabulary,
    trials: usize,
    seed: u64,
    progress: &ProgressBar,
) -> BenchmarkResult {
    let start = Instant::now();

    let per_word: Vec<(WordScrambleStats, FxHashMap<usize, usize>)> = vocabulary
        .words()
        .par_iter()
        .enumerate()
        .map(|(index, word)| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
            let stats = scramble_word(word, trials, &mut rng);
            progress.inc(1);
            stats
        })
        .collect();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut problem_words = Vec::new();
    let mut unchanged_scrambles = 0;

    for (stats, word_distribution) in per_word {
        for (attempts, count) in word_distribution {
            *distribution.entry(attempts).or_insert(0) += count;
        }
        unchanged_scrambles += stats.unchanged;
        if stats.unchanged > 0 {
            problem_words.push(stats);
        }
    }

    let duration = start.elapsed();
    let total_words = vocabulary.len();
    let total_scrambles = scramble_count(total_words, trials);

    BenchmarkResult {
        total_words,
        trials_per_word: trials,
        total_scrambles,
        unchanged_scrambles,
        distribution,
        problem_words,
        duration,
        scrambles_per_second: total_scrambles as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Scrambles a run performs, clamped at `usize::MAX`
const fn scramble_count(words: usize, trials: usize) -> usize {
    words.saturating_mul(trials)
}

fn scramble_word(
    word: &str,
    trials: usize,
    rng: &mut StdRng,
) -> (WordScrambleStats, FxHashMap<usize, usize>) {
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut stats = WordScrambleStats {
        word: word.to_string(),
        trials,
        unchanged: 0,
        total_attempts: 0,
        max_attempts: 0,
    };

    // Single letters can't be permuted at all
    let permutable = word.chars().count() >= 2;

    for _ in 0..trials {
        let scramble = scramble_with_attempts(word, rng);
        if permutable && scramble.is_unchanged(word) {
            stats.unchanged += 1;
        }
        stats.total_attempts += scramble.attempts;
        stats.max_attempts = stats.max_attempts.max(scramble.attempts);
        *distribution.entry(scramble.attempts).or_insert(0) += 1;
    }

    (stats, distribution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_SCRAMBLE_ATTEMPTS;
    use crate::wordlists::{WORDS, loader::words_from_slice};

    #[test]
    fn benchmark_runs() {
        let vocabulary = words_from_slice(WORDS);
        let result = run_benchmark(&vocabulary, 20, 1, &ProgressBar::hidden());

        assert_eq!(result.total_words, WORDS.len());
        assert_eq!(result.total_scrambles, WORDS.len() * 20);
        assert_eq!(result.trials_per_word, 20);
    }

    #[test]
    fn builtin_words_never_stay_unchanged() {
        let vocabulary = words_from_slice(WORDS);
        let result = run_benchmark(&vocabulary, 50, 7, &ProgressBar::hidden());

        assert_eq!(result.unchanged_scrambles, 0);
        assert!(result.problem_words.is_empty());
    }

    #[test]
    fn distribution_sums_to_total() {
        let vocabulary = words_from_slice(&["galaxy", "aab", "x"]);
        let result = run_benchmark(&vocabulary, 30, 3, &ProgressBar::hidden());

        let sum: usize = result.distribution.values().sum();
        assert_eq!(sum, result.total_scrambles);
        // "x" is never shuffled
        assert!(result.distribution.get(&0).copied().unwrap_or(0) >= 30);
    }

    #[test]
    fn identical_letters_are_reported() {
        let vocabulary = words_from_slice(&["zzz", "dolphin"]);
        let result = run_benchmark(&vocabulary, 10, 9, &ProgressBar::hidden());

        assert_eq!(result.unchanged_scrambles, 10);
        assert_eq!(result.problem_words.len(), 1);
        let zzz = &result.problem_words[0];
        assert_eq!(zzz.word, "zzz");
        assert_eq!(zzz.max_attempts, MAX_SCRAMBLE_ATTEMPTS);
        assert!((zzz.average_attempts() - MAX_SCRAMBLE_ATTEMPTS as f64).abs() < f64::EPSILON);
    }

    #[test]
    fn same_seed_same_result() {
        let vocabulary = words_from_slice(&["galaxy", "dolphin", "bicycle"]);
        let a = run_benchmark(&vocabulary, 25, 42, &ProgressBar::hidden());
        let b = run_benchmark(&vocabulary, 25, 42, &ProgressBar::hidden());

        assert_eq!(a.distribution, b.distribution);
        assert_eq!(a.unchanged_scrambles, b.unchanged_scrambles);
    }

    #[test]
    fn scramble_count_saturates() {
        assert_eq!(scramble_count(18, 1000), 18_000);
        assert_eq!(scramble_count(18, usize::MAX), usize::MAX);
        assert_eq!(scramble_count(0, usize::MAX), 0);
    }

    #[test]
    fn empty_vocabulary() {
        let vocabulary = Vocabulary::default();
        let result = run_benchmark(&vocabulary, 10, 0, &ProgressBar::hidden());

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_scrambles, 0);
        assert!(result.distribution.is_empty());
    }
}
