//! Command implementations

pub mod benchmark;
pub mod check;
pub mod scramble;
pub mod simple;

pub use benchmark::{BenchmarkResult, WordScrambleStats, run_benchmark};
pub use check::{CheckResult, check_guess};
pub use scramble::scramble_words;
pub use simple::{LineCommand, run_simple};
