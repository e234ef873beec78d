//! Display functions for command results

use super::formatters::{create_progress_bar, spaced_letters};
use crate::commands::{BenchmarkResult, CheckResult};
use crate::core::{FEEDBACK_CORRECT, FEEDBACK_INCORRECT, HintMode, MAX_SCRAMBLE_ATTEMPTS};
use colored::Colorize;

/// Print the scrambles of a word, one per line
pub fn print_scrambles(word: &str, scrambles: &[String]) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Scrambling: {}",
        word.trim().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, scramble) in scrambles.iter().enumerate() {
        println!("{:>4}. {}", i + 1, spaced_letters(scramble).bright_blue());
    }
    println!();
}

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult, attempts: u32) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Guess {} against {}",
        format!("'{}'", result.normalized_guess).bright_white(),
        format!("'{}'", result.normalized_answer).bright_white()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("   Anagram:  {}", yes_no(result.anagram));
    println!("   Correct:  {}", yes_no(result.correct));
    println!(
        "   Score:    {} (attempt {attempts})",
        result.score.to_string().bright_yellow().bold()
    );

    println!();
    if result.correct {
        println!("{}", FEEDBACK_CORRECT.green().bold());
    } else {
        println!("{}", FEEDBACK_INCORRECT.red().bold());
    }
}

/// Print a hint for a word
pub fn print_hint(word: &str, mode: HintMode, hint: &str) {
    if hint.is_empty() {
        println!("No hint available for '{}'.", word.trim());
    } else {
        println!("💡 Hint ({mode}): {}", hint.bright_yellow().bold());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCRAMBLE BENCHMARK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words:            {}", result.total_words);
    println!("   Trials per word:  {}", result.trials_per_word);
    println!("   Scrambles:        {}", result.total_scrambles);

    let unchanged = if result.unchanged_scrambles == 0 {
        "0".green()
    } else {
        result.unchanged_scrambles.to_string().red().bold()
    };
    println!("   Left unscrambled: {unchanged}");
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Scrambles/second: {:.0}", result.scrambles_per_second);

    if result.total_scrambles > 0 {
        println!("\n📈 {}", "Shuffles per scramble:".bright_cyan().bold());
        for attempts in 0..=MAX_SCRAMBLE_ATTEMPTS {
            if let Some(&count) = result.distribution.get(&attempts) {
                let pct = (count as f64 / result.total_scrambles as f64) * 100.0;
                let bar = create_progress_bar(pct, 100.0, 40);
                println!("   {attempts:>2}: {} {count:6} ({pct:5.1}%)", bar.green());
            }
        }
    }

    if !result.problem_words.is_empty() {
        println!("\n⚠️  {}", "Words shown unscrambled:".yellow().bold());
        for stats in &result.problem_words {
            println!(
                "   {:<24} {}/{} trials, {:.1} shuffles on average",
                stats.word.to_uppercase(),
                stats.unchanged,
                stats.trials,
                stats.average_attempts()
            );
        }
    }
    println!();
}

fn yes_no(value: bool) -> colored::ColoredString {
    if value { "yes".green() } else { "no".red() }
}
