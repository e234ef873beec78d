//! Formatting utilities for terminal output

/// Uppercase a word and put a space between its letters
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    let mut result = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.extend(c.to_uppercase());
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "attempt" or "attempts"
#[must_use]
pub const fn attempts_label(count: u32) -> &'static str {
    if count == 1 { "attempt" } else { "attempts" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_letters_uppercases() {
        assert_eq!(spaced_letters("lagaxy"), "L A G A X Y");
        assert_eq!(spaced_letters("a"), "A");
        assert_eq!(spaced_letters(""), "");
    }

    #[test]
    fn spaced_letters_multibyte() {
        assert_eq!(spaced_letters("éa"), "É A");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn attempts_label_pluralizes() {
        assert_eq!(attempts_label(1), "attempt");
        assert_eq!(attempts_label(0), "attempts");
        assert_eq!(attempts_label(3), "attempts");
    }
}
