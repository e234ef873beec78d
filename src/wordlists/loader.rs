//! Word list loading utilities
//!
//! Builds a [`Vocabulary`] from a file or from the embedded constant.

use crate::core::Vocabulary;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Failure to produce a usable vocabulary
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {} has no usable words", .path.display())]
    Empty { path: PathBuf },
}

/// Load a vocabulary from a file, one word per line
///
/// Blank lines and `#` comments are skipped, as are entries that are not a
/// single alphabetic word.
///
/// # Errors
///
/// Returns [`VocabularyError::Io`] if the file cannot be read and
/// [`VocabularyError::Empty`] if nothing in it is usable.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let vocabulary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {vocabulary}");
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vocabulary, VocabularyError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let vocabulary = parse_word_list(&content);
    if vocabulary.is_empty() {
        return Err(VocabularyError::Empty {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), words = vocabulary.len(), "loaded word list");
    Ok(vocabulary)
}

/// Parse word list text, ignoring blank lines and `#` comments
#[must_use]
pub fn parse_word_list(content: &str) -> Vocabulary {
    Vocabulary::from_words(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}

/// Convert an embedded string slice to a vocabulary
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::WORDS;
///
/// let vocabulary = words_from_slice(WORDS);
/// assert_eq!(vocabulary.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vocabulary {
    Vocabulary::from_words(slice.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let vocabulary = words_from_slice(&["galaxy", "Dolphin", "bicycle"]);
        assert_eq!(vocabulary.words(), ["galaxy", "dolphin", "bicycle"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let vocabulary = words_from_slice(&["galaxy", "ice cream", "b4", "galaxy", "dolphin"]);
        assert_eq!(vocabulary.words(), ["galaxy", "dolphin"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let text = "# puzzle words\nrainbow\n\n  journey  \n# mountain\nTreasure\n";
        let vocabulary = parse_word_list(text);
        assert_eq!(vocabulary.words(), ["rainbow", "journey", "treasure"]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(VocabularyError::Io { .. })));
    }

    #[test]
    fn load_file_round_trip() {
        let path =
            std::env::temp_dir().join(format!("word_scramble_load_{}.txt", std::process::id()));
        fs::write(&path, "Galaxy\ndolphin\n\n").unwrap();

        let vocabulary = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(vocabulary.words(), ["galaxy", "dolphin"]);
    }

    #[test]
    fn load_file_without_words_is_empty_error() {
        let path =
            std::env::temp_dir().join(format!("word_scramble_empty_{}.txt", std::process::id()));
        fs::write(&path, "# nothing\n123\n\n").unwrap();

        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(matches!(err, VocabularyError::Empty { .. }));
        assert!(err.to_string().contains("no usable words"));
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let vocabulary = words_from_slice(WORDS);
        assert_eq!(vocabulary.len(), WORDS.len());
    }
}
