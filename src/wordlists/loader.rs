//! Word list loading utilities
//!
//! Word lists are plain text, one word per line. Blank lines and lines starting
//! with `#` are ignored; anything else must be a valid word.

use crate::core::{Word, WordError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to load or validate a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {} contains no words", path.display())]
    Empty { path: PathBuf },

    #[error("invalid word on line {line}")]
    Word {
        line: usize,
        #[source]
        source: WordError,
    },

    #[error("no common-word list was loaded")]
    MissingCommon,
}

/// Parse word list text, rejecting the first invalid entry
///
/// # Errors
/// Returns `WordListError::Word` with the 1-based line number of the first
/// entry that is not a valid word.
pub fn parse_words(content: &str) -> Result<Vec<Word>, WordListError> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Some(
                    Word::new(trimmed).map_err(|source| WordListError::Word {
                        line: index + 1,
                        source,
                    }),
                )
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
/// - `WordListError::Io` if the file cannot be read
/// - `WordListError::Word` if a line is not a valid word
/// - `WordListError::Empty` if the file holds no words
///
/// # Examples
/// ```no_run
/// use wordle_expectimin::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content)?;
    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(words)
}

/// Convert a string slice to words
///
/// # Errors
/// Returns `WordListError::Word` for the first invalid entry (1-based index).
///
/// # Examples
/// ```
/// use wordle_expectimin::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate"]).unwrap();
/// assert_eq!(words.len(), 2);
/// assert!(words_from_slice(&["crane", "abc"]).is_err());
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>, WordListError> {
    slice
        .iter()
        .enumerate()
        .map(|(index, text)| {
            Word::new(text).map_err(|source| WordListError::Word {
                line: index + 1,
                source,
            })
        })
        .collect()
}
