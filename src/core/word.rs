//! Wordle word representation
//!
//! A Word stores a 5-letter word along with per-letter counts for constraint evaluation.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

const ALPHABET_SIZE: usize = 26;

/// A 5-letter Wordle word with letter count tracking
///
/// Stores the word as lowercase ASCII bytes plus an occurrence count per letter,
/// so count constraints are answered without rescanning the word. Ordering is
/// lexicographic on the letters, which is what tie-breaks between guesses rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    chars: [u8; WORD_LENGTH],
    counts: [u8; ALPHABET_SIZE],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is case-insensitive and normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_expectimin::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let bytes = text.as_bytes();
        let Ok(raw) = <[u8; WORD_LENGTH]>::try_from(bytes) else {
            return Err(WordError::InvalidLength(bytes.len()));
        };

        let mut chars = [0u8; WORD_LENGTH];
        let mut counts = [0u8; ALPHABET_SIZE];
        for (slot, &byte) in chars.iter_mut().zip(&raw) {
            let lower = byte.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return Err(WordError::InvalidCharacters);
            }
            *slot = lower;
            counts[usize::from(lower - b'a')] += 1;
        }

        Ok(Self { chars, counts })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Only ASCII lowercase bytes are admitted by `new`.
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Number of times `letter` occurs in the word
    ///
    /// Letters outside `a..=z` never occur.
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        letter
            .checked_sub(b'a')
            .and_then(|idx| self.counts.get(usize::from(idx)))
            .copied()
            .unwrap_or(0)
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.count_of(letter) > 0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
