//! Word lists for Wordle solving
//!
//! A [`WordLists`] bundles the guessable dictionary, the answer list and an
//! optional smaller list of common answers. Every answer is guessable: answers
//! missing from the dictionary are added to it when the lists are assembled.

pub mod loader;

use crate::core::{Word, WordSet};
use log::warn;
use std::fmt;
use std::path::Path;

pub use loader::WordListError;

/// Which list seeds the initial answer pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerTier {
    /// The full answer list
    Answers,
    /// The common-word list, a likelier subset of answers
    Common,
}

impl fmt::Display for AnswerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Answers => "answers",
            Self::Common => "common",
        })
    }
}

/// Guessable, answer and common word sets
#[derive(Debug, Clone)]
pub struct WordLists {
    guesses: WordSet,
    answers: WordSet,
    common: Option<WordSet>,
}

impl WordLists {
    /// Assemble word lists, adding any answer or common word missing from `guesses`
    #[must_use]
    pub fn new(guesses: Vec<Word>, answers: Vec<Word>, common: Option<Vec<Word>>) -> Self {
        let answers = WordSet::from_words(answers);
        let common = common.map(WordSet::from_words);
        let mut guesses = WordSet::from_words(guesses);

        let missing = answers
            .iter()
            .chain(common.iter().flat_map(WordSet::iter))
            .filter(|word| !guesses.contains(word))
            .count();
        if missing > 0 {
            warn!("{missing} answer word(s) missing from the guess list; adding them");
            guesses = WordSet::union([&guesses, &answers].into_iter().chain(common.as_ref()));
        }

        Self {
            guesses,
            answers,
            common,
        }
    }

    /// Load word lists from files
    ///
    /// # Errors
    /// Returns the first `WordListError` from any of the files.
    pub fn load(
        guesses: impl AsRef<Path>,
        answers: impl AsRef<Path>,
        common: Option<&Path>,
    ) -> Result<Self, WordListError> {
        let guesses = loader::load_from_file(guesses)?;
        let answers = loader::load_from_file(answers)?;
        let common = common.map(loader::load_from_file).transpose()?;
        Ok(Self::new(guesses, answers, common))
    }

    #[must_use]
    pub const fn guesses(&self) -> &WordSet {
        &self.guesses
    }

    #[must_use]
    pub const fn answers(&self) -> &WordSet {
        &self.answers
    }

    #[must_use]
    pub const fn common(&self) -> Option<&WordSet> {
        self.common.as_ref()
    }

    /// The common list when one was loaded, the full answer list otherwise
    #[must_use]
    pub const fn default_tier(&self) -> AnswerTier {
        if self.common.is_some() {
            AnswerTier::Common
        } else {
            AnswerTier::Answers
        }
    }

    /// Initial answer pool for `tier`
    ///
    /// # Errors
    /// Returns `WordListError::MissingCommon` for [`AnswerTier::Common`] when no
    /// common list was loaded.
    pub fn answer_pool(&self, tier: AnswerTier) -> Result<&WordSet, WordListError> {
        match tier {
            AnswerTier::Answers => Ok(&self.answers),
            AnswerTier::Common => self.common.as_ref().ok_or(WordListError::MissingCommon),
        }
    }
}
