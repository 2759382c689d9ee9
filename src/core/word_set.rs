//! Immutable, ordered collections of words
//!
//! A `WordSet` is the unit the filter engine works on: answer pools and guess
//! pools are both `WordSet`s. Words are kept sorted and deduplicated so that
//! iteration order (and every tie-break built on it) is reproducible.

use super::Word;
use rustc_hash::FxHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A sorted, duplicate-free set of words
///
/// Cloning is cheap: the words live behind an `Arc`. A set is never mutated;
/// filtering produces a new set.
#[derive(Clone)]
pub struct WordSet {
    words: Arc<[Word]>,
    fingerprint: u64,
}

impl WordSet {
    /// Build a set from any collection of words, sorting and removing duplicates
    ///
    /// # Examples
    /// ```
    /// use wordle_expectimin::core::{Word, WordSet};
    ///
    /// let set = WordSet::from_words(["slate", "crane", "slate"].map(|w| Word::new(w).unwrap()));
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.words()[0].text(), "crane");
    /// ```
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        Self::from_sorted(words)
    }

    /// Build a set from words already known to be sorted and unique
    ///
    /// Filtering preserves order, so the evaluator uses this to skip re-sorting.
    pub(crate) fn from_sorted(words: Vec<Word>) -> Self {
        debug_assert!(words.windows(2).all(|pair| pair[0] < pair[1]));

        let mut hasher = FxHasher::default();
        words.hash(&mut hasher);

        Self {
            fingerprint: hasher.finish(),
            words: words.into(),
        }
    }

    /// An empty set
    #[must_use]
    pub fn empty() -> Self {
        Self::from_sorted(Vec::new())
    }

    /// Words in ascending lexicographic order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// The only word in the set, if it has exactly one
    #[must_use]
    pub fn single(&self) -> Option<&Word> {
        match &*self.words {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Content hash identifying this set in filter cache keys
    #[inline]
    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Union of several sets
    pub fn union<'a>(sets: impl IntoIterator<Item = &'a Self>) -> Self {
        Self::from_words(sets.into_iter().flat_map(|set| set.iter().copied()))
    }

    /// This set without the given words
    #[must_use]
    pub fn without<S: std::hash::BuildHasher>(
        &self,
        excluded: &std::collections::HashSet<Word, S>,
    ) -> Self {
        if excluded.is_empty() {
            return self.clone();
        }
        Self::from_sorted(
            self.iter()
                .filter(|word| !excluded.contains(word))
                .copied()
                .collect(),
        )
    }
}

impl PartialEq for WordSet {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint && self.words == other.words
    }
}

impl Eq for WordSet {}

impl fmt::Debug for WordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.words.iter().map(Word::text)).finish()
    }
}

impl FromIterator<Word> for WordSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
