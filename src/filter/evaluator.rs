//! Constraint evaluator
//!
//! `evaluate` and `apply` are the pure forms; [`Evaluator`] adds memoization
//! through an injected cache without changing any result.

use super::cache::{CacheMode, FilterCache, FilterKey};
use crate::core::{ConstraintSet, Word, WordSet};

/// Whether `word` satisfies every constraint in `constraints`
///
/// # Examples
/// ```
/// use wordle_expectimin::core::{ConstraintSet, Word};
/// use wordle_expectimin::filter::evaluate;
///
/// let guess = Word::new("crane").unwrap();
/// let answer = Word::new("crate").unwrap();
/// let constraints = ConstraintSet::derive(&guess, &answer);
///
/// assert!(evaluate(&answer, &constraints));
/// assert!(!evaluate(&guess, &constraints));
/// ```
#[inline]
#[must_use]
pub fn evaluate(word: &Word, constraints: &ConstraintSet) -> bool {
    constraints.is_satisfied_by(word)
}

/// The subset of `pool` satisfying every constraint
///
/// Never larger than `pool`; order is preserved.
#[must_use]
pub fn apply(pool: &WordSet, constraints: &ConstraintSet) -> WordSet {
    WordSet::from_sorted(
        pool.iter()
            .filter(|word| evaluate(word, constraints))
            .copied()
            .collect(),
    )
}

/// Filters pools, memoizing through a [`FilterCache`]
///
/// The cache is only ever a latency optimization: `Evaluator::apply` returns
/// exactly what [`apply`] returns for the same inputs.
#[derive(Debug, Default)]
pub struct Evaluator<C: FilterCache = CacheMode> {
    cache: C,
}

impl<C: FilterCache> Evaluator<C> {
    pub const fn new(cache: C) -> Self {
        Self { cache }
    }

    /// Filter `pool` by `constraints`, consulting the cache first
    #[must_use]
    pub fn apply(&self, pool: &WordSet, constraints: &ConstraintSet) -> WordSet {
        let key = FilterKey::new(pool, constraints);
        self.cache.get_or_compute(key, || apply(pool, constraints))
    }

    /// Size of the pool left after guessing `guess` when `answer` is the truth
    ///
    /// Guessing the answer itself ends the game, so it leaves nothing.
    #[must_use]
    pub fn remaining_after(&self, pool: &WordSet, guess: &Word, answer: &Word) -> usize {
        if guess == answer {
            return 0;
        }
        self.apply(pool, &ConstraintSet::derive(guess, answer)).len()
    }

    #[must_use]
    pub const fn cache(&self) -> &C {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{NoCache, SharedCache};

    fn set(words: &[&str]) -> WordSet {
        words.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn filter(pool: &[&str], guess: &str, answer: &str) -> WordSet {
        apply(&set(pool), &ConstraintSet::derive(&word(guess), &word(answer)))
    }

    // The next three cases were written against shorter words; both sides are
    // padded with the same trailing letters, which only adds satisfied constraints.

    #[test]
    fn mismatched_letter_keeps_answer() {
        assert_eq!(filter(&["abvwx"], "acvwx", "abvwx"), set(&["abvwx"]));
    }

    #[test]
    fn repeated_guess_letter_matched_against_count() {
        assert_eq!(filter(&["baavw", "bacvw"], "aabvw", "baavw"), set(&["baavw"]));
    }

    #[test]
    fn over_guessed_letter_caps_count() {
        assert_eq!(filter(&["baacv", "baaav"], "aaabv", "baacv"), set(&["baacv"]));
    }

    #[test]
    fn answer_unaffected_by_irrelevant_guesses() {
        for guess in ["aoeuh", "tnsgc", "hueoa", "cbvwx"] {
            assert_eq!(filter(&["aoeuh"], guess, "aoeuh"), set(&["aoeuh"]));
        }
    }

    #[test]
    fn crane_against_crate() {
        assert_eq!(
            filter(&["crane", "crate", "trace", "grate"], "crane", "crate"),
            set(&["crate"])
        );
    }

    #[test]
    fn apply_never_grows_pool() {
        let pool = set(&["crane", "crate", "trace", "grate", "slate", "speed", "erase"]);
        for guess in pool.iter() {
            for answer in pool.iter() {
                let filtered = apply(&pool, &ConstraintSet::derive(guess, answer));
                assert!(filtered.len() <= pool.len());
                assert!(filtered.contains(answer));
            }
        }
    }

    #[test]
    fn empty_constraints_keep_everything() {
        let pool = set(&["crane", "slate"]);
        assert_eq!(apply(&pool, &ConstraintSet::default()), pool);
    }

    #[test]
    fn cached_and_uncached_agree() {
        let pool = set(&["crane", "crate", "trace", "grate", "slate", "irate"]);
        let plain = Evaluator::new(NoCache);
        let cached = Evaluator::new(SharedCache::new());

        for _ in 0..2 {
            for guess in pool.iter() {
                for answer in pool.iter() {
                    let constraints = ConstraintSet::derive(guess, answer);
                    assert_eq!(
                        plain.apply(&pool, &constraints),
                        cached.apply(&pool, &constraints)
                    );
                }
            }
        }

        assert!(cached.cache().stats().hits > 0);
    }

    #[test]
    fn remaining_after_self_match_is_zero() {
        let evaluator = Evaluator::new(NoCache);
        let pool = set(&["crane", "crate", "trace", "grate"]);
        for w in pool.iter() {
            assert_eq!(evaluator.remaining_after(&pool, w, w), 0);
        }
        assert_eq!(
            evaluator.remaining_after(&pool, &word("crane"), &word("crate")),
            1
        );
    }
}
