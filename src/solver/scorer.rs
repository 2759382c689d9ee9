//! Guess scoring by expected remaining candidates
//!
//! A guess is scored by simulating it against every answer still possible and
//! averaging the size of the pool each simulated feedback leaves behind. Lower
//! is better. This is the hot loop of the whole solver: scoring one guess costs
//! `|pool|` filter passes of `|pool|` words each, so candidate guesses are
//! scored in parallel.

use super::{CancelFlag, SolverError};
use crate::core::{Word, WordSet};
use crate::filter::{Evaluator, FilterCache};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::fmt;

/// A guess together with its expected remaining candidates
///
/// Ordered by score, then by word, so the best guess under ties is the
/// lexicographically smallest one.
#[derive(Debug, Clone, Copy)]
pub struct ScoredGuess {
    pub expected_remaining: f64,
    pub guess: Word,
}

impl ScoredGuess {
    #[must_use]
    pub const fn new(expected_remaining: f64, guess: Word) -> Self {
        Self {
            expected_remaining,
            guess,
        }
    }
}

impl PartialEq for ScoredGuess {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredGuess {}

impl PartialOrd for ScoredGuess {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredGuess {
    fn cmp(&self, other: &Self) -> Ordering {
        self.expected_remaining
            .total_cmp(&other.expected_remaining)
            .then_with(|| self.guess.cmp(&other.guess))
    }
}

impl fmt::Display for ScoredGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3})", self.guess, self.expected_remaining)
    }
}

/// Expected number of candidates left after guessing `guess`
///
/// The arithmetic mean, over every answer in `pool`, of the pool size after
/// filtering by that answer's feedback. Guessing the answer itself counts as
/// zero. An empty pool scores zero.
///
/// # Examples
/// ```
/// use wordle_expectimin::core::{Word, WordSet};
/// use wordle_expectimin::filter::{Evaluator, NoCache};
/// use wordle_expectimin::solver::score;
///
/// let pool: WordSet = ["crane", "crate", "trace", "grate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let evaluator = Evaluator::new(NoCache);
///
/// // Three answers are isolated, and guessing "crane" itself leaves nothing
/// let expected = score(&evaluator, &pool, &Word::new("crane").unwrap());
/// assert!((expected - 0.75).abs() < 1e-12);
/// ```
#[must_use]
pub fn score<C: FilterCache>(evaluator: &Evaluator<C>, pool: &WordSet, guess: &Word) -> f64 {
    if pool.is_empty() {
        return 0.0;
    }

    let total: usize = pool
        .iter()
        .map(|answer| evaluator.remaining_after(pool, guess, answer))
        .sum();

    total as f64 / pool.len() as f64
}

/// Pick the guess with the lowest score according to `score_fn`
///
/// Guesses are scored in parallel; cancellation is checked before each one.
///
/// # Errors
/// - `SolverError::NoCandidateFound` if `guesses` is empty
/// - `SolverError::Cancelled` if `cancel` is raised during the search
pub fn best_by<F>(
    guesses: &WordSet,
    cancel: &CancelFlag,
    score_fn: F,
) -> Result<ScoredGuess, SolverError>
where
    F: Fn(&Word) -> f64 + Sync,
{
    guesses
        .words()
        .par_iter()
        .map(|guess| {
            if cancel.is_cancelled() {
                return Err(SolverError::Cancelled);
            }
            Ok(ScoredGuess::new(score_fn(guess), *guess))
        })
        .try_reduce_with(|a, b| Ok(a.min(b)))
        .unwrap_or(Err(SolverError::NoCandidateFound { unsolved: 1 }))
}

/// Best guess from `guesses` for a single answer pool
///
/// # Errors
/// See [`best_by`].
pub fn best_guess<C: FilterCache>(
    evaluator: &Evaluator<C>,
    pool: &WordSet,
    guesses: &WordSet,
    cancel: &CancelFlag,
) -> Result<ScoredGuess, SolverError> {
    best_by(guesses, cancel, |guess| score(evaluator, pool, guess))
}

/// Every guess scored against `pool`, best first
///
/// # Errors
/// Returns `SolverError::Cancelled` if `cancel` is raised during scoring.
pub fn score_all<C: FilterCache>(
    evaluator: &Evaluator<C>,
    pool: &WordSet,
    guesses: &WordSet,
    cancel: &CancelFlag,
) -> Result<Vec<ScoredGuess>, SolverError> {
    let mut scored = guesses
        .words()
        .par_iter()
        .map(|guess| {
            if cancel.is_cancelled() {
                return Err(SolverError::Cancelled);
            }
            Ok(ScoredGuess::new(score(evaluator, pool, guess), *guess))
        })
        .collect::<Result<Vec<_>, _>>()?;

    scored.par_sort_unstable();
    Ok(scored)
}

/// Lowest-scoring entry of a scored list
#[must_use]
pub fn best_of(scored: &[ScoredGuess]) -> Option<&ScoredGuess> {
    scored.iter().min()
}

/// Highest-scoring entry of a scored list, for after-the-fact reporting
#[must_use]
pub fn worst_of(scored: &[ScoredGuess]) -> Option<&ScoredGuess> {
    scored.iter().max()
}

/// Zero-based rank of `word` in a scored list (0 = best)
#[must_use]
pub fn rank_of(scored: &[ScoredGuess], word: &Word) -> Option<usize> {
    let target = scored.iter().find(|entry| entry.guess == *word)?;
    Some(scored.iter().filter(|entry| *entry < target).count())
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

    fn quartet() -> WordSet {
        set(&["crane", "crate", "trace", "grate"])
    }

    #[test]
    fn score_counts_self_match_as_zero() {
        let evaluator = Evaluator::new(NoCache);
        let expected = score(&evaluator, &quartet(), &word("crane"));
        assert!((expected - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn score_outside_pool_isolating_every_answer() {
        // Every answer is isolated and none can be hit directly
        let evaluator = Evaluator::new(NoCache);
        let expected = score(&evaluator, &quartet(), &word("tangy"));
        assert!((expected - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn score_uninformative_guess() {
        let evaluator = Evaluator::new(NoCache);
        let expected = score(&evaluator, &quartet(), &word("zzzzz"));
        assert!((expected - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn score_empty_pool_is_zero() {
        let evaluator = Evaluator::new(NoCache);
        assert!(score(&evaluator, &WordSet::empty(), &word("crane")).abs() < f64::EPSILON);
    }

    #[test]
    fn score_single_word_pool() {
        let evaluator = Evaluator::new(NoCache);
        let pool = set(&["crane"]);
        assert!(score(&evaluator, &pool, &word("crane")).abs() < f64::EPSILON);
        assert!((score(&evaluator, &pool, &word("slate")) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn best_guess_breaks_ties_lexicographically() {
        let evaluator = Evaluator::new(NoCache);
        let guesses = set(&["trace", "grate", "crate", "crane", "tangy", "zzzzz"]);
        let best = best_guess(&evaluator, &quartet(), &guesses, &CancelFlag::new()).unwrap();
        assert_eq!(best.guess.text(), "crane");
        assert!((best.expected_remaining - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn best_guess_empty_guess_pool() {
        let evaluator = Evaluator::new(NoCache);
        let result = best_guess(&evaluator, &quartet(), &WordSet::empty(), &CancelFlag::new());
        assert_eq!(result, Err(SolverError::NoCandidateFound { unsolved: 1 }));
    }

    #[test]
    fn best_guess_honours_cancellation() {
        let evaluator = Evaluator::new(NoCache);
        let cancel = CancelFlag::new();
        cancel.cancel();
        let result = best_guess(&evaluator, &quartet(), &quartet(), &cancel);
        assert_eq!(result, Err(SolverError::Cancelled));
    }

    #[test]
    fn score_all_sorted_with_best_and_worst() {
        let evaluator = Evaluator::new(SharedCache::new());
        let guesses = set(&["crane", "tangy", "zzzzz", "trace"]);
        let scored = score_all(&evaluator, &quartet(), &guesses, &CancelFlag::new()).unwrap();

        let order: Vec<&str> = scored.iter().map(|s| s.guess.text()).collect();
        assert_eq!(order, ["crane", "trace", "tangy", "zzzzz"]);
        assert_eq!(best_of(&scored).map(|s| s.guess.text()), Some("crane"));
        assert_eq!(worst_of(&scored).map(|s| s.guess.text()), Some("zzzzz"));
        assert_eq!(rank_of(&scored, &word("tangy")), Some(2));
        assert_eq!(rank_of(&scored, &word("slate")), None);
    }

    #[test]
    fn best_guess_matches_score_all() {
        let evaluator = Evaluator::new(NoCache);
        let pool = set(&["crane", "crate", "trace", "grate", "slate", "irate", "skate"]);
        let cancel = CancelFlag::new();
        let best = best_guess(&evaluator, &pool, &pool, &cancel).unwrap();
        let scored = score_all(&evaluator, &pool, &pool, &cancel).unwrap();
        assert_eq!(Some(&best), best_of(&scored));
    }

    #[test]
    fn scored_guess_ordering() {
        let a = ScoredGuess::new(1.0, word("slate"));
        let b = ScoredGuess::new(1.0, word("crane"));
        let c = ScoredGuess::new(0.5, word("zzzzz"));
        assert!(b < a);
        assert!(c < b);
        assert_eq!(a.to_string(), "slate (1.000)");
    }
}
