//! Multi-board solving command
//!
//! Plays several boards at once, each against its own known answer.

use crate::core::{Word, WordSet};
use crate::filter::FilterCache;
use crate::solver::{KnownAnswer, MultiBoardOptimizer, MultiGame};
use anyhow::{Context, Result, bail};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

/// Result of a multi-board run
#[derive(Debug, Clone)]
pub struct MultiSolveResult {
    pub answers: Vec<Word>,
    pub game: MultiGame,
}

impl MultiSolveResult {
    /// Turns taken to finish every board, if all were solved
    #[must_use]
    pub fn turns_used(&self) -> Option<usize> {
        self.game.is_solved().then_some(self.game.turns.len())
    }
}

/// Parse answer words and check each is in `pool`
///
/// # Errors
/// Returns an error naming the first invalid or unknown word.
pub fn parse_answers(pool: &WordSet, answers: &[String]) -> Result<Vec<Word>> {
    answers
        .iter()
        .map(|text| -> Result<Word> {
            let word = Word::new(text).with_context(|| format!("invalid answer '{text}'"))?;
            if !pool.contains(&word) {
                bail!("'{word}' is not in the answer pool");
            }
            Ok(word)
        })
        .collect()
}

/// Draw `count` distinct answers from `pool`, reproducibly when `seed` is given
///
/// # Errors
/// Returns an error if `pool` holds fewer than `count` words.
pub fn random_answers(pool: &WordSet, count: usize, seed: Option<u64>) -> Result<Vec<Word>> {
    if count > pool.len() {
        bail!("cannot draw {count} answers from a pool of {}", pool.len());
    }
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    Ok(pool
        .words()
        .choose_multiple(&mut rng, count)
        .copied()
        .collect())
}

/// Play one board per answer, all starting from `pool`
///
/// # Errors
/// Returns an error if `answers` is empty or the optimizer fails.
pub fn solve_boards<C: FilterCache>(
    optimizer: &MultiBoardOptimizer<'_, C>,
    pool: &WordSet,
    answers: Vec<Word>,
) -> Result<MultiSolveResult> {
    if answers.is_empty() {
        bail!("at least one board is required");
    }

    let mut sources: Vec<KnownAnswer> = answers.iter().copied().map(KnownAnswer).collect();
    let game = optimizer
        .play(pool, &mut sources)
        .with_context(|| format!("failed to solve {} boards", answers.len()))?;

    Ok(MultiSolveResult { answers, game })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Evaluator, SharedCache};
    use crate::solver::SolverConfig;
    use crate::wordlists::loader::words_from_slice;

    fn pool() -> WordSet {
        WordSet::from_words(
            words_from_slice(&[
                "crane", "crate", "trace", "grate", "slate", "irate", "skate", "state", "plate",
                "spate", "brace", "grace",
            ])
            .unwrap(),
        )
    }

    #[test]
    fn parse_answers_validates_membership() {
        let pool = pool();
        let answers = parse_answers(&pool, &["CRANE".to_string(), "slate".to_string()]).unwrap();
        assert_eq!(answers[0].text(), "crane");

        assert!(parse_answers(&pool, &["zzzzz".to_string()]).is_err());
        assert!(parse_answers(&pool, &["abc".to_string()]).is_err());
    }

    #[test]
    fn seeded_draw_is_reproducible() {
        let pool = pool();
        let first = random_answers(&pool, 4, Some(7)).unwrap();
        let second = random_answers(&pool, 4, Some(7)).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
        assert!(first.iter().all(|word| pool.contains(word)));

        let distinct: WordSet = first.iter().copied().collect();
        assert_eq!(distinct.len(), 4);
    }

    #[test]
    fn draw_larger_than_pool_fails() {
        assert!(random_answers(&pool(), 13, None).is_err());
    }

    #[test]
    fn solves_four_boards() {
        let pool = pool();
        let optimizer = MultiBoardOptimizer::new(
            &pool,
            SolverConfig::new(10),
            Evaluator::new(SharedCache::new()),
        );
        let answers = random_answers(&pool, 4, Some(42)).unwrap();
        let result = solve_boards(&optimizer, &pool, answers).unwrap();

        assert!(result.game.is_solved());
        assert_eq!(result.turns_used(), Some(result.game.turns.len()));
        assert_eq!(result.game.solved_on.len(), 4);
    }

    #[test]
    fn no_boards_is_error() {
        let pool = pool();
        let optimizer = MultiBoardOptimizer::new(
            &pool,
            SolverConfig::new(10),
            Evaluator::new(SharedCache::new()),
        );
        assert!(solve_boards(&optimizer, &pool, Vec::new()).is_err());
    }
}
