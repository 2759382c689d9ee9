//! Word solving command
//!
//! Plays one board against a known answer and returns the solution path.

use crate::core::{ConstraintSet, Word, WordSet};
use crate::filter::FilterCache;
use crate::solver::{Game, KnownAnswer, SingleBoardOptimizer};
use anyhow::{Context, Result, bail};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: Word,
    pub game: Game,
    /// Feedback each turn's guess received
    pub feedback: Vec<ConstraintSet>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.game.is_solved()
    }
}

/// Solve `target` starting from `pool`
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid word
/// - The target is not in the answer pool
/// - The optimizer fails (cancelled, or no guess available)
pub fn solve_word<C: FilterCache>(
    optimizer: &SingleBoardOptimizer<'_, C>,
    pool: &WordSet,
    target: &str,
) -> Result<SolveResult> {
    let answer = Word::new(target).with_context(|| format!("invalid target word '{target}'"))?;
    if !pool.contains(&answer) {
        bail!("'{answer}' is not in the answer pool ({} words)", pool.len());
    }

    let game = optimizer
        .play(pool, &mut KnownAnswer(answer))
        .with_context(|| format!("failed to solve '{answer}'"))?;

    let feedback = game
        .turns
        .iter()
        .map(|turn| ConstraintSet::derive(&turn.guess, &answer))
        .collect();

    Ok(SolveResult {
        answer,
        game,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Evaluator, NoCache};
    use crate::solver::SolverConfig;
    use crate::wordlists::loader::words_from_slice;

    fn pool() -> WordSet {
        WordSet::from_words(
            words_from_slice(&[
                "crane", "crate", "trace", "grate", "slate", "irate", "skate", "state", "plate",
                "spate",
            ])
            .unwrap(),
        )
    }

    #[test]
    fn solve_word_succeeds() {
        let pool = pool();
        let optimizer =
            SingleBoardOptimizer::new(&pool, SolverConfig::new(0), Evaluator::new(NoCache));

        let result = solve_word(&optimizer, &pool, "skate").unwrap();

        assert!(result.success());
        assert_eq!(result.answer.text(), "skate");
        assert_eq!(result.feedback.len(), result.game.turns.len());
        for step in &result.game.turns {
            assert!(step.pool_after < step.pool_before);
        }
    }

    #[test]
    fn solve_records_confirming_feedback() {
        let pool = pool();
        let optimizer =
            SingleBoardOptimizer::new(&pool, SolverConfig::new(0), Evaluator::new(NoCache));

        let result = solve_word(&optimizer, &pool, "plate").unwrap();
        let last = result.game.turns.last().unwrap();
        if last.guess == result.answer {
            assert!(result.feedback.last().unwrap().confirms(&last.guess));
        }
    }

    #[test]
    fn solve_target_outside_pool_is_error() {
        let pool = pool();
        let optimizer =
            SingleBoardOptimizer::new(&pool, SolverConfig::new(5), Evaluator::new(NoCache));

        assert!(solve_word(&optimizer, &pool, "zzzzz").is_err());
        assert!(solve_word(&optimizer, &pool, "toolong").is_err());
    }

    #[test]
    fn solve_with_turn_limit() {
        let pool = pool();
        let config = SolverConfig::new(0).with_max_turns(Some(1));
        let optimizer = SingleBoardOptimizer::new(&pool, config, Evaluator::new(NoCache));

        let result = solve_word(&optimizer, &pool, "spate").unwrap();
        assert_eq!(result.game.turns.len(), 1);
    }
}
