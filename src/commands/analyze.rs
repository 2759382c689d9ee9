//! Word analysis command
//!
//! Scores one word against an answer pool and, optionally, ranks it against
//! every other guess.

use crate::core::{Word, WordSet};
use crate::filter::{Evaluator, FilterCache};
use crate::solver::{CancelFlag, ScoredGuess, best_of, rank_of, score, score_all, worst_of};
use anyhow::{Context, Result, bail};

/// How a word compares with every other guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub best: ScoredGuess,
    pub worst: ScoredGuess,
    /// Zero-based rank of the analysed word (0 = best)
    pub rank: usize,
    pub total_guesses: usize,
}

/// Result of analyzing a word
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub word: Word,
    pub expected_remaining: f64,
    pub total_candidates: usize,
    /// Whether the word could itself be the answer
    pub in_pool: bool,
    pub comparison: Option<Comparison>,
}

/// Analyze the expected remaining candidates of `word` against `pool`
///
/// With `compare`, every word in `guesses` is scored too, which costs a full
/// search.
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid or not in the guess list
/// - The comparison search is cancelled
pub fn analyze_word<C: FilterCache>(
    evaluator: &Evaluator<C>,
    guesses: &WordSet,
    pool: &WordSet,
    word: &str,
    compare: bool,
    cancel: &CancelFlag,
) -> Result<AnalysisResult> {
    let word = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;
    if !guesses.contains(&word) {
        bail!("'{word}' is not in the guess list");
    }

    let expected_remaining = score(evaluator, pool, &word);

    let comparison = if compare {
        let scored = score_all(evaluator, pool, guesses, cancel).context("comparison search")?;
        match (best_of(&scored), worst_of(&scored), rank_of(&scored, &word)) {
            (Some(&best), Some(&worst), Some(rank)) => Some(Comparison {
                best,
                worst,
                rank,
                total_guesses: scored.len(),
            }),
            _ => None,
        }
    } else {
        None
    };

    Ok(AnalysisResult {
        word,
        expected_remaining,
        total_candidates: pool.len(),
        in_pool: pool.contains(&word),
        comparison,
    })
}
