//! Test all answers - comprehensive solver evaluation
//!
//! Plays the single-board optimizer against every answer in the pool and
//! aggregates the results.

use crate::core::{Word, WordSet};
use crate::filter::FilterCache;
use crate::solver::{KnownAnswer, SingleBoardOptimizer};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Outcome of one answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTestResult {
    pub answer: Word,
    pub guesses: Vec<Word>,
    /// Guesses needed to win, `None` if the turn limit stopped the game
    pub guesses_used: Option<usize>,
}

/// Statistics from testing all words
#[derive(Debug, Clone)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// Answers needing the most guesses, worst first
    pub hardest_words: Vec<(Word, usize)>,
}

impl TestAllStatistics {
    /// Aggregate per-answer results
    #[must_use]
    pub fn from_results(results: &[WordTestResult], total_time: Duration) -> Self {
        let used: Vec<usize> = results.iter().filter_map(|r| r.guesses_used).collect();

        let mut guess_distribution = BTreeMap::new();
        for &count in &used {
            *guess_distribution.entry(count).or_insert(0) += 1;
        }

        let average_guesses = if used.is_empty() {
            0.0
        } else {
            used.iter().sum::<usize>() as f64 / used.len() as f64
        };

        let mut hardest_words: Vec<(Word, usize)> = results
            .iter()
            .filter_map(|r| r.guesses_used.map(|n| (r.answer, n)))
            .collect();
        hardest_words.sort_by(|(a, n), (b, m)| m.cmp(n).then_with(|| a.cmp(b)));
        hardest_words.truncate(10);

        Self {
            total_words: results.len(),
            solved: used.len(),
            failed: results.len() - used.len(),
            guess_distribution,
            total_time,
            average_guesses,
            max_guesses: used.iter().copied().max().unwrap_or(0),
            min_guesses: used.iter().copied().min().unwrap_or(0),
            hardest_words,
        }
    }
}

/// Run the optimizer on every answer in `pool` (or the first `limit` of them)
///
/// # Errors
/// Returns the first optimizer failure, naming the answer it happened on.
pub fn run_test_all<C: FilterCache>(
    optimizer: &SingleBoardOptimizer<'_, C>,
    pool: &WordSet,
    limit: Option<usize>,
) -> Result<TestAllStatistics> {
    let test_words: Vec<Word> = pool
        .iter()
        .take(limit.unwrap_or(pool.len()))
        .copied()
        .collect();

    let pb = ProgressBar::new(test_words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();
    let mut results = Vec::with_capacity(test_words.len());
    let mut total_used = 0usize;

    for (idx, answer) in test_words.into_iter().enumerate() {
        let game = optimizer
            .play(pool, &mut KnownAnswer(answer))
            .with_context(|| format!("optimizer failed on '{answer}'"))?;

        let guesses_used = game.guesses_used();
        total_used += guesses_used.unwrap_or(0);
        results.push(WordTestResult {
            answer,
            guesses: game.turns.iter().map(|turn| turn.guess).collect(),
            guesses_used,
        });

        if idx % 10 == 0 {
            pb.set_message(format!("Avg: {:.2}", total_used as f64 / results.len() as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    Ok(TestAllStatistics::from_results(&results, total_start.elapsed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Evaluator, SharedCache};
    use crate::solver::SolverConfig;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn pool() -> WordSet {
        WordSet::from_words(
            words_from_slice(&[
                "crane", "crate", "trace", "grate", "slate", "irate", "skate", "state",
            ])
            .unwrap(),
        )
    }

    #[test]
    fn statistics_from_results() {
        let results = [
            WordTestResult {
                answer: word("crane"),
                guesses: vec![word("crane")],
                guesses_used: Some(1),
            },
            WordTestResult {
                answer: word("slate"),
                guesses: vec![word("crane"), word("skate")],
                guesses_used: Some(3),
            },
            WordTestResult {
                answer: word("state"),
                guesses: vec![word("crane")],
                guesses_used: None,
            },
        ];
        let stats = TestAllStatistics::from_results(&results, Duration::from_millis(5));

        assert_eq!(stats.total_words, 3);
        assert_eq!(stats.solved, 2);
        assert_eq!(stats.failed, 1);
        assert!((stats.average_guesses - 2.0).abs() < f64::EPSILON);
        assert_eq!(stats.min_guesses, 1);
        assert_eq!(stats.max_guesses, 3);
        assert_eq!(stats.guess_distribution.get(&3), Some(&1));
        assert_eq!(stats.hardest_words[0], (word("slate"), 3));
    }

    #[test]
    fn empty_results() {
        let stats = TestAllStatistics::from_results(&[], Duration::ZERO);
        assert_eq!(stats.total_words, 0);
        assert!(stats.average_guesses.abs() < f64::EPSILON);
        assert!(stats.hardest_words.is_empty());
    }

    #[test]
    fn every_answer_is_solved() {
        let pool = pool();
        let evaluator = Evaluator::new(SharedCache::new());
        let optimizer = SingleBoardOptimizer::new(&pool, SolverConfig::new(4), evaluator);

        let stats = run_test_all(&optimizer, &pool, None).unwrap();

        assert_eq!(stats.total_words, pool.len());
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), pool.len());
        assert!(stats.min_guesses >= 1);
        assert!(stats.max_guesses <= pool.len());
    }

    #[test]
    fn limit_and_turn_cap() {
        let pool = pool();
        let config = SolverConfig::new(0).with_max_turns(Some(1));
        let evaluator = Evaluator::new(SharedCache::new());
        let optimizer = SingleBoardOptimizer::new(&pool, config, evaluator);

        let stats = run_test_all(&optimizer, &pool, Some(3)).unwrap();

        assert_eq!(stats.total_words, 3);
        assert_eq!(stats.solved + stats.failed, 3);
    }

    #[test]
    fn cache_stays_bounded_across_games() {
        let pool = pool();
        let evaluator = Evaluator::new(SharedCache::with_max_entries(16));
        let optimizer = SingleBoardOptimizer::new(&pool, SolverConfig::new(100), evaluator);

        let stats = run_test_all(&optimizer, &pool, None).unwrap();

        assert_eq!(stats.failed, 0);
        let cache = optimizer.evaluator().cache().stats();
        assert!(cache.misses > 16);
        assert!(cache.entries <= 16 + rayon::current_num_threads());
    }
}
