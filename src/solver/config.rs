//! Solver configuration
//!
//! Everything tunable about a run lives here: the pool-size threshold that
//! switches between restricted and full guess pools, the precomputed opening
//! guess, and an optional cap on turns.

use crate::core::Word;
use std::fmt;

/// Pools larger than this restrict guesses to the pool itself (default)
pub const DEFAULT_CANDIDATE_THRESHOLD: usize = 50;

/// Default first guess, chosen offline by scoring the full dictionary
pub const DEFAULT_OPENING: &str = "roate";

/// Where the guesses for a turn come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessPolicy {
    /// The configured opening guess, not scored
    Opening,
    /// Only words still possible as answers ("hard mode", cheaper)
    Restricted,
    /// The whole guess dictionary ("easy mode", more accurate)
    Full,
}

impl fmt::Display for GuessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Opening => "opening",
            Self::Restricted => "restricted",
            Self::Full => "full",
        })
    }
}

/// A fixed first guess with an optional precomputed score for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningGuess {
    pub word: Word,
    pub expected_remaining: Option<f64>,
}

impl OpeningGuess {
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self {
            word,
            expected_remaining: None,
        }
    }

    #[must_use]
    pub const fn with_expected_remaining(mut self, expected: f64) -> Self {
        self.expected_remaining = Some(expected);
        self
    }
}

/// Tuning for the single- and multi-board optimizers
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Pools (or summed pools, for multi-board) larger than this use [`GuessPolicy::Restricted`]
    pub candidate_threshold: usize,

    /// First guess of every game; `None` scores the first turn like any other
    pub opening: Option<OpeningGuess>,

    /// Stop after this many turns even if unsolved
    pub max_turns: Option<usize>,
}

impl SolverConfig {
    #[must_use]
    pub const fn new(candidate_threshold: usize) -> Self {
        Self {
            candidate_threshold,
            opening: None,
            max_turns: None,
        }
    }

    #[must_use]
    pub fn with_opening(mut self, opening: Option<OpeningGuess>) -> Self {
        self.opening = opening;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: Option<usize>) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Guess pool to use when `pool_size` answers remain
    #[must_use]
    pub const fn guess_policy(&self, pool_size: usize) -> GuessPolicy {
        if pool_size > self.candidate_threshold {
            GuessPolicy::Restricted
        } else {
            GuessPolicy::Full
        }
    }

    /// Whether a game that has played `turns` turns must stop
    #[must_use]
    pub fn turn_limit_reached(&self, turns: usize) -> bool {
        self.max_turns.is_some_and(|max| turns >= max)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CANDIDATE_THRESHOLD)
            .with_opening(Word::new(DEFAULT_OPENING).ok().map(OpeningGuess::new))
    }
}
