//! Single-board optimizer
//!
//! Narrows one answer pool turn by turn. Each turn picks the guess with the
//! lowest expected remaining candidates, reads the feedback, and filters the
//! pool, until at most one word is left.

use super::config::{GuessPolicy, SolverConfig};
use super::feedback::FeedbackSource;
use super::scorer::{ScoredGuess, best_guess};
use super::{CancelFlag, SolverError};
use crate::core::{ConstraintSet, Word, WordSet};
use crate::filter::{CacheMode, Evaluator, FilterCache};
use log::{debug, info};
use rustc_hash::FxHashSet;

/// State of one board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardState {
    /// More than one answer is still possible
    Active(WordSet),
    /// The answer is known; `guessed` tells whether it was actually played
    Solved { answer: Word, guessed: bool },
}

impl BoardState {
    /// Initial state for an answer pool
    ///
    /// # Errors
    /// Returns `SolverError::EmptyPool` if `pool` is empty.
    pub fn from_pool(pool: WordSet) -> Result<Self, SolverError> {
        if pool.is_empty() {
            return Err(SolverError::EmptyPool);
        }
        match pool.single() {
            Some(&answer) => Ok(Self::Solved {
                answer,
                guessed: false,
            }),
            None => Ok(Self::Active(pool)),
        }
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    /// Number of answers still possible (0 once the answer was played)
    #[must_use]
    pub fn remaining(&self) -> usize {
        match self {
            Self::Active(pool) => pool.len(),
            Self::Solved { guessed: true, .. } => 0,
            Self::Solved { guessed: false, .. } => 1,
        }
    }
}

/// One played turn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turn {
    pub guess: Word,
    /// `None` for an opening guess without a precomputed score
    pub expected_remaining: Option<f64>,
    pub policy: GuessPolicy,
    pub pool_before: usize,
    pub pool_after: usize,
}

impl Turn {
    #[must_use]
    pub fn scored(&self) -> Option<ScoredGuess> {
        self.expected_remaining
            .map(|expected| ScoredGuess::new(expected, self.guess))
    }
}

/// A guess chosen for the next turn and where it came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    pub scored: ScoredGuess,
    pub policy: GuessPolicy,
}

/// Record of a finished (or turn-capped) game
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub turns: Vec<Turn>,
    pub outcome: BoardState,
}

impl Game {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.outcome.is_solved()
    }

    #[must_use]
    pub const fn answer(&self) -> Option<Word> {
        match self.outcome {
            BoardState::Solved { answer, .. } => Some(answer),
            BoardState::Active(_) => None,
        }
    }

    /// Guesses needed to win, counting the final guess of a deduced answer
    #[must_use]
    pub fn guesses_used(&self) -> Option<usize> {
        match self.outcome {
            BoardState::Solved { guessed: true, .. } => Some(self.turns.len()),
            BoardState::Solved { guessed: false, .. } => Some(self.turns.len() + 1),
            BoardState::Active(_) => None,
        }
    }
}

/// Picks guesses for one board and drives it to a solution
pub struct SingleBoardOptimizer<'a, C: FilterCache = CacheMode> {
    dictionary: &'a WordSet,
    config: SolverConfig,
    evaluator: Evaluator<C>,
    cancel: CancelFlag,
}

impl<'a, C: FilterCache> SingleBoardOptimizer<'a, C> {
    /// Create an optimizer over the full guess `dictionary`
    pub fn new(dictionary: &'a WordSet, config: SolverConfig, evaluator: Evaluator<C>) -> Self {
        Self {
            dictionary,
            config,
            evaluator,
            cancel: CancelFlag::new(),
        }
    }

    /// Use a caller-owned cancellation flag
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn evaluator(&self) -> &Evaluator<C> {
        &self.evaluator
    }

    /// Guesses allowed this turn under the configured policy
    fn guess_choices(&self, pool: &WordSet, played: &FxHashSet<Word>) -> (GuessPolicy, WordSet) {
        let policy = self.config.guess_policy(pool.len());
        let choices = match policy {
            GuessPolicy::Full => WordSet::union([self.dictionary, pool]).without(played),
            GuessPolicy::Restricted | GuessPolicy::Opening => pool.without(played),
        };
        (policy, choices)
    }

    /// Best guess for `pool`, never repeating a word in `played`
    ///
    /// # Errors
    /// - `SolverError::EmptyPool` if `pool` is empty
    /// - `SolverError::NoCandidateFound` if the policy leaves nothing to guess
    /// - `SolverError::Cancelled` if the cancel flag is raised
    pub fn next_guess(
        &self,
        pool: &WordSet,
        played: &FxHashSet<Word>,
    ) -> Result<Suggestion, SolverError> {
        if pool.is_empty() {
            return Err(SolverError::EmptyPool);
        }

        let (policy, choices) = self.guess_choices(pool, played);
        let scored = best_guess(&self.evaluator, pool, &choices, &self.cancel)?;
        Ok(Suggestion { scored, policy })
    }

    /// Apply the feedback for `guess` to `pool`
    ///
    /// # Errors
    /// Returns `SolverError::EmptyPool` if the feedback rules out every word,
    /// which means it contradicts the pool.
    pub fn advance(
        &self,
        pool: &WordSet,
        guess: &Word,
        feedback: &ConstraintSet,
    ) -> Result<BoardState, SolverError> {
        if feedback.confirms(guess) {
            return Ok(BoardState::Solved {
                answer: *guess,
                guessed: true,
            });
        }
        BoardState::from_pool(self.evaluator.apply(pool, feedback))
    }

    /// Play a full game on `pool`, asking `source` for feedback after each guess
    ///
    /// The first guess is the configured opening, if any. The game stops once
    /// the board is solved or the configured turn limit is hit.
    ///
    /// # Errors
    /// Propagates any `SolverError` from choosing or applying a guess; the
    /// board is never left half-updated.
    pub fn play(
        &self,
        pool: &WordSet,
        source: &mut impl FeedbackSource,
    ) -> Result<Game, SolverError> {
        let mut state = BoardState::from_pool(pool.clone())?;
        let mut played = FxHashSet::default();
        let mut turns = Vec::new();

        while let BoardState::Active(current) = &state {
            if self.config.turn_limit_reached(turns.len()) {
                break;
            }

            let (guess, expected_remaining, policy) = match self.config.opening {
                Some(opening) if turns.is_empty() => {
                    (opening.word, opening.expected_remaining, GuessPolicy::Opening)
                }
                _ => {
                    let suggestion = self.next_guess(current, &played)?;
                    (
                        suggestion.scored.guess,
                        Some(suggestion.scored.expected_remaining),
                        suggestion.policy,
                    )
                }
            };

            let next = self.advance(current, &guess, &source.feedback(&guess))?;
            let turn = Turn {
                guess,
                expected_remaining,
                policy,
                pool_before: current.len(),
                pool_after: next.remaining(),
            };
            debug!(
                "turn {}: {} [{}] expected {:?}, pool {} -> {}",
                turns.len() + 1,
                turn.guess,
                turn.policy,
                turn.expected_remaining,
                turn.pool_before,
                turn.pool_after
            );

            turns.push(turn);
            played.insert(guess);
            state = next;
        }

        if let BoardState::Solved { answer, .. } = &state {
            info!("solved {answer} after {} turn(s)", turns.len());
        }

        Ok(Game {
            turns,
            outcome: state,
        })
    }
}
