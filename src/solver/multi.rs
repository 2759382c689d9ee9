//! Multi-board optimizer
//!
//! Several boards with independent answers share one guess per turn. A guess
//! is scored by summing its expected remaining candidates over every unsolved
//! board. A board only counts as solved once its answer has actually been
//! played, so a board narrowed to a single word still needs that word guessed.
//!
//! Such a word is always entered as a contender in the search. It is not
//! played unconditionally: it wins only if no other guess scores lower overall.

use super::config::{GuessPolicy, SolverConfig};
use super::feedback::FeedbackSource;
use super::scorer::{best_by, score};
use super::single::Suggestion;
use super::{CancelFlag, SolverError};
use crate::core::{ConstraintSet, Word, WordSet};
use crate::filter::{CacheMode, Evaluator, FilterCache};
use log::{debug, info};
use rustc_hash::FxHashSet;

/// One board of a multi-board game
///
/// The pool becomes empty exactly when the board's answer has been guessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pool: WordSet,
}

impl Board {
    #[must_use]
    pub const fn new(pool: WordSet) -> Self {
        Self { pool }
    }

    #[must_use]
    pub const fn pool(&self) -> &WordSet {
        &self.pool
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.pool.is_empty()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }
}

/// One shared turn across all boards
#[derive(Debug, Clone, PartialEq)]
pub struct MultiTurn {
    pub guess: Word,
    /// Summed expected remaining over unsolved boards; `None` for an unscored opening
    pub expected_remaining: Option<f64>,
    pub policy: GuessPolicy,
    pub pools_before: Vec<usize>,
    pub pools_after: Vec<usize>,
}

/// Record of a finished (or turn-capped) multi-board game
#[derive(Debug, Clone, PartialEq)]
pub struct MultiGame {
    pub turns: Vec<MultiTurn>,
    pub boards: Vec<Board>,
    /// Turn number (1-based) on which each board was solved
    pub solved_on: Vec<Option<usize>>,
}

impl MultiGame {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.boards.iter().all(Board::is_solved)
    }
}

/// Picks shared guesses for several boards at once
pub struct MultiBoardOptimizer<'a, C: FilterCache = CacheMode> {
    dictionary: &'a WordSet,
    config: SolverConfig,
    evaluator: Evaluator<C>,
    cancel: CancelFlag,
}

impl<'a, C: FilterCache> MultiBoardOptimizer<'a, C> {
    pub fn new(dictionary: &'a WordSet, config: SolverConfig, evaluator: Evaluator<C>) -> Self {
        Self {
            dictionary,
            config,
            evaluator,
            cancel: CancelFlag::new(),
        }
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    #[must_use]
    pub const fn evaluator(&self) -> &Evaluator<C> {
        &self.evaluator
    }

    /// Summed expected remaining of `guess` over every unsolved board
    #[must_use]
    pub fn combined_score(&self, boards: &[Board], guess: &Word) -> f64 {
        boards
            .iter()
            .filter(|board| !board.is_solved())
            .map(|board| score(&self.evaluator, board.pool(), guess))
            .sum()
    }

    /// Contenders for this turn: the policy's guess pool plus every forced word
    fn contenders(
        &self,
        unsolved: &[&WordSet],
        played: &FxHashSet<Word>,
    ) -> (GuessPolicy, WordSet) {
        let total: usize = unsolved.iter().map(|pool| pool.len()).sum();
        let policy = self.config.guess_policy(total);

        let base = match policy {
            GuessPolicy::Full => self.dictionary.clone(),
            GuessPolicy::Restricted | GuessPolicy::Opening => {
                WordSet::union(unsolved.iter().copied())
            }
        };
        let forced = unsolved.iter().filter_map(|pool| pool.single()).copied();

        let contenders = base
            .iter()
            .copied()
            .chain(forced)
            .filter(|word| !played.contains(word))
            .collect();
        (policy, contenders)
    }

    /// Best shared guess for `boards`, never repeating a word in `played`
    ///
    /// # Errors
    /// - `SolverError::EmptyPool` if every board is already solved
    /// - `SolverError::NoCandidateFound` if no contender remains
    /// - `SolverError::Cancelled` if the cancel flag is raised
    pub fn next_guess(
        &self,
        boards: &[Board],
        played: &FxHashSet<Word>,
    ) -> Result<Suggestion, SolverError> {
        let unsolved: Vec<&WordSet> = boards
            .iter()
            .filter(|board| !board.is_solved())
            .map(Board::pool)
            .collect();
        if unsolved.is_empty() {
            return Err(SolverError::EmptyPool);
        }

        let (policy, contenders) = self.contenders(&unsolved, played);
        if contenders.is_empty() {
            return Err(SolverError::NoCandidateFound {
                unsolved: unsolved.len(),
            });
        }

        let scored = best_by(&contenders, &self.cancel, |guess| {
            unsolved
                .iter()
                .map(|pool| score(&self.evaluator, pool, guess))
                .sum()
        })?;
        Ok(Suggestion { scored, policy })
    }

    /// Apply one guess to every board using each board's own feedback
    ///
    /// # Errors
    /// - `SolverError::BoardCountMismatch` if `sources` and `boards` differ in length
    /// - `SolverError::EmptyPool` if some board's feedback contradicts its pool
    pub fn advance<F: FeedbackSource>(
        &self,
        boards: &[Board],
        guess: &Word,
        sources: &mut [F],
    ) -> Result<Vec<Board>, SolverError> {
        if sources.len() != boards.len() {
            return Err(SolverError::BoardCountMismatch {
                boards: boards.len(),
                answers: sources.len(),
            });
        }

        boards
            .iter()
            .zip(sources.iter_mut())
            .map(|(board, source)| {
                if board.is_solved() {
                    return Ok(board.clone());
                }
                self.advance_board(board, guess, &source.feedback(guess))
            })
            .collect()
    }

    fn advance_board(
        &self,
        board: &Board,
        guess: &Word,
        feedback: &ConstraintSet,
    ) -> Result<Board, SolverError> {
        if feedback.confirms(guess) {
            return Ok(Board::new(WordSet::empty()));
        }
        let next = self.evaluator.apply(board.pool(), feedback);
        if next.is_empty() {
            return Err(SolverError::EmptyPool);
        }
        Ok(Board::new(next))
    }

    /// Play every board from `pool` until all are solved
    ///
    /// `sources` holds one feedback source per board.
    ///
    /// # Errors
    /// Propagates any `SolverError` from choosing or applying a guess.
    pub fn play<F: FeedbackSource>(
        &self,
        pool: &WordSet,
        sources: &mut [F],
    ) -> Result<MultiGame, SolverError> {
        if pool.is_empty() {
            return Err(SolverError::EmptyPool);
        }

        let mut boards = vec![Board::new(pool.clone()); sources.len()];
        let mut solved_on = vec![None; sources.len()];
        let mut played = FxHashSet::default();
        let mut turns = Vec::new();

        while !boards.iter().all(Board::is_solved) {
            if self.config.turn_limit_reached(turns.len()) {
                break;
            }

            let (guess, expected_remaining, policy) = match self.config.opening {
                Some(opening) if turns.is_empty() => {
                    (opening.word, opening.expected_remaining, GuessPolicy::Opening)
                }
                _ => {
                    let suggestion = self.next_guess(&boards, &played)?;
                    (
                        suggestion.scored.guess,
                        Some(suggestion.scored.expected_remaining),
                        suggestion.policy,
                    )
                }
            };

            let next = self.advance(&boards, &guess, sources)?;
            let turn_number = turns.len() + 1;
            for (index, board) in next.iter().enumerate() {
                if board.is_solved() && solved_on[index].is_none() {
                    solved_on[index] = Some(turn_number);
                    info!("board {} solved with {guess} on turn {turn_number}", index + 1);
                }
            }

            let turn = MultiTurn {
                guess,
                expected_remaining,
                policy,
                pools_before: boards.iter().map(Board::remaining).collect(),
                pools_after: next.iter().map(Board::remaining).collect(),
            };
            debug!(
                "turn {turn_number}: {} [{}] expected {:?}, pools {:?} -> {:?}",
                turn.guess,
                turn.policy,
                turn.expected_remaining,
                turn.pools_before,
                turn.pools_after
            );

            turns.push(turn);
            played.insert(guess);
            boards = next;
        }

        Ok(MultiGame {
            turns,
            boards,
            solved_on,
        })
    }
}
