//! Wordle Expectimin
//!
//! A Wordle solver that picks, each turn, the guess minimising the expected
//! number of answers still possible after its feedback. Works on one board or
//! on several boards sharing every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_expectimin::core::{ConstraintSet, Word, WordSet};
//! use wordle_expectimin::filter::{Evaluator, SharedCache};
//! use wordle_expectimin::solver::{KnownAnswer, SingleBoardOptimizer, SolverConfig};
//!
//! let pool: WordSet = ["crane", "crate", "trace", "grate", "slate"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! // Feedback for one guess
//! let guess = Word::new("crane").unwrap();
//! let feedback = ConstraintSet::derive(&guess, &Word::new("crate").unwrap());
//! println!("{feedback}");
//!
//! // A whole game against a known answer
//! let evaluator = Evaluator::new(SharedCache::new());
//! let optimizer = SingleBoardOptimizer::new(&pool, SolverConfig::new(50), evaluator);
//! let game = optimizer.play(&pool, &mut KnownAnswer(Word::new("trace").unwrap())).unwrap();
//! assert_eq!(game.answer().map(|w| w.to_string()).as_deref(), Some("trace"));
//! ```

// Core domain types
pub mod core;

// Constraint evaluation and memoisation
pub mod filter;

// Guess optimizers
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
