//! Guess optimizers
//!
//! Scoring ranks guesses by the expected number of answers still possible
//! after their feedback. The single-board optimizer plays one pool down to its
//! answer; the multi-board optimizer shares each guess across several boards.

mod cancel;
pub mod config;
mod error;
mod feedback;
pub mod multi;
mod scorer;
pub mod single;

pub use cancel::CancelFlag;
pub use config::{GuessPolicy, OpeningGuess, SolverConfig};
pub use error::SolverError;
pub use feedback::{FeedbackSource, KnownAnswer};
pub use multi::{Board, MultiBoardOptimizer, MultiGame, MultiTurn};
pub use scorer::{
    ScoredGuess, best_by, best_guess, best_of, rank_of, score, score_all, worst_of,
};
pub use single::{BoardState, Game, SingleBoardOptimizer, Suggestion, Turn};
