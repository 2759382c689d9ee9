//! Solver error taxonomy

use thiserror::Error;

/// Misuse of the optimizers
///
/// None of these are transient: they signal a caller or configuration bug and
/// are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Asked to act on a board with no possible answers left
    #[error("answer pool is empty: the board is already solved or the feedback is inconsistent")]
    EmptyPool,

    /// The guess policy left nothing to guess while boards remain unsolved
    #[error("no candidate guess available while {unsolved} board(s) remain unsolved")]
    NoCandidateFound { unsolved: usize },

    /// The caller cancelled the search between guess evaluations
    #[error("guess search cancelled")]
    Cancelled,

    /// A multi-board run was given the wrong number of feedback sources
    #[error("expected feedback for {boards} board(s), got {answers}")]
    BoardCountMismatch { boards: usize, answers: usize },
}
