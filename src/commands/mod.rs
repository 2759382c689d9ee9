//! Command implementations

pub mod analyze;
pub mod multi;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, Comparison, analyze_word};
pub use multi::{MultiSolveResult, parse_answers, random_answers, solve_boards};
pub use solve::{SolveResult, solve_word};
pub use test_all::{TestAllStatistics, WordTestResult, run_test_all};
