//! Constraint evaluation over word pools
//!
//! Turns a [`ConstraintSet`](crate::core::ConstraintSet) into a predicate and
//! applies it to pools, optionally memoizing results behind a [`FilterCache`].

mod cache;
mod evaluator;

pub use cache::{
    CacheMode, CacheStats, DEFAULT_MAX_ENTRIES, FilterCache, FilterKey, NoCache, SharedCache,
};
pub use evaluator::{Evaluator, apply, evaluate};
