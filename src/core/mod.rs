//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types: words, word sets, and the
//! constraints derived from comparing a guess with an answer.

mod constraint;
mod word;
mod word_set;

pub use constraint::{Constraint, ConstraintSet};
pub use word::{WORD_LENGTH, Word, WordError};
pub use word_set::WordSet;
