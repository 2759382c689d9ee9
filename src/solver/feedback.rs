//! Sources of guess feedback

use crate::core::{ConstraintSet, Word};

/// Answers a guess with the constraints it reveals about the hidden word
///
/// Simulations derive the feedback from a known answer; live play would
/// translate the colours a player reports.
pub trait FeedbackSource {
    fn feedback(&mut self, guess: &Word) -> ConstraintSet;
}

/// Feedback from an answer known to the harness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownAnswer(pub Word);

impl FeedbackSource for KnownAnswer {
    fn feedback(&mut self, guess: &Word) -> ConstraintSet {
        ConstraintSet::derive(guess, &self.0)
    }
}
