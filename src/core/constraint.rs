//! Feedback constraints and the feedback deriver
//!
//! Comparing a guess with the true answer yields a set of atomic facts about
//! the answer (the green/yellow/gray feedback, expressed letter by letter).
//! Each fact is a tagged [`Constraint`]; a [`ConstraintSet`] is their
//! conjunction.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// One atomic fact about the true answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// The letter at the position must equal the given letter
    ExactPosition(usize, u8),
    /// The letter at the position must not equal the given letter
    ExcludedPosition(usize, u8),
    /// The word contains the letter at least this many times
    MinCount(u8, u8),
    /// The word contains the letter exactly this many times
    ExactCount(u8, u8),
    /// The word does not contain the letter
    Absent(u8),
}

impl Constraint {
    /// Whether `word` satisfies this constraint
    #[inline]
    #[must_use]
    pub fn is_satisfied_by(self, word: &Word) -> bool {
        match self {
            Self::ExactPosition(index, letter) => word.char_at(index) == letter,
            Self::ExcludedPosition(index, letter) => word.char_at(index) != letter,
            Self::MinCount(letter, count) => word.count_of(letter) >= count,
            Self::ExactCount(letter, count) => word.count_of(letter) == count,
            Self::Absent(letter) => !word.has_letter(letter),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ExactPosition(index, letter) => write!(f, "{}@{index}", char::from(letter)),
            Self::ExcludedPosition(index, letter) => write!(f, "{}!@{index}", char::from(letter)),
            Self::MinCount(letter, count) => write!(f, "{}>={count}", char::from(letter)),
            Self::ExactCount(letter, count) => write!(f, "{}=={count}", char::from(letter)),
            Self::Absent(letter) => write!(f, "-{}", char::from(letter)),
        }
    }
}

/// An ordered conjunction of constraints
///
/// Order only reflects generation order; it never changes which words satisfy
/// the set. Equal sets hash equally, which makes them usable as cache keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ConstraintSet(Vec<Constraint>);

impl ConstraintSet {
    /// Derive the constraints a player learns by guessing `guess` when the answer is `answer`
    ///
    /// Letters are scanned left to right. For a letter present in the answer,
    /// the count constraint reflects how many times the guess has used that
    /// letter so far: while that stays within the answer's count it is a lower
    /// bound, and once the guess over-uses the letter the count becomes exact.
    ///
    /// # Examples
    /// ```
    /// use wordle_expectimin::core::{Constraint, ConstraintSet, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("erase").unwrap();
    /// let constraints = ConstraintSet::derive(&guess, &answer);
    ///
    /// assert!(constraints.iter().any(|&c| c == Constraint::MinCount(b'e', 2)));
    /// assert!(constraints.iter().any(|&c| c == Constraint::Absent(b'd')));
    /// assert!(constraints.is_satisfied_by(&answer));
    /// ```
    #[must_use]
    pub fn derive(guess: &Word, answer: &Word) -> Self {
        let mut constraints = Vec::with_capacity(2 * WORD_LENGTH);
        let mut guessed = [0u8; 26];

        for (index, &letter) in guess.chars().iter().enumerate() {
            let in_answer = answer.count_of(letter);
            if in_answer == 0 {
                let absent = Constraint::Absent(letter);
                if !constraints.contains(&absent) {
                    constraints.push(absent);
                }
                continue;
            }

            let used = &mut guessed[usize::from(letter - b'a')];
            *used += 1;

            constraints.push(if answer.char_at(index) == letter {
                Constraint::ExactPosition(index, letter)
            } else {
                Constraint::ExcludedPosition(index, letter)
            });

            constraints.push(if *used <= in_answer {
                Constraint::MinCount(letter, *used)
            } else {
                Constraint::ExactCount(letter, in_answer)
            });
        }

        Self(constraints)
    }

    /// Whether `word` satisfies every constraint, stopping at the first failure
    #[inline]
    #[must_use]
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        self.0.iter().all(|constraint| constraint.is_satisfied_by(word))
    }

    /// Whether this feedback says `guess` was the answer (every letter exact)
    #[must_use]
    pub fn confirms(&self, guess: &Word) -> bool {
        guess
            .chars()
            .iter()
            .enumerate()
            .all(|(index, &letter)| self.0.contains(&Constraint::ExactPosition(index, letter)))
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.0.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, constraint) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{constraint}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Constraint::{Absent, ExactCount, ExactPosition, ExcludedPosition, MinCount};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn derive(guess: &str, answer: &str) -> Vec<Constraint> {
        ConstraintSet::derive(&word(guess), &word(answer))
            .iter()
            .copied()
            .collect()
    }

    #[test]
    fn all_letters_exact() {
        assert_eq!(
            derive("crane", "crane"),
            [
                ExactPosition(0, b'c'),
                MinCount(b'c', 1),
                ExactPosition(1, b'r'),
                MinCount(b'r', 1),
                ExactPosition(2, b'a'),
                MinCount(b'a', 1),
                ExactPosition(3, b'n'),
                MinCount(b'n', 1),
                ExactPosition(4, b'e'),
                MinCount(b'e', 1),
            ]
        );
    }

    #[test]
    fn absent_letters_emitted_once() {
        assert_eq!(derive("zzzzz", "crane"), [Absent(b'z')]);
    }

    #[test]
    fn repeated_letter_counts_accumulate() {
        // The green `a` at index 1 is the second use of `a` in the guess
        assert_eq!(
            derive("aabvw", "baavw"),
            [
                ExcludedPosition(0, b'a'),
                MinCount(b'a', 1),
                ExactPosition(1, b'a'),
                MinCount(b'a', 2),
                ExcludedPosition(2, b'b'),
                MinCount(b'b', 1),
                ExactPosition(3, b'v'),
                MinCount(b'v', 1),
                ExactPosition(4, b'w'),
                MinCount(b'w', 1),
            ]
        );
    }

    #[test]
    fn over_guessed_letter_becomes_exact_count() {
        let constraints = derive("aaabv", "baacv");
        assert!(constraints.contains(&ExactPosition(2, b'a')));
        assert!(constraints.contains(&ExactCount(b'a', 2)));
        assert!(!constraints.contains(&MinCount(b'a', 3)));
    }

    #[test]
    fn over_guess_is_reported_even_when_green() {
        // The fourth `e` sits on a green square but still caps the count at 3
        let constraints = derive("eeeze", "eezze");
        assert!(constraints.contains(&ExcludedPosition(2, b'e')));
        assert!(constraints.contains(&MinCount(b'e', 3)));
        assert!(constraints.contains(&ExactPosition(4, b'e')));
        assert!(constraints.contains(&ExactCount(b'e', 3)));
    }

    #[test]
    fn answer_satisfies_its_own_feedback() {
        let words = [
            "crane", "speed", "erase", "robot", "floor", "aaaaa", "llama", "eerie", "geese",
        ];
        for guess in words {
            for answer in words {
                let constraints = ConstraintSet::derive(&word(guess), &word(answer));
                assert!(
                    constraints.is_satisfied_by(&word(answer)),
                    "{answer} rejected by feedback from {guess}: {constraints}"
                );
            }
        }
    }

    #[test]
    fn guess_other_than_answer_rejects_itself() {
        for (guess, answer) in [("crane", "crate"), ("speed", "erase"), ("aaaaa", "llama")] {
            let constraints = ConstraintSet::derive(&word(guess), &word(answer));
            assert!(!constraints.is_satisfied_by(&word(guess)));
        }
    }

    #[test]
    fn confirms_only_exact_match() {
        let crane = word("crane");
        assert!(ConstraintSet::derive(&crane, &crane).confirms(&crane));
        assert!(!ConstraintSet::derive(&crane, &word("crate")).confirms(&crane));
        assert!(!ConstraintSet::derive(&word("speed"), &word("erase")).confirms(&word("speed")));
        assert!(!ConstraintSet::default().confirms(&crane));
    }

    #[test]
    fn constraint_predicates() {
        let w = word("speed");
        assert!(ExactPosition(0, b's').is_satisfied_by(&w));
        assert!(!ExactPosition(0, b'p').is_satisfied_by(&w));
        assert!(ExcludedPosition(0, b'p').is_satisfied_by(&w));
        assert!(MinCount(b'e', 2).is_satisfied_by(&w));
        assert!(!MinCount(b'e', 3).is_satisfied_by(&w));
        assert!(ExactCount(b'e', 2).is_satisfied_by(&w));
        assert!(!ExactCount(b'e', 1).is_satisfied_by(&w));
        assert!(Absent(b'z').is_satisfied_by(&w));
        assert!(!Absent(b'd').is_satisfied_by(&w));
    }

    #[test]
    fn display_is_compact() {
        let constraints: ConstraintSet = [ExactPosition(0, b'c'), MinCount(b'c', 1), Absent(b'z')]
            .into_iter()
            .collect();
        assert_eq!(constraints.to_string(), "c@0 c>=1 -z");
    }
}
