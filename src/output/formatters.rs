//! Formatting utilities for terminal output

use crate::core::{Constraint, ConstraintSet, WORD_LENGTH};

/// Colour of one square as a player would see it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Green,
    Yellow,
    Gray,
}

/// Reconstruct per-position tiles from derived feedback
///
/// Greens claim their copies of a letter first. A misplaced letter is then
/// yellow while the answer has unclaimed copies of it, scanning left to right,
/// and gray once they run out. Absent letters are gray.
#[must_use]
pub fn tiles(feedback: &ConstraintSet) -> [Tile; WORD_LENGTH] {
    let mut tiles = [Tile::Gray; WORD_LENGTH];
    let mut greens = [0u8; 26];
    // Copies left for yellows; `None` when the answer may hold more
    let mut spare: [Option<u8>; 26] = [None; 26];

    for constraint in feedback.iter() {
        if let Constraint::ExactPosition(index, letter) = *constraint {
            if let Some(tile) = tiles.get_mut(index) {
                *tile = Tile::Green;
            }
            if let Some(slot) = letter_slot(letter) {
                greens[slot] += 1;
            }
        }
    }

    for constraint in feedback.iter() {
        if let Constraint::ExactCount(letter, count) = *constraint {
            if let Some(slot) = letter_slot(letter) {
                spare[slot] = Some(count.saturating_sub(greens[slot]));
            }
        }
    }

    for constraint in feedback.iter() {
        if let Constraint::ExcludedPosition(index, letter) = *constraint {
            let Some(slot) = letter_slot(letter) else {
                continue;
            };
            let available = match &mut spare[slot] {
                None => true,
                Some(0) => false,
                Some(left) => {
                    *left -= 1;
                    true
                }
            };
            if let Some(tile) = tiles.get_mut(index).filter(|_| available) {
                *tile = Tile::Yellow;
            }
        }
    }

    tiles
}

fn letter_slot(letter: u8) -> Option<usize> {
    letter
        .checked_sub(b'a')
        .map(usize::from)
        .filter(|&slot| slot < 26)
}

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &ConstraintSet) -> String {
    tiles(feedback)
        .iter()
        .map(|tile| match tile {
            Tile::Green => '🟩',
            Tile::Yellow => '🟨',
            Tile::Gray => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn feedback(guess: &str, answer: &str) -> ConstraintSet {
        ConstraintSet::derive(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn tiles_for_near_miss() {
        use Tile::{Gray, Green};
        assert_eq!(tiles(&feedback("crane", "crate")), [Green, Green, Green, Gray, Green]);
    }

    #[test]
    fn over_guessed_letter_is_gray() {
        use Tile::{Gray, Green, Yellow};
        assert_eq!(tiles(&feedback("speed", "abide")), [Gray, Gray, Yellow, Gray, Yellow]);
    }

    #[test]
    fn greens_claim_copies_before_yellows() {
        use Tile::{Gray, Green, Yellow};
        assert_eq!(tiles(&feedback("aaabv", "baacv")), [Gray, Green, Green, Yellow, Green]);
        assert_eq!(tiles(&feedback("eeeze", "eezze")), [Green, Green, Gray, Green, Green]);
        assert_eq!(tiles(&feedback("geese", "those")), [Gray, Gray, Gray, Green, Green]);
    }

    #[test]
    fn emoji_all_gray_and_all_green() {
        assert_eq!(feedback_to_emoji(&feedback("zzzzz", "crane")), "⬜⬜⬜⬜⬜");
        assert_eq!(feedback_to_emoji(&feedback("crane", "crane")), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(150.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }
}
