//! Category scoring, including the wildcard substitution search.
//!
//! ## Wildcard search
//!
//! While the wildcard shows a 1 it may stand for any face. The scorer
//! tries all six substitute faces, evaluates the category formula on each
//! resolved hand, and keeps the maximum *evaluation*. The fold starts from
//! the first evaluation, not from zero: school rows evaluate negative when
//! the hand is short, and a zero floor would hide that.
//!
//! The search stays brute force on purpose. A substitute face can change
//! which rule matches (a fifth 6 turns a Kare into an Abaka), so the six
//! evaluations are not comparable by any shortcut on the formulas.
//!
//! ## First-roll doubling
//!
//! Scoring straight off the initial roll doubles base and bonus together,
//! for combination rows only. School rows never double.

use crate::core::{Category, DiceSet};

/// Score `category` against the current hand.
///
/// Negative results are possible for school rows; combination rows never
/// score below zero.
///
/// ## Example
///
/// ```
/// use abaka_engine::core::{Category, DiceSet};
/// use abaka_engine::scoring::score_category;
///
/// // Wildcard shows 1, so it may stand for the missing 6.
/// let dice = DiceSet::from_faces([2, 3, 4, 5, 1], 4);
/// assert_eq!(score_category(&dice, Category::Sum, false), 20);
///
/// // Kare pays 4x6 + 20, doubled straight off the first roll.
/// let dice = DiceSet::from_faces([6, 6, 6, 6, 2], 4);
/// assert_eq!(score_category(&dice, Category::Kare, false), 44);
/// assert_eq!(score_category(&dice, Category::Kare, true), 88);
/// ```
#[must_use]
pub fn score_category(dice: &DiceSet, category: Category, first_roll: bool) -> i32 {
    let score = if dice.has_wild() {
        let wild_index = dice.wildcard_index();
        let shown = dice.faces();
        let mut best = i32::MIN;
        for substitute in 1..=6u8 {
            let mut faces = shown;
            faces[wild_index] = substitute;
            best = best.max(score_resolved(faces, category));
        }
        best
    } else {
        score_resolved(dice.faces(), category)
    };

    if first_roll && !category.is_school() {
        score * 2
    } else {
        score
    }
}

/// Evaluate the category formula on a resolved 5-face hand, bonuses
/// included, doubling not applied.
fn score_resolved(faces: [u8; 5], category: Category) -> i32 {
    let mut counts = [0u8; 6];
    for face in faces {
        counts[face as usize - 1] += 1;
    }
    let count = |face: u8| counts[face as usize - 1];
    let total: i32 = faces.iter().map(|&f| i32::from(f)).sum();

    match category {
        Category::Pair => (1..=6)
            .rev()
            .find(|&f| count(f) >= 2)
            .map_or(0, |f| 2 * i32::from(f)),

        Category::TwoPairs => {
            let mut pairs = (1..=6).rev().filter(|&f| count(f) >= 2);
            match (pairs.next(), pairs.next()) {
                (Some(hi), Some(lo)) => 2 * i32::from(hi + lo),
                _ => 0,
            }
        }

        Category::Trips => (1..=6)
            .rev()
            .find(|&f| count(f) >= 3)
            .map_or(0, |f| 3 * i32::from(f)),

        Category::SmallStraight => {
            const RUNS: [[u8; 4]; 3] = [[1, 2, 3, 4], [2, 3, 4, 5], [3, 4, 5, 6]];
            if RUNS.iter().any(|run| run.iter().all(|&f| count(f) > 0)) {
                total
            } else {
                0
            }
        }

        Category::LargeStraight => {
            // Exactly five distinct consecutive faces; a duplicate breaks it.
            if counts == [1, 1, 1, 1, 1, 0] || counts == [0, 1, 1, 1, 1, 1] {
                total
            } else {
                0
            }
        }

        Category::Full => {
            if counts.contains(&3) && counts.contains(&2) {
                // Royal full: three 1s and two 2s.
                if count(1) == 3 && count(2) == 2 {
                    total + 50
                } else {
                    total
                }
            } else {
                0
            }
        }

        Category::Kare => (1..=6)
            .rev()
            .find(|&f| count(f) >= 4)
            .map_or(0, |f| 4 * i32::from(f) + 20),

        Category::Abaka => {
            if counts.contains(&5) {
                total + 50
            } else {
                0
            }
        }

        Category::Sum => total,

        Category::School(d) => i32::from(count(d.face())) - 3,
    }
}
