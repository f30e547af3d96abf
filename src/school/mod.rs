//! The school ledger: a balance economy over the six denomination rows.
//!
//! ## Balance
//!
//! Each player carries one running balance across all six school rows.
//! The balance lives on the board: it displays in the most recently
//! written school cell, and every move of the balance crosses the
//! previous display cell in place.
//!
//! ## Resolution
//!
//! Writing school row `d` first counts qualifying dice, `k`: every die
//! showing face `d`, plus the wildcard when it shows its wild face 1.
//! For `d = 1` the wild die already matches by face and is not counted
//! twice. Then:
//!
//! - `k == 3` crosses the slot and leaves the balance alone.
//! - `k > 3` credits `(k - 3) * d` and displays the new balance.
//! - `1 <= k < 3` is a shortfall: the player pays `(3 - k) * d` out of
//!   the balance, which must cover it in full.
//! - `k == 0` pays a flat `2 * d`. This write is only legal once every
//!   combination row is filled, and it is the one payment allowed to
//!   drive the balance negative.
//!
//! Any shortfall, paid or flat, forfeits that row's bonus on the spot.
//!
//! School writes never double, whatever the roll state. Validation runs
//! before any cell or balance moves, so a rejected write leaves the
//! table untouched.

use crate::core::{Category, Denomination, DiceSet};
use crate::error::GameError;
use crate::ledger::{Cell, PlayerLedger};

/// How a school write landed on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SchoolWrite {
    /// Exactly three qualifying dice: the slot was crossed.
    Crossed,
    /// The balance moved; the slot now displays this new balance.
    Balance(i32),
}

/// Count the dice qualifying for denomination `denom`.
///
/// The wildcard die counts by its shown face like any other die, and
/// additionally counts once more when it shows its wild face 1, except
/// toward denomination 1 itself.
///
/// ## Example
///
/// ```
/// use abaka_engine::core::{Denomination, DiceSet};
/// use abaka_engine::school::count_matching;
///
/// // Three natural fours plus the wild die showing 1.
/// let dice = DiceSet::from_faces([4, 4, 1, 4, 2], 2);
/// let fours = Denomination::new(4).unwrap();
/// assert_eq!(count_matching(&dice, fours), 4);
/// ```
#[must_use]
pub fn count_matching(dice: &DiceSet, denom: Denomination) -> u8 {
    let mut count = dice.count_showing(denom.face()) as u8;
    if denom.face() != 1 && dice.has_wild() {
        count += 1;
    }
    count
}

/// Resolve a school write into `ledger` at (`denom`, `slot`).
///
/// Validates slot writability, the endgame gate, and the balance before
/// mutating anything.
pub(crate) fn record_school(
    ledger: &mut PlayerLedger,
    dice: &DiceSet,
    denom: Denomination,
    slot: usize,
) -> Result<SchoolWrite, GameError> {
    let category = Category::School(denom);
    ledger.ensure_writable(category, slot)?;

    let k = i32::from(count_matching(dice, denom));
    let face = i32::from(denom.face());

    if k == 3 {
        ledger.cross(category, slot)?;
        return Ok(SchoolWrite::Crossed);
    }

    if k > 3 {
        let new_balance = ledger.school_balance() + (k - 3) * face;
        ledger.relocate_school_balance(category, slot, new_balance);
        return Ok(SchoolWrite::Balance(new_balance));
    }

    let new_balance = if k == 0 {
        // Flat cost, endgame only. The single path below zero.
        if !ledger.non_school_complete() {
            return Err(GameError::InvalidMove);
        }
        ledger.school_balance() - 2 * face
    } else {
        let required = (3 - k) * face;
        if ledger.school_balance() < required {
            return Err(GameError::InsufficientBalance {
                required,
                balance: ledger.school_balance(),
            });
        }
        ledger.school_balance() - required
    };

    ledger.relocate_school_balance(category, slot, new_balance);
    ledger.mark_shortfall(category);
    ledger.set_row_bonus_if_empty(category, Cell::Crossed);
    Ok(SchoolWrite::Balance(new_balance))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn denom(face: u8) -> Denomination {
        Denomination::new(face).unwrap()
    }

    fn school(face: u8) -> Category {
        Category::school(face).unwrap()
    }

    /// Fill all nine combination rows so the endgame exception opens up.
    fn complete_combos(ledger: &mut PlayerLedger) {
        for category in Category::ALL {
            if !category.is_school() {
                for slot in 0..3 {
                    ledger.record(category, slot, 1).unwrap();
                }
            }
        }
    }

    #[test]
    fn test_count_matching_by_face() {
        // Wild die showing an ordinary face counts by that face.
        let dice = DiceSet::from_faces([2, 2, 6, 3, 2], 1);
        assert_eq!(count_matching(&dice, denom(2)), 3);
        assert_eq!(count_matching(&dice, denom(6)), 1);
        assert_eq!(count_matching(&dice, denom(5)), 0);
    }

    #[test]
    fn test_count_matching_wild_adds_one() {
        let dice = DiceSet::from_faces([4, 4, 1, 4, 2], 2);
        assert!(dice.has_wild());
        assert_eq!(count_matching(&dice, denom(4)), 4);
        assert_eq!(count_matching(&dice, denom(2)), 2);
        // No die shows 5, but the wild still counts toward it.
        assert_eq!(count_matching(&dice, denom(5)), 1);
    }

    #[test]
    fn test_count_matching_ones_not_double_counted() {
        let dice = DiceSet::from_faces([1, 3, 4, 6, 1], 0);
        assert!(dice.has_wild());
        // Two dice show 1, one of them the wild. Still k = 2.
        assert_eq!(count_matching(&dice, denom(1)), 2);
        assert_eq!(count_matching(&dice, denom(3)), 2);
    }

    #[test]
    fn test_exactly_three_crosses_the_slot() {
        let mut ledger = PlayerLedger::new("Vera");
        let dice = DiceSet::from_faces([5, 5, 5, 2, 3], 4);

        let write = record_school(&mut ledger, &dice, denom(5), 0).unwrap();

        assert_eq!(write, SchoolWrite::Crossed);
        assert!(ledger.row(school(5)).slot(0).is_crossed());
        assert_eq!(ledger.school_balance(), 0);
        assert_eq!(ledger.school_balance_location(), None);
        assert!(!ledger.row(school(5)).shortfall_used());
        assert!(ledger.row(school(5)).bonus().is_empty());
    }

    #[test]
    fn test_surplus_credits_the_balance() {
        let mut ledger = PlayerLedger::new("Vera");
        let dice = DiceSet::from_faces([5, 5, 5, 5, 2], 4);

        let write = record_school(&mut ledger, &dice, denom(5), 0).unwrap();

        assert_eq!(write, SchoolWrite::Balance(5));
        assert_eq!(ledger.row(school(5)).slot(0), Cell::Score(5));
        assert_eq!(ledger.school_balance(), 5);
        assert_eq!(ledger.school_balance_location(), Some((school(5), 0)));
    }

    #[test]
    fn test_wild_die_completes_a_surplus() {
        let mut ledger = PlayerLedger::new("Vera");
        // Three natural fives plus the wild: k = 4.
        let dice = DiceSet::from_faces([5, 5, 5, 1, 2], 3);

        let write = record_school(&mut ledger, &dice, denom(5), 0).unwrap();
        assert_eq!(write, SchoolWrite::Balance(5));
    }

    #[test]
    fn test_balance_relocates_between_rows() {
        let mut ledger = PlayerLedger::new("Vera");
        let fives = DiceSet::from_faces([5, 5, 5, 5, 2], 4);
        let sixes = DiceSet::from_faces([6, 6, 6, 6, 2], 4);

        record_school(&mut ledger, &fives, denom(5), 0).unwrap();
        record_school(&mut ledger, &sixes, denom(6), 0).unwrap();

        // The old display cell is crossed, the new one holds 5 + 6.
        assert!(ledger.row(school(5)).slot(0).is_crossed());
        assert_eq!(ledger.row(school(6)).slot(0), Cell::Score(11));
        assert_eq!(ledger.school_balance(), 11);
    }

    #[test]
    fn test_shortfall_pays_from_balance() {
        let mut ledger = PlayerLedger::new("Vera");
        let fives = DiceSet::from_faces([5, 5, 5, 5, 2], 4);
        record_school(&mut ledger, &fives, denom(5), 0).unwrap();

        // Two twos: required payment (3 - 2) * 2 = 2.
        let twos = DiceSet::from_faces([2, 2, 4, 6, 3], 4);
        let write = record_school(&mut ledger, &twos, denom(2), 0).unwrap();

        assert_eq!(write, SchoolWrite::Balance(3));
        assert_eq!(ledger.row(school(2)).slot(0), Cell::Score(3));
        assert!(ledger.row(school(5)).slot(0).is_crossed());
        assert!(ledger.row(school(2)).shortfall_used());
        assert!(ledger.row(school(2)).bonus().is_crossed());
    }

    #[test]
    fn test_shortfall_needs_the_full_payment() {
        let mut ledger = PlayerLedger::new("Vera");
        let twos = DiceSet::from_faces([2, 2, 4, 6, 3], 4);

        let err = record_school(&mut ledger, &twos, denom(2), 0).unwrap_err();

        assert_eq!(
            err,
            GameError::InsufficientBalance {
                required: 2,
                balance: 0
            }
        );
        // Nothing moved.
        assert!(ledger.row(school(2)).slot(0).is_empty());
        assert!(!ledger.row(school(2)).shortfall_used());
        assert_eq!(ledger.school_balance(), 0);
    }

    #[test]
    fn test_single_die_shortfall_costs_double() {
        let mut ledger = PlayerLedger::new("Vera");
        let sixes = DiceSet::from_faces([6, 6, 6, 6, 6], 4);
        record_school(&mut ledger, &sixes, denom(6), 0).unwrap();
        assert_eq!(ledger.school_balance(), 12);

        // One five: required payment (3 - 1) * 5 = 10.
        let one_five = DiceSet::from_faces([5, 2, 2, 3, 4], 4);
        let write = record_school(&mut ledger, &one_five, denom(5), 0).unwrap();
        assert_eq!(write, SchoolWrite::Balance(2));
    }

    #[test]
    fn test_zero_dice_blocked_before_endgame() {
        let mut ledger = PlayerLedger::new("Vera");
        let dice = DiceSet::from_faces([3, 3, 4, 4, 6], 4);

        assert_eq!(
            record_school(&mut ledger, &dice, denom(5), 0),
            Err(GameError::InvalidMove)
        );
        assert!(ledger.row(school(5)).slot(0).is_empty());
    }

    #[test]
    fn test_zero_dice_endgame_goes_negative() {
        let mut ledger = PlayerLedger::new("Vera");
        complete_combos(&mut ledger);
        ledger.relocate_school_balance(school(2), 0, 2);

        // No fives anywhere: flat cost 2 * 5 = 10.
        let dice = DiceSet::from_faces([3, 3, 4, 4, 6], 4);
        let write = record_school(&mut ledger, &dice, denom(5), 0).unwrap();

        assert_eq!(write, SchoolWrite::Balance(-8));
        assert_eq!(ledger.row(school(5)).slot(0), Cell::Score(-8));
        assert!(ledger.row(school(2)).slot(0).is_crossed());
        assert!(ledger.row(school(5)).shortfall_used());
        assert!(ledger.row(school(5)).bonus().is_crossed());
        // 27 combo points, -8 on the board, -800 penalty.
        assert_eq!(ledger.total_score(), -781);
    }

    #[test]
    fn test_zero_dice_cost_is_flat_even_when_affordable() {
        let mut ledger = PlayerLedger::new("Vera");
        complete_combos(&mut ledger);
        ledger.relocate_school_balance(school(2), 0, 25);

        let dice = DiceSet::from_faces([3, 3, 4, 4, 6], 4);
        let write = record_school(&mut ledger, &dice, denom(5), 0).unwrap();
        assert_eq!(write, SchoolWrite::Balance(15));
    }

    #[test]
    fn test_paid_shortfall_requires_balance_even_at_endgame() {
        let mut ledger = PlayerLedger::new("Vera");
        complete_combos(&mut ledger);

        // One two showing: this is a paid shortfall, not a flat write,
        // so an empty balance still rejects it.
        let dice = DiceSet::from_faces([2, 3, 4, 6, 3], 4);
        assert_eq!(
            record_school(&mut ledger, &dice, denom(2), 0),
            Err(GameError::InsufficientBalance {
                required: 4,
                balance: 0
            })
        );
    }

    #[test]
    fn test_validation_runs_before_any_mutation() {
        let mut ledger = PlayerLedger::new("Vera");
        let fives = DiceSet::from_faces([5, 5, 5, 5, 2], 4);
        record_school(&mut ledger, &fives, denom(5), 0).unwrap();

        // Slot 0 is occupied: the write must fail without touching the
        // balance or crossing the current display cell.
        let err = record_school(&mut ledger, &fives, denom(5), 0).unwrap_err();
        assert_eq!(
            err,
            GameError::SlotOccupied {
                category: school(5),
                slot: 0
            }
        );
        assert_eq!(ledger.row(school(5)).slot(0), Cell::Score(5));
        assert_eq!(ledger.school_balance(), 5);
        assert_eq!(ledger.school_balance_location(), Some((school(5), 0)));
    }
}
