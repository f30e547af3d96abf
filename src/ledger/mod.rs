//! Per-player scoring table: rows, cells, balance display, totals.
//!
//! ## Rows and cells
//!
//! Every category owns a [`Row`] of three player-writable slots plus one
//! bonus cell written only by bonus resolution. Slots fill strictly left
//! to right and are immutable once written.
//!
//! ## The one sanctioned overwrite
//!
//! The school balance displays in exactly one cell at a time. When the
//! balance moves to a new cell, the previous display cell is crossed in
//! place. That engine-internal relocation is the only write that ever
//! touches an occupied slot.
//!
//! ## Totals
//!
//! [`PlayerLedger::total_score`] sums every numeric cell: row slots, row
//! bonuses, column bonuses. A school balance that ends negative also
//! incurs 100 penalty points per point of debt, on top of the negative
//! number already sitting in its display cell.

use serde::{Deserialize, Serialize};

use crate::core::Category;
use crate::error::GameError;

/// One cell of the scoring table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Not yet written.
    #[default]
    Empty,
    /// A committed numeric score. School cells may hold negatives.
    Score(i32),
    /// Crossed out; worth nothing, counts as filled.
    Crossed,
}

impl Cell {
    /// Has nothing been written here yet?
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Is this cell crossed out?
    #[must_use]
    pub const fn is_crossed(self) -> bool {
        matches!(self, Cell::Crossed)
    }

    /// The numeric value, or `None` for empty and crossed cells.
    #[must_use]
    pub const fn score(self) -> Option<i32> {
        match self {
            Cell::Score(value) => Some(value),
            _ => None,
        }
    }
}

/// One category's row: three player slots plus the bonus cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    slots: [Cell; 3],
    bonus: Cell,
    shortfall_used: bool,
}

impl Row {
    /// The player slot at `index` (0-2).
    #[must_use]
    pub fn slot(&self, index: usize) -> Cell {
        self.slots[index]
    }

    /// The three player slots in order.
    #[must_use]
    pub fn slots(&self) -> &[Cell; 3] {
        &self.slots
    }

    /// The bonus cell.
    #[must_use]
    pub fn bonus(&self) -> Cell {
        self.bonus
    }

    /// Did a school shortfall ever land in this row? Forfeits the row
    /// bonus.
    #[must_use]
    pub fn shortfall_used(&self) -> bool {
        self.shortfall_used
    }

    /// Are all three player slots written?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|cell| !cell.is_empty())
    }

    /// Is any player slot crossed? The bonus cell does not count.
    #[must_use]
    pub fn has_crossed_slot(&self) -> bool {
        self.slots.iter().any(|cell| cell.is_crossed())
    }

    /// The largest numeric value among the player slots.
    #[must_use]
    pub fn max_numeric(&self) -> Option<i32> {
        self.slots.iter().filter_map(|cell| cell.score()).max()
    }

    /// Index of the leftmost empty player slot.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(|cell| cell.is_empty())
    }

    /// All four cells in display order: slots 0-2, then the bonus.
    #[must_use]
    pub fn cells(&self) -> [Cell; 4] {
        [self.slots[0], self.slots[1], self.slots[2], self.bonus]
    }
}

/// One player's complete scoring table.
///
/// Owns the fifteen rows, the three column-bonus cells, and the running
/// school balance with a pointer to the cell currently displaying it.
///
/// ## Example
///
/// ```
/// use abaka_engine::{Category, PlayerLedger};
///
/// let mut ledger = PlayerLedger::new("Vera");
/// ledger.record(Category::Pair, 0, 8).unwrap();
/// ledger.record(Category::Pair, 1, 12).unwrap();
///
/// // Slot 1 is taken; slot 2 is next.
/// assert!(ledger.record(Category::Pair, 1, 4).is_err());
/// assert_eq!(ledger.first_empty_slot(Category::Pair).unwrap(), 2);
/// assert_eq!(ledger.total_score(), 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLedger {
    name: String,
    rows: [Row; 15],
    column_bonus: [Cell; 3],
    school_balance: i32,
    school_balance_loc: Option<(Category, usize)>,
}

impl PlayerLedger {
    /// Create an empty table for one player.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: [Row::default(); 15],
            column_bonus: [Cell::Empty; 3],
            school_balance: 0,
            school_balance_loc: None,
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The row for `category`.
    #[must_use]
    pub fn row(&self, category: Category) -> &Row {
        &self.rows[category.index()]
    }

    /// The three column-bonus cells.
    #[must_use]
    pub fn column_bonus(&self) -> &[Cell; 3] {
        &self.column_bonus
    }

    /// The running school balance.
    #[must_use]
    pub fn school_balance(&self) -> i32 {
        self.school_balance
    }

    /// Where the balance currently displays, if it has ever been written.
    #[must_use]
    pub fn school_balance_location(&self) -> Option<(Category, usize)> {
        self.school_balance_loc
    }

    /// Check that `slot` may be written in `category`'s row without
    /// writing it. Validation order: range, fill order, occupancy.
    pub fn ensure_writable(&self, category: Category, slot: usize) -> Result<(), GameError> {
        if slot > 2 {
            return Err(GameError::SlotOutOfRange { slot });
        }
        let row = self.row(category);
        if row.slots[..slot].iter().any(|cell| cell.is_empty()) {
            return Err(GameError::SlotOrderViolation { category, slot });
        }
        if !row.slots[slot].is_empty() {
            return Err(GameError::SlotOccupied { category, slot });
        }
        Ok(())
    }

    /// Write a numeric score into a row slot.
    pub fn record(&mut self, category: Category, slot: usize, value: i32) -> Result<(), GameError> {
        self.ensure_writable(category, slot)?;
        self.rows[category.index()].slots[slot] = Cell::Score(value);
        Ok(())
    }

    /// Cross out a row slot.
    pub fn cross(&mut self, category: Category, slot: usize) -> Result<(), GameError> {
        self.ensure_writable(category, slot)?;
        self.rows[category.index()].slots[slot] = Cell::Crossed;
        Ok(())
    }

    /// Index of the leftmost empty slot in `category`'s row.
    pub fn first_empty_slot(&self, category: Category) -> Result<usize, GameError> {
        self.row(category)
            .first_empty()
            .ok_or(GameError::RowComplete { category })
    }

    /// Are all fifteen rows complete?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rows.iter().all(Row::is_complete)
    }

    /// Are all nine combination rows complete? School rows may still be
    /// open. Gates the school ledger's endgame exception.
    #[must_use]
    pub fn non_school_complete(&self) -> bool {
        Category::ALL
            .into_iter()
            .filter(|category| !category.is_school())
            .all(|category| self.row(category).is_complete())
    }

    /// Categories whose row still has at least one empty player slot.
    #[must_use]
    pub fn open_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| !self.row(*category).is_complete())
            .collect()
    }

    /// The player's current total: every numeric cell in every row
    /// (bonus cells included), plus numeric column bonuses, plus the
    /// 100-per-point penalty when the school balance is negative.
    #[must_use]
    pub fn total_score(&self) -> i32 {
        let mut total = 0;
        for row in &self.rows {
            for cell in row.cells() {
                if let Some(value) = cell.score() {
                    total += value;
                }
            }
        }
        for cell in &self.column_bonus {
            if let Some(value) = cell.score() {
                total += value;
            }
        }
        if self.school_balance < 0 {
            total += self.school_balance * 100;
        }
        total
    }

    /// Write the row bonus cell unless something already claimed it.
    pub(crate) fn set_row_bonus_if_empty(&mut self, category: Category, value: Cell) {
        let row = &mut self.rows[category.index()];
        if row.bonus.is_empty() {
            row.bonus = value;
        }
    }

    /// Write a column bonus cell unless something already claimed it.
    pub(crate) fn set_column_bonus_if_empty(&mut self, column: usize, value: Cell) {
        if self.column_bonus[column].is_empty() {
            self.column_bonus[column] = value;
        }
    }

    /// Move the school balance display to a freshly validated slot,
    /// crossing the previous display cell. Callers must have passed
    /// [`ensure_writable`](Self::ensure_writable) for the target first.
    pub(crate) fn relocate_school_balance(
        &mut self,
        category: Category,
        slot: usize,
        new_balance: i32,
    ) {
        debug_assert!(self.rows[category.index()].slots[slot].is_empty());
        if let Some((old_category, old_slot)) = self.school_balance_loc {
            self.rows[old_category.index()].slots[old_slot] = Cell::Crossed;
        }
        self.rows[category.index()].slots[slot] = Cell::Score(new_balance);
        self.school_balance = new_balance;
        self.school_balance_loc = Some((category, slot));
    }

    /// Record that this row took a shortfall write.
    pub(crate) fn mark_shortfall(&mut self, category: Category) {
        self.rows[category.index()].shortfall_used = true;
    }
}
