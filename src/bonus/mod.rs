//! Cross-player bonus resolution.
//!
//! Runs once after every committed write. Two families of bonus:
//!
//! - **Row bonuses**, one per category game-wide. The first player to
//!   fill a row's three slots claims that category's bonus cell, and
//!   every other player's cell for it is crossed on the spot.
//! - **Column bonuses**. Columns 0 and 1 are claimed game-wide by the
//!   first player to fill the column across all fifteen rows, with the
//!   same lock-out. Column 2 pays each player individually and involves
//!   no race.
//!
//! A school row pays three times its denomination unless the row ever
//! took a shortfall. Any other complete row or column pays its highest
//! numeric cell, or a cross when any of its cells is crossed.
//!
//! Bonus cells are written at most once and never overwritten, so a
//! cell crossed earlier (by an explicit cross or a shortfall) simply
//! absorbs the claim.

use serde::{Deserialize, Serialize};

use crate::core::{Category, PlayerId, PlayerMap};
use crate::ledger::{Cell, PlayerLedger, Row};

/// Which game-wide bonuses have already been decided.
///
/// Row bonuses are tracked per category; column bonuses only for the
/// two contested columns. Column 2 needs no claim bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusClaims {
    rows: [bool; 15],
    columns: [bool; 2],
}

impl BonusClaims {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Has `category`'s row bonus been decided?
    #[must_use]
    pub fn row_claimed(&self, category: Category) -> bool {
        self.rows[category.index()]
    }

    /// Has this contested column's bonus been decided?
    #[must_use]
    pub fn column_claimed(&self, column: usize) -> bool {
        assert!(column < 2, "only columns 0 and 1 carry a game-wide claim");
        self.columns[column]
    }

    fn claim_row(&mut self, category: Category) {
        self.rows[category.index()] = true;
    }

    fn claim_column(&mut self, column: usize) {
        self.columns[column] = true;
    }
}

/// Resolve every bonus consequence of `actor` writing (`category`,
/// `slot`). Row completion is checked for any slot; column completion
/// only for player slots, never for bonus-cell writes.
pub(crate) fn after_record(
    claims: &mut BonusClaims,
    players: &mut PlayerMap<PlayerLedger>,
    actor: PlayerId,
    category: Category,
    slot: usize,
) {
    resolve_row(claims, players, actor, category);
    if slot < 3 {
        resolve_column(claims, players, actor, slot);
    }
}

fn resolve_row(
    claims: &mut BonusClaims,
    players: &mut PlayerMap<PlayerLedger>,
    actor: PlayerId,
    category: Category,
) {
    if claims.row_claimed(category) || !players[actor].row(category).is_complete() {
        return;
    }
    claims.claim_row(category);

    let value = row_bonus_value(players[actor].row(category), category);
    players[actor].set_row_bonus_if_empty(category, value);
    for (id, ledger) in players.iter_mut() {
        if id != actor {
            ledger.set_row_bonus_if_empty(category, Cell::Crossed);
        }
    }
}

fn resolve_column(
    claims: &mut BonusClaims,
    players: &mut PlayerMap<PlayerLedger>,
    actor: PlayerId,
    column: usize,
) {
    if column == 2 {
        if !players[actor].column_bonus()[2].is_empty() {
            return;
        }
        if let Some(value) = column_value(&players[actor], 2) {
            players[actor].set_column_bonus_if_empty(2, value);
        }
        return;
    }

    if claims.column_claimed(column) {
        return;
    }
    let Some(value) = column_value(&players[actor], column) else {
        return;
    };
    claims.claim_column(column);

    players[actor].set_column_bonus_if_empty(column, value);
    for (id, ledger) in players.iter_mut() {
        if id != actor {
            ledger.set_column_bonus_if_empty(column, Cell::Crossed);
        }
    }
}

/// The value a freshly completed row pays its completer.
fn row_bonus_value(row: &Row, category: Category) -> Cell {
    if let Some(denom) = category.denomination() {
        return if row.shortfall_used() {
            Cell::Crossed
        } else {
            Cell::Score(3 * i32::from(denom.face()))
        };
    }
    if row.has_crossed_slot() {
        Cell::Crossed
    } else {
        row.max_numeric().map_or(Cell::Crossed, Cell::Score)
    }
}

/// The value `ledger`'s column pays, or `None` while any of its fifteen
/// cells is still empty.
fn column_value(ledger: &PlayerLedger, column: usize) -> Option<Cell> {
    let mut best: Option<i32> = None;
    let mut crossed = false;
    for category in Category::ALL {
        match ledger.row(category).slot(column) {
            Cell::Empty => return None,
            Cell::Crossed => crossed = true,
            Cell::Score(value) => best = Some(best.map_or(value, |b| b.max(value))),
        }
    }
    if crossed {
        Some(Cell::Crossed)
    } else {
        Some(best.map_or(Cell::Crossed, Cell::Score))
    }
}
