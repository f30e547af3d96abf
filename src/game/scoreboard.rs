//! Serializable snapshots of the whole board.
//!
//! A [`Scoreboard`] is a plain-data copy of everything a display layer
//! needs: every cell of every player, the column bonuses, balances,
//! running totals, and whose turn it is. It holds no references into
//! the engine and round-trips through serde unchanged.

use serde::{Deserialize, Serialize};

use super::Game;
use crate::core::{Category, PlayerId};
use crate::ledger::{Cell, PlayerLedger};

/// Snapshot of one player's table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBoard {
    pub name: String,
    /// Fifteen rows in scoreboard order, four cells each: slots 0-2,
    /// then the row bonus.
    pub grid: [[Cell; 4]; 15],
    pub column_bonus: [Cell; 3],
    pub school_balance: i32,
    pub total: i32,
}

impl PlayerBoard {
    fn capture(ledger: &PlayerLedger) -> Self {
        let mut grid = [[Cell::Empty; 4]; 15];
        for category in Category::ALL {
            grid[category.index()] = ledger.row(category).cells();
        }
        Self {
            name: ledger.name().to_string(),
            grid,
            column_bonus: *ledger.column_bonus(),
            school_balance: ledger.school_balance(),
            total: ledger.total_score(),
        }
    }
}

/// Snapshot of the whole game, one board per seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub players: Vec<PlayerBoard>,
    pub current_player: PlayerId,
    pub turn_number: u32,
}

impl Scoreboard {
    pub(crate) fn capture(game: &Game) -> Self {
        Self {
            players: game
                .players
                .iter()
                .map(|(_, ledger)| PlayerBoard::capture(ledger))
                .collect(),
            current_player: game.current,
            turn_number: game.turn_number,
        }
    }
}
