//! Committed moves and the game's history log.
//!
//! Every mutation a player commits is appended to the game history as an
//! [`ActionRecord`]: who moved, in which turn, and what landed on the
//! board. Display layers render move tickers and post-game summaries from
//! this log; the engine itself never reads it back.
//!
//! School writes are logged by their board effect: a resolved school roll
//! that crosses the slot (exactly three of the denomination) appears as a
//! [`GameAction::Cross`], any other resolution as a [`GameAction::Score`]
//! carrying the new balance.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::category::Category;
use super::player::PlayerId;

/// One committed move, described by its effect on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Dice positions redrawn. An empty list is a legal reroll and still
    /// spends budget.
    Reroll {
        /// Positions 0-4. Fits inline; rerolls never allocate.
        indices: SmallVec<[u8; 5]>,
    },

    /// A numeric value written into a row slot.
    Score {
        category: Category,
        slot: usize,
        /// The value as committed: doubled for first-roll combos, the new
        /// balance for school rows.
        value: i32,
    },

    /// A slot crossed out, voluntarily or by a school roll of exactly
    /// three.
    Cross { category: Category, slot: usize },
}

impl GameAction {
    /// Build a reroll action from die positions.
    #[must_use]
    pub fn reroll(indices: &[usize]) -> Self {
        Self::Reroll {
            indices: indices.iter().map(|&i| i as u8).collect(),
        }
    }
}

/// A committed move with its turn metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// Turn number when the move was made (starts at 1).
    pub turn: u32,

    /// The move itself.
    pub action: GameAction,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, turn: u32, action: GameAction) -> Self {
        Self {
            player,
            turn,
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reroll_from_positions() {
        let action = GameAction::reroll(&[0, 3, 4]);
        match &action {
            GameAction::Reroll { indices } => {
                assert_eq!(indices.as_slice(), &[0, 3, 4]);
            }
            other => panic!("expected reroll, got {:?}", other),
        }

        let empty = GameAction::reroll(&[]);
        assert_eq!(
            empty,
            GameAction::Reroll {
                indices: SmallVec::new()
            }
        );
    }

    #[test]
    fn test_action_equality() {
        let a1 = GameAction::Score {
            category: Category::Kare,
            slot: 0,
            value: 88,
        };
        let a2 = GameAction::Score {
            category: Category::Kare,
            slot: 0,
            value: 88,
        };
        let a3 = GameAction::Score {
            category: Category::Kare,
            slot: 1,
            value: 88,
        };

        assert_eq!(a1, a2);
        assert_ne!(a1, a3);
    }

    #[test]
    fn test_record() {
        let action = GameAction::Cross {
            category: Category::Pair,
            slot: 2,
        };
        let record = ActionRecord::new(PlayerId::new(1), 7, action.clone());

        assert_eq!(record.player, PlayerId::new(1));
        assert_eq!(record.turn, 7);
        assert_eq!(record.action, action);
    }

    #[test]
    fn test_serialization() {
        let record = ActionRecord::new(PlayerId::new(0), 3, GameAction::reroll(&[1, 2]));
        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
