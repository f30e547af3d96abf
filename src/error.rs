//! Rejection errors for every fallible engine operation.
//!
//! ## Design
//!
//! All rejections share one flat [`GameError`] enum so callers match on a
//! single type. Each variant belongs to one of three classes, exposed via
//! [`GameError::kind`]:
//!
//! - **Validation**: the write itself is malformed (bad slot, occupied cell).
//! - **Rule**: the write is well-formed but the rules forbid it right now.
//! - **State**: the operation does not exist in the current turn state.
//!
//! Every error is an immediate, correctable rejection. A failed operation
//! mutates nothing; the caller may retry with different arguments.

use thiserror::Error;

use crate::core::Category;

/// Classification of a [`GameError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed write: slot index, fill order, or occupancy.
    Validation,
    /// Well-formed write forbidden by the game rules.
    Rule,
    /// Operation not available in the current turn state.
    State,
}

/// Any rejection the engine can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Slot index outside `0..=2`.
    #[error("slot {slot} out of range (rows have slots 0-2)")]
    SlotOutOfRange { slot: usize },

    /// A slot left of the target is still empty; rows fill left to right.
    #[error("cannot write {category} slot {slot}: earlier slot still empty")]
    SlotOrderViolation { category: Category, slot: usize },

    /// The target slot already holds a score or a cross.
    #[error("{category} slot {slot} is already written")]
    SlotOccupied { category: Category, slot: usize },

    /// The operation is not defined for this category (crossing a school row).
    #[error("operation not defined for this category")]
    InvalidOperation,

    /// School shortfall payment exceeds the available balance.
    #[error("insufficient school balance: need {required}, have {balance}")]
    InsufficientBalance { required: i32, balance: i32 },

    /// The move is forbidden until its enabling condition holds.
    #[error("move not allowed yet")]
    InvalidMove,

    /// The reroll budget for this turn is spent.
    #[error("no rerolls left this turn")]
    NoRerollsLeft,

    /// Reroll position outside the five dice.
    #[error("die index {index} out of range (dice have positions 0-4)")]
    InvalidIndex { index: usize },

    /// All three slots of the row are written.
    #[error("{category} row is complete")]
    RowComplete { category: Category },

    /// A dice-consuming operation was called before the turn's roll.
    #[error("no active roll (call start_turn first)")]
    NoActiveRoll,

    /// `start_turn` was called while a roll is still live.
    #[error("turn already started (resolve the current roll first)")]
    TurnAlreadyStarted,
}

impl GameError {
    /// Which class this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SlotOutOfRange { .. }
            | Self::SlotOrderViolation { .. }
            | Self::SlotOccupied { .. } => ErrorKind::Validation,
            Self::InvalidOperation
            | Self::InsufficientBalance { .. }
            | Self::InvalidMove => ErrorKind::Rule,
            Self::NoRerollsLeft
            | Self::InvalidIndex { .. }
            | Self::RowComplete { .. }
            | Self::NoActiveRoll
            | Self::TurnAlreadyStarted => ErrorKind::State,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            GameError::SlotOutOfRange { slot: 3 }.kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            GameError::SlotOccupied {
                category: Category::Pair,
                slot: 0
            }
            .kind(),
            ErrorKind::Validation
        );
        assert_eq!(GameError::InvalidOperation.kind(), ErrorKind::Rule);
        assert_eq!(
            GameError::InsufficientBalance {
                required: 10,
                balance: 2
            }
            .kind(),
            ErrorKind::Rule
        );
        assert_eq!(GameError::InvalidMove.kind(), ErrorKind::Rule);
        assert_eq!(GameError::NoRerollsLeft.kind(), ErrorKind::State);
        assert_eq!(GameError::NoActiveRoll.kind(), ErrorKind::State);
        assert_eq!(GameError::TurnAlreadyStarted.kind(), ErrorKind::State);
    }

    #[test]
    fn test_error_display() {
        let err = GameError::InsufficientBalance {
            required: 10,
            balance: 2,
        };
        assert_eq!(
            format!("{}", err),
            "insufficient school balance: need 10, have 2"
        );

        let err = GameError::SlotOccupied {
            category: Category::Kare,
            slot: 1,
        };
        assert_eq!(format!("{}", err), "Kare slot 1 is already written");
    }
}
