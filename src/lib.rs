//! # abaka-engine
//!
//! Rules engine for Abaka, a five-dice scoring game played on a
//! fifteen-row, three-column table with a conditional wildcard die.
//!
//! ## Design Principles
//!
//! 1. **Engine Owns All State**: A [`Game`] holds every ledger, the live
//!    dice, bonus claims, and history. Callers drive it exclusively
//!    through validated operations and read-only views.
//!
//! 2. **Validate Then Apply**: Every operation checks the whole move
//!    before touching anything. A rejection leaves the game exactly as
//!    it was, so every error is caller-correctable.
//!
//! 3. **Seeded Determinism**: The only nondeterminism is die faces,
//!    drawn from a seedable generator. Same seed, same operations,
//!    same game.
//!
//! ## The game in one paragraph
//!
//! Each turn a player rolls four ordinary dice plus one wildcard die
//! that is wild only while it shows a 1, rerolls up to twice, then
//! commits one cell: a combination row scored from the dice (doubled if
//! the opening roll was kept), a school row settled through a running
//! balance, or an explicit cross. Rows fill left to right and cells are
//! write-once. Completing a row or a column first claims game-wide
//! bonuses and locks everyone else out. The game ends when every cell
//! of every player is written.
//!
//! ## Modules
//!
//! - `core`: categories, dice, players, RNG, configuration, history
//! - `scoring`: dice-to-value evaluation with the wildcard search
//! - `ledger`: per-player tables of write-once cells
//! - `school`: the denomination rows' balance economy
//! - `bonus`: cross-player row and column bonus claims
//! - `game`: the turn engine tying it all together

pub mod bonus;
pub mod core;
pub mod error;
pub mod game;
pub mod ledger;
pub mod school;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, Category, ConfigError, Denomination, DiceSet, Die, GameAction, GameConfig,
    GameRng, PlayerId, PlayerMap,
};

pub use crate::error::{ErrorKind, GameError};

pub use crate::ledger::{Cell, PlayerLedger, Row};

pub use crate::bonus::BonusClaims;

pub use crate::game::{Game, PlayerBoard, Scoreboard};

pub use crate::scoring::score_category;
