//! Core vocabulary: players, dice, categories, actions, RNG, configuration.
//!
//! This module contains the building blocks every other layer speaks in.
//! Game rules live above (`scoring`, `school`, `bonus`, `game`); nothing
//! here knows how a hand scores.

pub mod action;
pub mod category;
pub mod config;
pub mod dice;
pub mod player;
pub mod rng;

pub use action::{ActionRecord, GameAction};
pub use category::{Category, Denomination};
pub use config::{ConfigError, GameConfig};
pub use dice::{Die, DiceSet};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
