//! The turn engine: one struct owning all game state, driven through a
//! small set of validated operations.
//!
//! ## Turn shape
//!
//! A turn is roll, up to two rerolls, then one committing write:
//!
//! 1. [`Game::start_turn`] rolls five dice for the seat to act.
//! 2. [`Game::reroll`] redraws any subset of positions, twice at most.
//! 3. [`Game::record_score`] or [`Game::record_cross`] commits a cell,
//!    resolves bonuses, appends history, and passes the dice to the
//!    next seat.
//!
//! Between a commit and the next [`Game::start_turn`] there is no live
//! roll, and every dice-dependent operation rejects.
//!
//! ## Atomicity
//!
//! Every operation validates completely before it mutates. A rejected
//! call leaves dice, ledgers, balances, and history exactly as they
//! were, so callers can retry with a corrected move.
//!
//! ## Determinism
//!
//! All randomness flows from the seed in [`GameConfig`]. Two games with
//! the same seed and the same operation sequence produce identical dice
//! and identical boards.

pub mod scoreboard;

pub use scoreboard::{PlayerBoard, Scoreboard};

use rustc_hash::FxHashMap;

use crate::bonus::{self, BonusClaims};
use crate::core::{
    ActionRecord, Category, DiceSet, GameAction, GameConfig, GameRng, PlayerId, PlayerMap,
};
use crate::error::GameError;
use crate::ledger::{Cell, PlayerLedger};
use crate::school::{self, SchoolWrite};
use crate::scoring;

/// Rerolls granted per turn after the opening roll.
const REROLLS_PER_TURN: u8 = 2;

/// A complete game in progress.
///
/// ## Example
///
/// ```
/// use abaka_engine::{Game, GameConfig};
///
/// let config = GameConfig::new(["Vera", "Piotr"]).unwrap().with_seed(42);
/// let mut game = Game::new(config);
///
/// game.start_turn().unwrap();
/// assert_eq!(game.rolls_left(), 2);
/// assert!(game.is_first_roll());
/// assert!(game.dice().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    players: PlayerMap<PlayerLedger>,
    current: PlayerId,
    dice: Option<DiceSet>,
    rolls_left: u8,
    first_roll: bool,
    claims: BonusClaims,
    turn_number: u32,
    history: Vec<ActionRecord>,
    rng: GameRng,
}

impl Game {
    /// Start a game from a validated configuration. Player 0 acts first.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = GameRng::new(config.seed());
        let players = PlayerMap::new(config.player_count(), |id| {
            PlayerLedger::new(config.player_names()[id.index()].clone())
        });
        Self {
            players,
            current: PlayerId::new(0),
            dice: None,
            rolls_left: 0,
            first_roll: true,
            claims: BonusClaims::new(),
            turn_number: 0,
            history: Vec::new(),
            rng,
        }
    }

    /// Roll the opening hand for the seat to act.
    ///
    /// Rejects with [`GameError::TurnAlreadyStarted`] while a roll is
    /// still live.
    pub fn start_turn(&mut self) -> Result<(), GameError> {
        if self.dice.is_some() {
            return Err(GameError::TurnAlreadyStarted);
        }
        self.dice = Some(DiceSet::roll(&mut self.rng));
        self.rolls_left = REROLLS_PER_TURN;
        self.first_roll = true;
        self.turn_number += 1;
        Ok(())
    }

    /// Redraw the dice at the given positions, spending one reroll.
    ///
    /// An empty position list is legal and still spends the reroll.
    /// Positions are validated before any die moves: on error the hand
    /// and the budget are untouched.
    pub fn reroll(&mut self, indices: &[usize]) -> Result<(), GameError> {
        let Some(dice) = self.dice.as_mut() else {
            return Err(GameError::NoActiveRoll);
        };
        if self.rolls_left == 0 {
            return Err(GameError::NoRerollsLeft);
        }
        if let Some(&index) = indices.iter().find(|&&index| index >= 5) {
            return Err(GameError::InvalidIndex { index });
        }

        for &index in indices {
            dice.reroll_at(index, &mut self.rng);
        }
        self.rolls_left -= 1;
        if self.rolls_left < REROLLS_PER_TURN {
            self.first_roll = false;
        }
        self.history.push(ActionRecord::new(
            self.current,
            self.turn_number,
            GameAction::reroll(indices),
        ));
        Ok(())
    }

    /// Commit the live dice into a cell of the current player's table.
    ///
    /// School rows resolve through the balance ledger and may cross the
    /// slot, credit the balance, or charge a shortfall. Combination rows
    /// take the scored value, doubled when the opening roll was never
    /// rerolled. On success the turn passes to the next seat; on error
    /// the roll stays live.
    pub fn record_score(&mut self, category: Category, slot: usize) -> Result<(), GameError> {
        let Some(dice) = self.dice else {
            return Err(GameError::NoActiveRoll);
        };

        let action = if let Some(denom) = category.denomination() {
            match school::record_school(&mut self.players[self.current], &dice, denom, slot)? {
                SchoolWrite::Crossed => GameAction::Cross { category, slot },
                SchoolWrite::Balance(value) => GameAction::Score {
                    category,
                    slot,
                    value,
                },
            }
        } else {
            let value = scoring::score_category(&dice, category, self.first_roll);
            self.players[self.current].record(category, slot, value)?;
            GameAction::Score {
                category,
                slot,
                value,
            }
        };

        self.commit(category, slot, action);
        Ok(())
    }

    /// Cross out a combination slot instead of scoring it.
    ///
    /// Crossing forfeits the row's bonus and this column's bonus for the
    /// current player on the spot. School rows cannot be crossed by
    /// hand; they cross only through a three-of-a-kind school write.
    pub fn record_cross(&mut self, category: Category, slot: usize) -> Result<(), GameError> {
        if self.dice.is_none() {
            return Err(GameError::NoActiveRoll);
        }
        if category.is_school() {
            return Err(GameError::InvalidOperation);
        }

        let player = self.current;
        self.players[player].cross(category, slot)?;
        self.players[player].set_row_bonus_if_empty(category, Cell::Crossed);
        self.players[player].set_column_bonus_if_empty(slot, Cell::Crossed);

        self.commit(category, slot, GameAction::Cross { category, slot });
        Ok(())
    }

    /// Index of the leftmost open slot in the current row, the only slot
    /// a write may target.
    pub fn leftmost_slot(&self, player: PlayerId, category: Category) -> Result<usize, GameError> {
        self.players[player].first_empty_slot(category)
    }

    /// Has every player filled every row?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.players.iter().all(|(_, ledger)| ledger.is_complete())
    }

    /// Final (or running) totals keyed by player name.
    #[must_use]
    pub fn final_scores(&self) -> FxHashMap<String, i32> {
        self.players
            .iter()
            .map(|(_, ledger)| (ledger.name().to_string(), ledger.total_score()))
            .collect()
    }

    /// The live dice, if a roll is in progress.
    #[must_use]
    pub fn dice(&self) -> Option<&DiceSet> {
        self.dice.as_ref()
    }

    /// Rerolls remaining in the live turn.
    #[must_use]
    pub fn rolls_left(&self) -> u8 {
        self.rolls_left
    }

    /// Is the live hand still the untouched opening roll? Combination
    /// writes double while this holds.
    #[must_use]
    pub fn is_first_roll(&self) -> bool {
        self.first_roll
    }

    /// The seat to act.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Turns started so far; the first turn is 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// One player's table.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerLedger {
        &self.players[player]
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Every committed move so far, in order.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// A serializable snapshot of the whole board.
    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard::capture(self)
    }

    /// Shared tail of every committing write: resolve bonuses, append
    /// history, retire the dice, advance the seat.
    fn commit(&mut self, category: Category, slot: usize, action: GameAction) {
        bonus::after_record(
            &mut self.claims,
            &mut self.players,
            self.current,
            category,
            slot,
        );
        self.history
            .push(ActionRecord::new(self.current, self.turn_number, action));
        self.dice = None;
        self.current = self.current.next(self.players.player_count());
    }
}
