//! Game configuration: the player roster and the RNG seed.
//!
//! A [`GameConfig`] is validated at construction and then consumed by
//! [`Game::new`](crate::Game::new). Seating order is the order of the
//! name list; player 0 moves first.

use thiserror::Error;

/// Rejected game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The name list was empty.
    #[error("at least 1 player required")]
    NoPlayers,

    /// More players than the engine supports.
    #[error("at most 255 players supported (got {count})")]
    TooManyPlayers { count: usize },

    /// A player name was empty.
    #[error("player names must be non-empty")]
    EmptyPlayerName,

    /// Two players shared a name; final scores are keyed by name.
    #[error("duplicate player name: {name}")]
    DuplicatePlayerName { name: String },
}

/// Validated configuration for one game.
///
/// ## Example
///
/// ```
/// use abaka_engine::core::GameConfig;
///
/// let config = GameConfig::new(["Vera", "Piotr"])
///     .unwrap()
///     .with_seed(42);
///
/// assert_eq!(config.player_count(), 2);
/// assert_eq!(config.seed(), 42);
/// ```
#[derive(Clone, Debug)]
pub struct GameConfig {
    player_names: Vec<String>,
    seed: u64,
}

impl GameConfig {
    /// Create a configuration from an ordered list of distinct, non-empty
    /// player names. The seed defaults to 0; call [`with_seed`](Self::with_seed)
    /// for a different game.
    pub fn new<I, S>(player_names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let player_names: Vec<String> = player_names.into_iter().map(Into::into).collect();

        if player_names.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if player_names.len() > 255 {
            return Err(ConfigError::TooManyPlayers {
                count: player_names.len(),
            });
        }
        for (i, name) in player_names.iter().enumerate() {
            if name.is_empty() {
                return Err(ConfigError::EmptyPlayerName);
            }
            if player_names[..i].contains(name) {
                return Err(ConfigError::DuplicatePlayerName { name: name.clone() });
            }
        }

        Ok(Self {
            player_names,
            seed: 0,
        })
    }

    /// Set the RNG seed. Identical configs with identical seeds replay
    /// identical dice.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Player names in seating order.
    #[must_use]
    pub fn player_names(&self) -> &[String] {
        &self.player_names
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// The RNG seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
