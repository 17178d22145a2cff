//! Game configuration.
//!
//! `GameConfig` is a small builder: start from the defaults (2 players,
//! 5 dice, 3 rolls per turn) and override what the table wants.
//! `validate()` is called by the engine before anything is allocated.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Faces on every die in the game.
pub const DIE_SIDES: u8 = 6;

/// Highest player count (player ids are `u8`).
pub const MAX_PLAYERS: usize = 255;

/// Highest dice count (dice are labelled `a` to `z`).
pub const MAX_DICE: usize = 26;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (2-255).
    pub player_count: usize,

    /// Number of dice rolled each turn (1-26).
    pub dice_count: usize,

    /// Nominal roll cap per turn.
    pub max_rolls: u32,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            dice_count: 5,
            max_rolls: 3,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the default table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of players.
    #[must_use]
    pub fn with_players(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set the number of dice.
    #[must_use]
    pub fn with_dice(mut self, count: usize) -> Self {
        self.dice_count = count;
        self
    }

    /// Set the roll cap per turn.
    #[must_use]
    pub fn with_max_rolls(mut self, rolls: u32) -> Self {
        self.max_rolls = rolls;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count < 2 {
            return Err(ConfigError::TooFewPlayers(self.player_count));
        }
        if self.player_count > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers(self.player_count));
        }
        if self.dice_count == 0 {
            return Err(ConfigError::NoDice);
        }
        if self.dice_count > MAX_DICE {
            return Err(ConfigError::TooManyDice(self.dice_count));
        }
        if self.max_rolls == 0 {
            return Err(ConfigError::NoRolls);
        }
        Ok(())
    }
}
