//! Error types for configuration and engine operations.

use thiserror::Error;

/// Invalid game configuration. Construction never yields a partial engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The game needs at least two players.
    #[error("A minimum of two players are required to play this game (got {0})")]
    TooFewPlayers(usize),
    /// Player ids are a single byte.
    #[error("At most 255 players are supported (got {0})")]
    TooManyPlayers(usize),
    /// At least one die is required.
    #[error("Dice count must be at least 1")]
    NoDice,
    /// Dice are labelled `a` to `z`.
    #[error("At most 26 dice are supported (got {0})")]
    TooManyDice(usize),
    /// Each turn needs at least one roll.
    #[error("Max rolls per turn must be at least 1")]
    NoRolls,
}

/// Engine operation called outside its precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Turn operations need a current player, set by `start_new_game`.
    #[error("No game in progress: call start_new_game first")]
    NoGameInProgress,
}
