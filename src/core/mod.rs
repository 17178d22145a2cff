//! Core engine types: players, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, DIE_SIDES, MAX_DICE, MAX_PLAYERS};
pub use error::{ConfigError, EngineError};
pub use player::{Player, PlayerId};
pub use rng::GameRng;
