//! # ship-captain-crew
//!
//! Turn-based engine for the Ship, Captain and Crew dice game.
//!
//! Each player rolls a set of dice up to a roll cap per turn, holding
//! dice between rolls. A 6 (ship), 5 (captain) and 4 (crew) must be
//! held to score; the score is the sum of the remaining dice (cargo).
//! After every player has taken a turn the top scorer wins the round.
//!
//! ## Design Principles
//!
//! 1. **N-Player**: Any table of 2-255 players, each a distinct record.
//!
//! 2. **Deterministic**: Dice roll from a seeded `GameRng`, so a seed
//!    replays a whole session.
//!
//! 3. **Engine owns state**: Dice and players are only mutated through
//!    `DiceGame` operations.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `dice`: Dice and their held/free state
//! - `rules`: Scoring and round results
//! - `engine`: `DiceGame`, the turn state machine
//! - `driver`: Console read-eval loop over the engine

pub mod core;
pub mod dice;
pub mod driver;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{ConfigError, EngineError, GameConfig, GameRng, Player, PlayerId};

pub use crate::dice::{Die, DieId};

pub use crate::rules::{RoundSummary, ScoreOutcome, CAPTAIN, CREW, SHIP};

pub use crate::engine::{DiceGame, TurnPhase};

pub use crate::driver::{DriverError, RoundDriver};
