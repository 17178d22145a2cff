//! Game engine: turn sequencing, the hold/roll state machine, scoring.
//!
//! `DiceGame` is driven by a single caller in strict sequence:
//! `start_new_game`, then per player roll / hold until
//! `current_player_can_roll` is false, `score_current_player`,
//! `next_player`; after the last player, `game_results`.

pub mod game;
pub mod report;

pub use game::{DiceGame, TurnPhase};
