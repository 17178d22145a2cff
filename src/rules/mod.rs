//! Game rules: ship/captain/crew scoring and round results.
//!
//! These are pure functions over dice and players. The engine calls
//! into them and applies the outcome to its own state.

pub mod results;
pub mod scoring;

pub use results::{round_winner, session_winner, RoundSummary};
pub use scoring::{is_holding, score_dice, ScoreOutcome, AUTO_HOLD_FACES, CAPTAIN, CREW, SHIP};
