//! Dice: identifiers, faces, and the held/free state.
//!
//! A `Die` is only mutated through the engine. Rolling takes the
//! engine's `GameRng` so a seeded game replays the same faces.

pub mod die;

pub use die::{Die, DieId};
