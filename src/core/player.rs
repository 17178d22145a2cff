//! Player identification and per-player tallies.
//!
//! ## PlayerId
//!
//! Seat number, 1-based: the first player at the table is `PlayerId(1)`.
//!
//! ## Player
//!
//! Per-turn state (score, rolls used) plus cumulative wins and losses.
//! Turn state is cleared at the start of every game; the tallies only
//! by an explicit reset.

use serde::{Deserialize, Serialize};

/// Player identifier. Numbers are 1-based, matching seat order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a player ID from a 1-based seat number.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// The 1-based player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Position in the roster (0-based).
    ///
    /// # Panics
    ///
    /// Panics for `PlayerId(0)`, which names no seat.
    #[must_use]
    pub const fn index(self) -> usize {
        assert!(self.0 > 0, "player numbers start at 1");
        self.0 as usize - 1
    }

    /// Iterate over all player IDs for a table of `player_count` players.
    ///
    /// # Panics
    ///
    /// Panics if `player_count` exceeds 255.
    ///
    /// ```
    /// use ship_captain_crew::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        assert!(player_count <= 255, "At most 255 players supported");
        (1..=player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    score: u32,
    rolls_used: u32,
    wins: u32,
    losses: u32,
}

impl Player {
    /// Create a fresh player with zeroed state.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            score: 0,
            rolls_used: 0,
            wins: 0,
            losses: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The 1-based player number.
    #[must_use]
    pub fn player_number(&self) -> u8 {
        self.id.number()
    }

    /// Score for the current game.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Overwrite the score for the current game.
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    /// Rolls taken this turn.
    #[must_use]
    pub fn rolls_used(&self) -> u32 {
        self.rolls_used
    }

    #[must_use]
    pub fn wins(&self) -> u32 {
        self.wins
    }

    #[must_use]
    pub fn losses(&self) -> u32 {
        self.losses
    }

    /// Count one roll. The roll cap is enforced by the engine, not here.
    pub fn roll(&mut self) {
        self.rolls_used += 1;
    }

    pub fn add_win(&mut self) {
        self.wins += 1;
    }

    pub fn add_loss(&mut self) {
        self.losses += 1;
    }

    /// Clear score and rolls used. Wins and losses are kept.
    pub fn reset_turn_state(&mut self) {
        self.score = 0;
        self.rolls_used = 0;
    }

    /// Clear the cumulative tallies as well as the turn state.
    pub fn reset_tallies(&mut self) {
        self.reset_turn_state();
        self.wins = 0;
        self.losses = 0;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: score {}, wins {}, losses {}",
            self.id, self.score, self.wins, self.losses
        )
    }
}
