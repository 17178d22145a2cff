//! The dice game engine.

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::{
    ConfigError, EngineError, GameConfig, GameRng, Player, PlayerId, DIE_SIDES,
};
use crate::dice::{Die, DieId};
use crate::rules::{self, RoundSummary, ScoreOutcome};

/// Where the current player is within their turn.
///
/// ```text
/// AwaitingRoll --roll_dice--> HoldSelection --roll_dice--> HoldSelection
///                                   |
///                                   +--score_current_player--> Scored
/// ```
///
/// Rolling itself happens inside `roll_dice`. Phases are tracked for
/// callers; no operation is rejected because of the phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// Turn started, no dice rolled yet.
    AwaitingRoll,
    /// Dice rolled, player may hold dice or roll again.
    HoldSelection,
    /// Turn scored.
    Scored,
}

/// Ship, captain and crew engine.
///
/// Owns the roster and the dice. Callers drive it through turn and
/// round operations; dice and players are never handed out mutably.
#[derive(Clone, Debug)]
pub struct DiceGame {
    players: Vec<Player>,
    dice: SmallVec<[Die; 8]>,
    max_rolls: u32,
    /// Roster index of the current player. `None` until a game starts.
    current: Option<usize>,
    phase: TurnPhase,
    rng: GameRng,
}

impl DiceGame {
    /// Create a game with `player_count` players, `dice_count` six-sided
    /// dice and a nominal cap of `max_rolls` per turn.
    pub fn new(player_count: usize, dice_count: usize, max_rolls: u32) -> Result<Self, ConfigError> {
        Self::from_config(
            &GameConfig::new()
                .with_players(player_count)
                .with_dice(dice_count)
                .with_max_rolls(max_rolls),
        )
    }

    /// Create a game from a configuration, seeding from `config.seed`
    /// or from entropy.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create a game rolling with the given RNG.
    pub fn with_rng(config: &GameConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        // One distinct record per seat
        let mut players = Vec::with_capacity(config.player_count);
        for id in PlayerId::all(config.player_count) {
            players.push(Player::new(id));
        }

        let mut dice = SmallVec::with_capacity(config.dice_count);
        for label in ('a'..='z').take(config.dice_count) {
            dice.push(Die::new(DieId(label), DIE_SIDES));
        }

        debug!(
            players = config.player_count,
            dice = config.dice_count,
            max_rolls = config.max_rolls,
            seed = rng.seed(),
            "created dice game"
        );

        Ok(Self {
            players,
            dice,
            max_rolls: config.max_rolls,
            current: None,
            phase: TurnPhase::AwaitingRoll,
            rng,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    #[must_use]
    pub fn max_rolls(&self) -> u32 {
        self.max_rolls
    }

    #[must_use]
    pub fn turn_phase(&self) -> TurnPhase {
        self.phase
    }

    /// Seed of the RNG rolling the dice.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    fn current_index(&self) -> Result<usize, EngineError> {
        self.current.ok_or(EngineError::NoGameInProgress)
    }

    pub fn current_player(&self) -> Result<&Player, EngineError> {
        Ok(&self.players[self.current_index()?])
    }

    fn current_player_mut(&mut self) -> Result<&mut Player, EngineError> {
        let index = self.current_index()?;
        Ok(&mut self.players[index])
    }

    pub fn current_player_number(&self) -> Result<u8, EngineError> {
        Ok(self.current_player()?.player_number())
    }

    pub fn current_player_score(&self) -> Result<u32, EngineError> {
        Ok(self.current_player()?.score())
    }

    // === Game lifecycle ===

    /// Rewind to the first player and clear every player's turn state.
    ///
    /// Win/loss tallies and dice are left alone; see `reset_dice`.
    pub fn start_new_game(&mut self) {
        self.current = Some(0);
        self.phase = TurnPhase::AwaitingRoll;
        for player in &mut self.players {
            player.reset_turn_state();
        }
        info!(players = self.players.len(), "new game started");
    }

    /// Free every die and clear its face.
    pub fn reset_dice(&mut self) {
        for die in &mut self.dice {
            die.reset();
        }
    }

    /// Clear every player's score and rolls used. Tallies are kept.
    pub fn reset_players(&mut self) {
        for player in &mut self.players {
            player.reset_turn_state();
        }
    }

    /// Clear every player's wins and losses along with the turn state.
    pub fn reset_tallies(&mut self) {
        for player in &mut self.players {
            player.reset_tallies();
        }
    }

    // === Turn lifecycle ===

    /// Advance to the next seat.
    ///
    /// Returns `Ok(false)` and stays put when the last player is current.
    /// Never wraps; start a new game to return to the first player.
    pub fn next_player(&mut self) -> Result<bool, EngineError> {
        let index = self.current_index()?;
        if index + 1 < self.players.len() {
            self.current = Some(index + 1);
            self.phase = TurnPhase::AwaitingRoll;
            debug!(player = index + 2, "next player");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Whether the current player may roll again.
    ///
    /// Rolling is allowed while under the roll cap, and also past it for
    /// as long as any die is free. The turn only closes once every die
    /// is held and the cap is reached.
    pub fn current_player_can_roll(&self) -> Result<bool, EngineError> {
        let player = self.current_player()?;
        Ok(player.rolls_used() < self.max_rolls || !self.all_dice_held())
    }

    /// Count a roll for the current player and roll every free die.
    pub fn roll_dice(&mut self) -> Result<(), EngineError> {
        self.current_player_mut()?.roll();
        for die in &mut self.dice {
            die.roll(&mut self.rng);
        }
        self.phase = TurnPhase::HoldSelection;

        if tracing::enabled!(tracing::Level::DEBUG) {
            let faces: Vec<Option<u8>> = self.dice.iter().map(Die::face_value).collect();
            debug!(player = self.current_player_number()?, ?faces, "rolled dice");
        }
        Ok(())
    }

    /// Hold one free die showing `face`.
    ///
    /// Returns `false` if no die shows `face`. Returns `true` if one does,
    /// holding at most one die (the first free match); when every match
    /// is already held nothing changes.
    pub fn auto_hold(&mut self, face: u8) -> bool {
        if !self.dice.iter().any(|d| d.shows(face)) {
            return false;
        }
        if let Some(die) = self.dice.iter_mut().find(|d| d.shows(face) && !d.is_held()) {
            die.hold();
            debug!(die = %die.id(), face, "auto-held die");
        }
        true
    }

    /// Whether a held die shows `face`.
    #[must_use]
    pub fn is_holding_die(&self, face: u8) -> bool {
        rules::is_holding(&self.dice, face)
    }

    /// Hold the die labelled `id`. Returns `false` (and does nothing) if
    /// there is no such die.
    pub fn player_hold(&mut self, id: DieId) -> bool {
        match self.dice.iter_mut().find(|d| d.id() == id) {
            Some(die) => {
                die.hold();
                debug!(die = %id, "player held die");
                true
            }
            None => false,
        }
    }

    /// Hold every free die, closing the turn once the cap is reached.
    pub fn hold_all(&mut self) {
        for die in &mut self.dice {
            die.hold();
        }
    }

    fn all_dice_held(&self) -> bool {
        self.dice.iter().all(Die::is_held)
    }

    // === Scoring ===

    /// Add this turn's points to the current player's score.
    ///
    /// Accumulates: call exactly once per completed turn.
    pub fn score_current_player(&mut self) -> Result<ScoreOutcome, EngineError> {
        let outcome = rules::score_dice(&self.dice);
        let player = self.current_player_mut()?;
        player.set_score(player.score() + outcome.points());
        let (id, score) = (player.id(), player.score());
        self.phase = TurnPhase::Scored;

        info!(
            player = id.number(),
            points = outcome.points(),
            score,
            qualified = outcome.qualified(),
            "scored turn"
        );
        Ok(outcome)
    }

    /// Close the round: the top scorer (earliest seat on ties) gets a
    /// win, everyone else a loss.
    pub fn game_results(&mut self) -> RoundSummary {
        // Constructed rosters always hold at least two players
        let winner = rules::round_winner(&self.players).unwrap_or(0);
        for (i, player) in self.players.iter_mut().enumerate() {
            if i == winner {
                player.add_win();
            } else {
                player.add_loss();
            }
        }

        let winner = self.players[winner].id();
        info!(winner = winner.number(), "round finished");
        RoundSummary {
            winner,
            standings: self.players.clone(),
        }
    }

    /// Player with the most wins, earliest seat on ties.
    #[must_use]
    pub fn final_winner(&self) -> &Player {
        let index = rules::session_winner(&self.players).unwrap_or(0);
        &self.players[index]
    }

    // === Reporting ===

    /// One line per die, e.g. `a: 6 [held]`.
    #[must_use]
    pub fn dice_results(&self) -> String {
        super::report::dice_lines(&self.dice)
    }
}
