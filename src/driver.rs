//! Console round driver.
//!
//! Reads player decisions line by line and renders the engine's state.
//! Generic over the reader and writer so sessions can be scripted.
//!
//! Per turn, after every roll the ship, captain and crew faces are
//! auto-held, then the player answers one prompt:
//! - letters (`ab`): hold those dice and roll again
//! - `s`: hold everything and stand
//! - empty line: roll again

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{info, warn};

use crate::core::EngineError;
use crate::dice::DieId;
use crate::engine::{report, DiceGame};
use crate::rules::AUTO_HOLD_FACES;

/// Failure while driving a session.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Whether the session continues after a turn or game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Runs repeated games over a console.
pub struct RoundDriver<R, W> {
    game: DiceGame,
    input: R,
    output: W,
    games_played: u32,
}

impl<R: BufRead, W: Write> RoundDriver<R, W> {
    pub fn new(game: DiceGame, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
            games_played: 0,
        }
    }

    #[must_use]
    pub fn game(&self) -> &DiceGame {
        &self.game
    }

    /// Games started this session.
    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Consume the driver, returning the engine and the writer.
    pub fn into_parts(self) -> (DiceGame, W) {
        (self.game, self.output)
    }

    /// Play games until the players decline another or input ends,
    /// then announce the overall winner.
    pub fn run(&mut self) -> Result<(), DriverError> {
        while self.play_game()? == Flow::Continue {
            if !self.ask_play_again()? {
                break;
            }
        }

        let banner = report::winner_banner(self.game.final_winner());
        writeln!(self.output, "{banner}")?;
        info!(games = self.games_played, "session finished");
        Ok(())
    }

    fn play_game(&mut self) -> Result<Flow, DriverError> {
        self.games_played += 1;
        writeln!(self.output, "Game #{}", self.games_played)?;
        self.game.start_new_game();

        loop {
            if self.play_turn()? == Flow::Quit {
                return Ok(Flow::Quit);
            }
            if !self.game.next_player()? {
                break;
            }
        }

        let summary = self.game.game_results();
        writeln!(self.output, "{} wins game #{}", summary.winner, self.games_played)?;
        writeln!(self.output, "{summary}")?;
        Ok(Flow::Continue)
    }

    fn play_turn(&mut self) -> Result<Flow, DriverError> {
        self.game.reset_dice();
        writeln!(self.output, "Player {}:", self.game.current_player_number()?)?;

        while self.game.current_player_can_roll()? {
            self.game.roll_dice()?;

            // Every face is tried, even after a miss
            let found: Vec<bool> = AUTO_HOLD_FACES
                .iter()
                .map(|&f| self.game.auto_hold(f))
                .collect();
            writeln!(self.output, "{}", self.game.dice_results())?;
            if found.iter().all(|&f| f) {
                writeln!(self.output, "6, 5, and 4 found")?;
            }

            if !self.game.current_player_can_roll()? {
                break;
            }

            write!(self.output, "Hold dice (letters), s to stand, enter to roll> ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Quit);
            };

            let choice = line.trim().to_ascii_lowercase();
            if choice == "s" {
                self.game.hold_all();
                break;
            }
            for label in choice.chars().filter(|c| !c.is_whitespace() && *c != ',') {
                if !self.game.player_hold(DieId(label)) {
                    warn!(%label, "no such die");
                    writeln!(self.output, "No die '{label}'")?;
                }
            }
        }

        let outcome = self.game.score_current_player()?;
        writeln!(
            self.output,
            "Player {} scored {} (total {})",
            self.game.current_player_number()?,
            outcome.points(),
            self.game.current_player_score()?
        )?;
        Ok(Flow::Continue)
    }

    fn ask_play_again(&mut self) -> Result<bool, DriverError> {
        write!(self.output, "Play again? (Y/N)> ")?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|line| line.trim().eq_ignore_ascii_case("y")))
    }

    /// Next input line, `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, DriverError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
