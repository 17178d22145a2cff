//! Console entry point for Ship, Captain and Crew.

use std::io;

use anyhow::Result;
use clap::Parser;
use ship_captain_crew::{DiceGame, GameConfig, RoundDriver};

/// Play Ship, Captain and Crew at the terminal
#[derive(Parser)]
#[command(name = "ship-captain-crew")]
#[command(about = "Ship, Captain and Crew dice game", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of players (at least 2)
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Number of dice rolled each turn
    #[arg(short, long, default_value_t = 5)]
    dice: usize,

    /// Rolls per turn before the turn can close
    #[arg(short, long, default_value_t = 3)]
    max_rolls: u32,

    /// Seed for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let config = GameConfig::new()
            .with_players(self.players)
            .with_dice(self.dice)
            .with_max_rolls(self.max_rolls);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let game = DiceGame::from_config(&cli.config())?;
    tracing::info!(seed = game.seed(), "starting session");

    let stdin = io::stdin();
    let mut driver = RoundDriver::new(game, stdin.lock(), io::stdout());
    driver.run()?;
    Ok(())
}
