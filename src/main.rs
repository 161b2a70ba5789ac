//! ChezziBot games - terminal front end
//!
//! Starts one game per invocation and plays it over stdin/stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, ensure};
use chezzi_games::adapter::{self, Finish};
use chezzi_games::{
    AnyGame, BotConfig, Glyph, Hand, LevelRegistry, Participant, RockPaperScissors, RuleSet,
    SeatError, Seats, SessionManager, Sokoban, TicTacToe, Tile, Variant,
};
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Channel the terminal session is registered under.
const TERMINAL_CHANNEL: &str = "terminal";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = BotConfig::load_or_default(&cli.config)?;
    if let Some(path) = cli.levels.clone() {
        config = config.with_levels_path(path);
    }
    if let Some(secs) = cli.timeout {
        ensure!(secs > 0, "--timeout must be greater than zero");
        config = config.with_idle_timeout_secs(secs);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Tictactoe { opponent, player } => {
            play_tictactoe(&config, Variant::Classic, &opponent, &player).await
        }
        Command::Tictactoe5 { opponent, player } => {
            play_tictactoe(&config, Variant::FourInARow, &opponent, &player).await
        }
        Command::Sokoban { player } => play_sokoban(&config, &player).await,
        Command::Rps { opponent, player } => play_rps(&config, opponent.as_deref(), &player).await,
        Command::Levels => list_levels(&config),
    }
}

fn member(name: &str) -> Participant {
    Participant::member(name.to_lowercase(), name)
}

/// Loads the configured level file, or the built-in levels.
#[instrument(skip(config))]
fn load_registry(config: &BotConfig) -> Result<Arc<LevelRegistry>> {
    let registry = match config.levels_path() {
        Some(path) => LevelRegistry::from_file(path)?,
        None => LevelRegistry::builtin()?,
    };
    Ok(Arc::new(registry))
}

/// Seats the players, or reports why they cannot play.
fn seat(seats: Result<Seats, SeatError>) -> Option<Seats> {
    match seats {
        Ok(seats) => Some(seats),
        Err(e) => {
            println!("❌ {}", e);
            None
        }
    }
}

/// Registers the game and hands the terminal to the adapter.
async fn play(config: &BotConfig, seats: Seats, game: impl Into<AnyGame> + RuleSet) -> Result<()> {
    let mut manager = SessionManager::new();
    manager.create(TERMINAL_CHANNEL, seats, game)?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let finish = adapter::run(
        &mut manager,
        TERMINAL_CHANNEL,
        config.idle_timeout(),
        stdin,
        &mut stdout,
    )
    .await?;

    match finish {
        Finish::Decided(result) => info!(%result, "Game over"),
        other => info!(?other, "Game ended early"),
    }
    Ok(())
}

/// The challenged opponent takes seat 0 and moves first as X.
#[instrument(skip(config))]
async fn play_tictactoe(
    config: &BotConfig,
    variant: Variant,
    opponent: &str,
    player: &str,
) -> Result<()> {
    let Some(seats) = seat(Seats::pair(member(opponent), member(player))) else {
        return Ok(());
    };
    play(config, seats, TicTacToe::new(variant)).await
}

#[instrument(skip(config))]
async fn play_sokoban(config: &BotConfig, player: &str) -> Result<()> {
    let registry = load_registry(config)?;
    let Some(seats) = seat(Seats::solo(member(player), config.bot_name().as_str())) else {
        return Ok(());
    };
    play(config, seats, Sokoban::new(registry)?).await
}

/// Without an opponent the bot plays seat 1 with a hand drawn up front.
#[instrument(skip(config))]
async fn play_rps(config: &BotConfig, opponent: Option<&str>, player: &str) -> Result<()> {
    let (seats, round) = match opponent {
        Some(opponent) => (
            Seats::pair(member(player), member(opponent)),
            RockPaperScissors::new(),
        ),
        None => (
            Seats::solo(member(player), config.bot_name().as_str()),
            RockPaperScissors::against_engine(Hand::random(&mut rand::rng())),
        ),
    };
    let Some(seats) = seat(seats) else {
        return Ok(());
    };
    play(config, seats, round).await
}

/// Validates the level file and prints every level.
fn list_levels(config: &BotConfig) -> Result<()> {
    let registry = load_registry(config)?;
    println!("{} levels", registry.len());
    for (index, level) in registry.iter().enumerate() {
        let board = level.board();
        println!(
            "\nLevel {}: {}×{}, {} boxes, {} targets",
            index + 1,
            board.cols(),
            board.rows(),
            level.box_count(),
            level.targets().len()
        );
        println!("{}", board.render());
    }
    let legend = Tile::iter()
        .map(|tile| format!("{} {}", tile.glyph(), tile))
        .collect::<Vec<_>>()
        .join("  ");
    println!("\n{}", legend);
    Ok(())
}
