//! Noughts - terminal tic-tac-toe

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::cli::{Cli, Command, ModeArg};
use noughts::{Console, GameConfig, Mode, Orchestrator, banner, pick_first, self_play, setup};
use noughts_core::Game;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

/// Largest board the exhaustive search finishes on in reasonable time.
const SEARCH_LIMIT: usize = 3;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Play { mode, size, first } => run_play(config, mode, size, first),
        Command::Solve { size } => run_solve(config, size),
    }
}

fn apply_size(config: GameConfig, size: Option<usize>) -> Result<GameConfig> {
    match size {
        Some(size) => Ok(config.with_size(size)?),
        None => Ok(config),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(
    config: GameConfig,
    mode: Option<ModeArg>,
    size: Option<usize>,
    first: Option<u8>,
) -> Result<()> {
    let config = apply_size(config, size)?;
    let stdin = std::io::stdin();
    let mut term = Console::new(stdin.lock(), std::io::stdout());

    banner::show_title(&mut term)?;
    let mode = match mode {
        Some(ModeArg::Pvp) => Mode::PlayerVsPlayer,
        Some(ModeArg::Pvc) => Mode::PlayerVsComputer,
        None => setup::choose_mode(&mut term)?,
    };
    if mode == Mode::PlayerVsComputer && *config.size() > SEARCH_LIMIT {
        warn!(
            size = config.size(),
            "Computer search is exhaustive and will be very slow on this board"
        );
    }

    let players = setup::create_players(&mut term, &config, mode)?;
    let game = Game::new(players, *config.size())?;
    let seat = pick_first(first, game.players().len());

    info!(%mode, seat, "Starting game");
    let mut orchestrator = Orchestrator::new(game, seat);
    let result = orchestrator.run(&mut term)?;
    info!(?result, "Game over");
    Ok(())
}

/// Let the search play both seats
#[instrument(skip(config))]
fn run_solve(config: GameConfig, size: Option<usize>) -> Result<()> {
    let config = apply_size(config, size)?;
    if *config.size() > SEARCH_LIMIT {
        warn!(size = config.size(), "Exhaustive search on a large board");
    }
    let report = self_play(&config)?;
    println!("{report}");
    Ok(())
}
