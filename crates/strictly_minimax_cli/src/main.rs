//! Strictly Minimax - command-line driver.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use strictly_minimax::{Engine, Scoring};
use strictly_minimax_cli::cli::{Cli, Command};
use strictly_minimax_cli::{
    Difficulty, EnginePlayer, GameConfig, HumanPlayer, Session, write_analysis,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            difficulty,
            scoring,
            engine_first,
        } => run_play(config, difficulty, scoring, engine_first),
        Command::Analyze {
            board,
            depth,
            minimize,
            scoring,
        } => {
            let outcome = Engine::with_scoring(scoring).search(board, !minimize, depth)?;
            write_analysis(&mut io::stdout(), &board, &outcome)?;
            Ok(())
        }
    }
}

/// Run an interactive game
#[instrument]
fn run_play(
    config: Option<std::path::PathBuf>,
    difficulty: Option<Difficulty>,
    scoring: Option<Scoring>,
    engine_first: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    }
    .with_overrides(difficulty, scoring, engine_first);

    info!(
        difficulty = %config.difficulty(),
        depth = config.depth(),
        scoring = %config.scoring(),
        "Starting interactive game"
    );

    let stdin = io::stdin();
    let mut human = HumanPlayer::new("human", stdin.lock(), io::stdout());
    let mut engine = EnginePlayer::new(
        "engine".to_string(),
        Engine::with_scoring(*config.scoring()),
        config.depth(),
    );

    let mut session = Session::new(*config.human_first());
    session.play(&mut human, &mut engine, &mut io::stdout())?;
    Ok(())
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
