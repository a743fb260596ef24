//! Command-line interface for strictly_minimax.

use crate::config::Difficulty;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_minimax::{Board, Scoring};

/// Strictly Minimax - tic-tac-toe against an exhaustive search
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Play tic-tac-toe against a minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Engine strength (low, medium, high)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Scoring policy (trap_bonus, plain)
        #[arg(long)]
        scoring: Option<Scoring>,

        /// Let the engine make the first move
        #[arg(long)]
        engine_first: bool,
    },

    /// Search a single position and print the result
    Analyze {
        /// Board rows of O, X and '.', separated by '/' (e.g. "OO./XX./...")
        #[arg(short, long)]
        board: Board,

        /// Search depth in plies
        #[arg(long, default_value_t = 9)]
        depth: u32,

        /// Search for the opponent (X) instead of the engine (O)
        #[arg(long)]
        minimize: bool,

        /// Scoring policy (trap_bonus, plain)
        #[arg(long, default_value_t = Scoring::TrapBonus)]
        scoring: Scoring,
    },
}
