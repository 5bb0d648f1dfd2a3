//! Command-line interface for circle_cross.

use circle_cross::Move;
use clap::{Parser, Subcommand};

/// Circle Cross - tic-tac-toe against a heuristic computer
#[derive(Parser, Debug)]
#[command(name = "circle_cross")]
#[command(about = "Play tic-tac-toe against a heuristic computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal (you are circle)
    Play {
        /// Path to game config file
        #[arg(short, long, default_value = "circle_cross.toml")]
        config: std::path::PathBuf,

        /// Pause before the computer replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the computer's random moves
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the computer's choice for a given position
    Suggest {
        /// Cells held by circle (comma-separated, 1-9)
        #[arg(long, value_delimiter = ',')]
        circle: Vec<u8>,

        /// Cells held by cross (comma-separated, 1-9)
        #[arg(long, value_delimiter = ',')]
        cross: Vec<u8>,

        /// Seed for the random fallback
        #[arg(long)]
        seed: Option<u64>,

        /// Print the selection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a sequence of moves (e.g. `circle:1 cross:5`) and print the result
    Replay {
        /// Moves in play order
        #[arg(required = true)]
        moves: Vec<Move>,
    },
}
