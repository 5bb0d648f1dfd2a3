//! Circle Cross - terminal front end.
//!
//! A thin presentation layer: renders the board and the core's events,
//! and forwards typed cell numbers to the turn controller.

mod cli;

use anyhow::Result;
use circle_cross::{
    Board, GameConfig, GameError, GameEvent, HeuristicSelector, Move, Position, PositionSet,
    Submission, TurnController, rules,
};
use clap::Parser;
use cli::{Cli, Command};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            delay_ms,
            seed,
        } => {
            let config = GameConfig::load_or_default(&config)?.with_overrides(delay_ms, seed);
            initialize_tracing(config.log_filter());
            run_play(config).await
        }
        Command::Suggest {
            circle,
            cross,
            seed,
            json,
        } => {
            initialize_tracing("warn");
            run_suggest(&circle, &cross, seed, json)
        }
        Command::Replay { moves } => {
            initialize_tracing("warn");
            run_replay(moves)
        }
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all, fields(seed = ?config.seed()))]
async fn run_play(config: GameConfig) -> Result<()> {
    let selector = HeuristicSelector::from_seed(*config.seed());
    let (mut game, mut events) = TurnController::with_channel(selector);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("You are circle (O). Enter a cell number 1-9, or q to quit.\n");
    println!("{}\n", game.board());

    while !game.is_over() {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("Input closed");
            break;
        };
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            info!("Player quit");
            break;
        }

        let position = match input.parse::<Position>() {
            Ok(position) => position,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match game.submit_human_move(position) {
            Ok(Submission::Accepted(_)) => {}
            Ok(Submission::Ignored(reason)) => {
                println!("Move ignored: {}", reason);
                continue;
            }
            Err(e @ GameError::InvalidMove(_)) => {
                println!("{}", e);
                continue;
            }
            Err(e) => return Err(e.into()),
        }
        render_events(&mut events);

        game.respond_after(config.computer_delay()).await?;
        render_events(&mut events);
        println!("{}\n", game.board());
    }

    Ok(())
}

/// Prints every pending event from the controller.
fn render_events(events: &mut mpsc::UnboundedReceiver<GameEvent>) {
    while let Ok(event) = events.try_recv() {
        match event {
            GameEvent::MovePlayed(mov) => {
                println!("{} played {}", mov.player(), mov.position().label());
            }
            GameEvent::GameOver(outcome) => println!("\n{}", outcome),
        }
    }
}

/// Print the computer's choice for a given position
#[instrument]
fn run_suggest(circle: &[u8], cross: &[u8], seed: Option<u64>, json: bool) -> Result<()> {
    let board = Board::from_sets(to_set(circle)?, to_set(cross)?)?;
    let outcome = rules::outcome(&board);
    if outcome.is_terminal() {
        anyhow::bail!("Nothing to suggest, the game is over ({})", outcome);
    }
    let selection = HeuristicSelector::from_seed(seed).select(&board)?;

    if json {
        println!("{}", serde_json::to_string(&selection)?);
    } else {
        println!("{}\n", board);
        println!(
            "cross plays {} ({})",
            selection.position(),
            selection.reason()
        );
    }
    Ok(())
}

fn to_set(numbers: &[u8]) -> Result<PositionSet, GameError> {
    numbers
        .iter()
        .map(|&n| Position::from_number(n).ok_or_else(|| GameError::InvalidPosition(n.to_string())))
        .collect()
}

/// Apply a move sequence and print the final board and outcome
#[instrument(skip(moves), fields(count = moves.len()))]
fn run_replay(moves: Vec<Move>) -> Result<()> {
    let (board, outcome) = Board::replay(&moves)?;

    println!("{}\n", board);
    let line = outcome
        .winner()
        .and_then(|winner| rules::winning_line(board.positions(winner)));
    if let Some(line) = line {
        let cells: Vec<String> = line.iter().map(|p| p.to_string()).collect();
        println!("Winning line: {}", cells.join("-"));
    }
    println!("{}", outcome);
    Ok(())
}

fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
