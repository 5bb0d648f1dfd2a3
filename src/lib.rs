//! Circle Cross - tic-tac-toe against a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **Board**: which cells each player holds
//! - **Rules**: winning-line and draw detection
//! - **Selector**: the computer's win / block / center / random heuristic
//! - **TurnController**: sequences human and computer moves and emits events
//!
//! # Example
//!
//! ```
//! use circle_cross::{GameOutcome, HeuristicSelector, Position, Submission, TurnController};
//!
//! let (mut game, _events) = TurnController::with_channel(HeuristicSelector::with_seed(0));
//! let result = game.play_turn(Position::TopLeft).unwrap();
//! assert_eq!(result, Submission::Accepted(GameOutcome::Ongoing));
//! assert!(!game.board().is_empty(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameError, GameEvent, GameOutcome, HeuristicSelector, IgnoreReason, Move, Player,
    Position, PositionSet, Selection, SelectionReason, Submission, TurnController, TurnPhase,
    select_move,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules;
