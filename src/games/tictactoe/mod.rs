//! Tic-tac-toe: circle (human) against cross (heuristic computer).

mod action;
mod controller;
mod error;
mod phases;
mod position;
pub mod rules;
mod selector;
mod types;

pub use action::Move;
pub use controller::{GameEvent, IgnoreReason, Submission, TurnController};
pub use error::GameError;
pub use phases::{GameOutcome, TurnPhase};
pub use position::{Position, PositionSet};
pub use selector::{HeuristicSelector, Selection, SelectionReason, select_move};
pub use types::{Board, Player};
