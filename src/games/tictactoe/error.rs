//! Error types for the tic-tac-toe core.

use super::action::Move;
use super::position::Position;
use super::types::Player;
use derive_more::{Display, Error};

/// Contract violations raised by the game core.
///
/// None of these are recoverable game conditions: each one means a caller
/// broke a precondition, so they are returned loudly instead of ignored.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A player tag was not one of `circle` or `cross`.
    #[display("Unknown player shape {:?}, must be one of: circle, cross", _0)]
    InvalidShapeOrPlayer(#[error(not(source))] String),

    /// The position is already occupied.
    #[display("Position {} is already occupied", _0)]
    InvalidMove(#[error(not(source))] Position),

    /// A player moved out of turn. Circle moves first and the players
    /// alternate, so neither may hold more marks than that order allows.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(#[error(not(source))] Player),

    /// A move was applied to a game that had already ended.
    #[display("Move {} played after the game ended", _0)]
    MoveAfterGameOver(#[error(not(source))] Move),

    /// Text that does not name a position 1-9.
    #[display("Invalid position {:?}, expected a number 1-9", _0)]
    InvalidPosition(#[error(not(source))] String),

    /// The move selector was asked to move on a full board.
    #[display("Move selector called with no empty positions")]
    SelectorPreconditionViolated,
}
