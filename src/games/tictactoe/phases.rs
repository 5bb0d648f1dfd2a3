//! Outcome and turn-phase types.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Outcome of the game after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No winner yet and the board still has room.
    Ongoing,
    /// Player completed a line.
    Won(Player),
    /// Board is full with no line for either player.
    Draw,
}

impl GameOutcome {
    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Won(player) => Some(*player),
            GameOutcome::Ongoing | GameOutcome::Draw => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "Game in progress"),
            GameOutcome::Won(player) => write!(f, "{} player won!", player),
            GameOutcome::Draw => write!(f, "Tied!"),
        }
    }
}

/// Phase of the turn state machine.
///
/// ```text
/// AwaitingHumanMove -> EvaluatingHumanMove -> ComputerMoving
///        ^                     |                    |
///        |                     v                    v
///        +------------- GameOver <- EvaluatingComputerMove
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum TurnPhase {
    /// Waiting for the human to pick a cell.
    AwaitingHumanMove,
    /// Checking whether the human's move ended the game.
    EvaluatingHumanMove,
    /// Computer turn pending; human input is throttled.
    ComputerMoving,
    /// Checking whether the computer's move ended the game.
    EvaluatingComputerMove,
    /// Terminal; no further moves are accepted.
    GameOver,
}
