//! First-class move type for tic-tac-toe.
//!
//! A move is the `(player, position)` pair the core hands to the
//! presentation layer for every mark it places.

use super::error::GameError;
use super::position::Position;
use super::types::Player;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.player, self.position)
    }
}

impl FromStr for Move {
    type Err = GameError;

    /// Parses `player:position` (or `player@position`), e.g. `circle:5`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, cell) = s
            .split_once([':', '@'])
            .ok_or_else(|| GameError::InvalidShapeOrPlayer(s.to_string()))?;
        Ok(Self::new(Player::parse(tag)?, cell.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        let mov: Move = "cross:3".parse().unwrap();
        assert_eq!(mov, Move::new(Player::Cross, Position::TopRight));
        assert_eq!(mov.to_string(), "cross:3");

        let mov: Move = "circle@center".parse().unwrap();
        assert_eq!(mov.position(), Position::Center);
    }

    #[test]
    fn test_parse_move_unknown_shape() {
        assert_eq!(
            "triangle:1".parse::<Move>(),
            Err(GameError::InvalidShapeOrPlayer("triangle".to_string()))
        );
        assert!(matches!(
            "circle".parse::<Move>(),
            Err(GameError::InvalidShapeOrPlayer(_))
        ));
    }

    #[test]
    fn test_parse_move_bad_position() {
        assert!(matches!(
            "circle:12".parse::<Move>(),
            Err(GameError::InvalidPosition(_))
        ));
    }
}
