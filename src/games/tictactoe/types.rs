//! Core domain types for tic-tac-toe.

use super::action::Move;
use super::error::GameError;
use super::phases::GameOutcome;
use super::position::{Position, PositionSet};
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Player {
    /// The human player (moves first).
    Circle,
    /// The computer player.
    Cross,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Circle => Player::Cross,
            Player::Cross => Player::Circle,
        }
    }

    /// Parses a player tag, rejecting anything but `circle` or `cross`.
    #[instrument]
    pub fn parse(tag: &str) -> Result<Self, GameError> {
        tag.trim()
            .parse()
            .map_err(|_| GameError::InvalidShapeOrPlayer(tag.to_string()))
    }

    /// Symbol drawn on the grid.
    pub fn symbol(self) -> char {
        match self {
            Player::Circle => 'O',
            Player::Cross => 'X',
        }
    }
}

/// Board state: the positions owned by each player.
///
/// Invariants:
/// - `circle` and `cross` are disjoint
/// - history length equals the number of occupied positions
/// - circle moves first and the players alternate, so circle holds as many
///   positions as cross or one more
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    circle: PositionSet,
    cross: PositionSet,
    history: Vec<Move>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from each player's positions.
    ///
    /// History is rebuilt by alternating players, circle first, in
    /// ascending position order.
    ///
    /// # Errors
    ///
    /// - `GameError::InvalidMove` if a position is in both sets
    /// - `GameError::WrongPlayer` if the counts cannot come from alternating
    ///   play, naming the player with too many marks
    #[instrument]
    pub fn from_sets(circle: PositionSet, cross: PositionSet) -> Result<Self, GameError> {
        if let Some(clash) = circle.iter().find(|p| cross.contains(*p)) {
            warn!(position = %clash, "Position claimed by both players");
            return Err(GameError::InvalidMove(clash));
        }
        if circle.len() > cross.len() + 1 {
            warn!(circle = circle.len(), cross = cross.len(), "Circle holds too many positions");
            return Err(GameError::WrongPlayer(Player::Circle));
        }
        if cross.len() > circle.len() {
            warn!(circle = circle.len(), cross = cross.len(), "Cross holds too many positions");
            return Err(GameError::WrongPlayer(Player::Cross));
        }

        let mut circles = circle.iter();
        let mut crosses = cross.iter();
        let mut history = Vec::with_capacity(circle.len() + cross.len());
        loop {
            let c = circles.next();
            let x = crosses.next();
            if c.is_none() && x.is_none() {
                break;
            }
            history.extend(c.map(|p| Move::new(Player::Circle, p)));
            history.extend(x.map(|p| Move::new(Player::Cross, p)));
        }

        Ok(Self {
            circle,
            cross,
            history,
        })
    }

    /// Replays `moves` from an empty board.
    ///
    /// Returns the final board and the outcome after the last move.
    ///
    /// # Errors
    ///
    /// - any error from [`Board::occupy`]
    /// - `GameError::MoveAfterGameOver` for a move after a win or draw
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<(Self, GameOutcome), GameError> {
        let mut board = Self::new();
        let mut outcome = GameOutcome::Ongoing;

        for &mov in moves {
            if outcome.is_terminal() {
                warn!(%mov, %outcome, "Move after end of game");
                return Err(GameError::MoveAfterGameOver(mov));
            }
            board.occupy(mov.player(), mov.position())?;
            outcome = rules::evaluate(&board, mov.player());
        }

        debug!(%outcome, "Replay finished");
        Ok((board, outcome))
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        if self.history.len() % 2 == 0 {
            Player::Circle
        } else {
            Player::Cross
        }
    }

    /// Returns the positions owned by `player`.
    pub fn positions(&self, player: Player) -> PositionSet {
        match player {
            Player::Circle => self.circle,
            Player::Cross => self.cross,
        }
    }

    /// Returns the union of both players' positions.
    pub fn occupied(&self) -> PositionSet {
        self.circle.union(self.cross)
    }

    /// Returns which player owns `position`, if any.
    pub fn owner(&self, position: Position) -> Option<Player> {
        if self.circle.contains(position) {
            Some(Player::Circle)
        } else if self.cross.contains(position) {
            Some(Player::Cross)
        } else {
            None
        }
    }

    /// Checks if a position is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.owner(position).is_none()
    }

    /// Returns all empty positions in ascending order.
    #[instrument(skip(self))]
    pub fn empty_positions(&self) -> Vec<Position> {
        let occupied = self.occupied();
        Position::ALL
            .into_iter()
            .filter(|p| !occupied.contains(*p))
            .collect()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.occupied().len() == Position::ALL.len()
    }

    /// Returns move history in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places `player`'s mark on `position`.
    ///
    /// # Errors
    ///
    /// - `GameError::WrongPlayer` if it is not `player`'s turn
    /// - `GameError::InvalidMove` if the position is already occupied
    ///
    /// The board is left unchanged on error.
    #[instrument(skip_all, fields(player = %player, position = %position))]
    pub fn occupy(&mut self, player: Player, position: Position) -> Result<(), GameError> {
        let expected = self.to_move();
        if player != expected {
            warn!(%expected, "Rejected move out of turn");
            return Err(GameError::WrongPlayer(player));
        }
        if let Some(owner) = self.owner(position) {
            warn!(owner = %owner, "Rejected move on occupied position");
            return Err(GameError::InvalidMove(position));
        }

        match player {
            Player::Circle => self.circle.insert(position),
            Player::Cross => self.cross.insert(position),
        }
        self.history.push(Move::new(player, position));
        debug!(moves = self.history.len(), "Position occupied");
        Ok(())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in Position::ALL.chunks(3).enumerate() {
            let symbols: Vec<String> = cells
                .iter()
                .map(|&p| match self.owner(p) {
                    Some(player) => player.symbol().to_string(),
                    None => p.to_string(),
                })
                .collect();
            write!(f, "{}", symbols.join("|"))?;
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
