//! Cell positions and position sets for the 3x3 grid.

use super::error::GameError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A cell on the board, numbered 1-9 left-to-right, top-to-bottom.
///
/// ```text
/// 1 | 2 | 3
/// 4 | 5 | 6
/// 7 | 8 | 9
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[repr(u8)]
pub enum Position {
    /// Top-left (1)
    TopLeft = 1,
    /// Top-center (2)
    TopCenter = 2,
    /// Top-right (3)
    TopRight = 3,
    /// Middle-left (4)
    MiddleLeft = 4,
    /// Center (5)
    Center = 5,
    /// Middle-right (6)
    MiddleRight = 6,
    /// Bottom-left (7)
    BottomLeft = 7,
    /// Bottom-center (8)
    BottomCenter = 8,
    /// Bottom-right (9)
    BottomRight = 9,
}

impl Position {
    /// All 9 positions in ascending order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Returns the cell number (1-9).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Creates a position from its cell number (1-9).
    pub fn from_number(number: u8) -> Option<Self> {
        let index = usize::from(number.checked_sub(1)?);
        Self::ALL.get(index).copied()
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Bit used for this position inside a [`PositionSet`].
    fn bit(self) -> u16 {
        1 << (self.number() - 1)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for Position {
    type Err = GameError;

    /// Parses a cell number ("5") or a label ("center", case-insensitive).
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return Self::from_number(number)
                .ok_or_else(|| GameError::InvalidPosition(trimmed.to_string()));
        }

        let lower = trimmed.to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == lower)
            .ok_or_else(|| GameError::InvalidPosition(trimmed.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────
//  PositionSet
// ─────────────────────────────────────────────────────────────

/// A set of positions, stored as a 9-bit mask.
///
/// `PositionSet` is `Copy`, so "what if" questions are answered on a
/// copy via [`PositionSet::with`] and never touch the live board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionSet(u16);

impl PositionSet {
    /// The empty set.
    pub const EMPTY: PositionSet = PositionSet(0);

    /// Creates an empty set.
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Returns true if the set holds `position`.
    pub fn contains(self, position: Position) -> bool {
        self.0 & position.bit() != 0
    }

    /// Adds `position` to the set.
    pub fn insert(&mut self, position: Position) {
        self.0 |= position.bit();
    }

    /// Returns a copy of this set with `position` added.
    pub fn with(self, position: Position) -> Self {
        Self(self.0 | position.bit())
    }

    /// Returns the union of two sets.
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns true if the two sets share no position.
    pub fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Returns true if every position of `other` is in this set.
    pub fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Number of positions in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the positions in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Position> {
        Position::ALL.into_iter().filter(move |p| self.contains(*p))
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = Self::new();
        for position in iter {
            set.insert(position);
        }
        set
    }
}

impl std::fmt::Display for PositionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let numbers: Vec<String> = self.iter().map(|p| p.to_string()).collect();
        write!(f, "{{{}}}", numbers.join(","))
    }
}
