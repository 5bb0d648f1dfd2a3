//! Win detection logic for tic-tac-toe.

use super::super::{Position, PositionSet};
use tracing::instrument;

/// A winning line: three distinct positions.
pub type Line = [Position; 3];

/// Position for a cell number known to be in 1-9.
fn cell(number: u8) -> Position {
    Position::ALL[usize::from(number - 1)]
}

/// Row `k` (0-2): `{3k+1, 3k+2, 3k+3}`.
fn row(k: u8) -> Line {
    [cell(3 * k + 1), cell(3 * k + 2), cell(3 * k + 3)]
}

/// Column `k` (1-3): `{k, k+3, k+6}`.
fn column(k: u8) -> Line {
    [cell(k), cell(k + 3), cell(k + 6)]
}

/// The 8 canonical winning lines: rows, then columns, then diagonals.
pub fn lines() -> impl Iterator<Item = Line> {
    let rows = (0..3).map(row);
    let columns = (1..=3).map(column);
    let diagonals = [[cell(1), cell(5), cell(9)], [cell(3), cell(5), cell(7)]];
    rows.chain(columns).chain(diagonals)
}

/// Returns the first canonical line fully contained in `positions`.
#[instrument]
pub fn winning_line(positions: PositionSet) -> Option<Line> {
    lines().find(|line| {
        let line_set: PositionSet = line.iter().copied().collect();
        positions.is_superset(line_set)
    })
}

/// Checks if `positions` contains all three cells of some line.
#[instrument]
pub fn is_winning_set(positions: PositionSet) -> bool {
    winning_line(positions).is_some()
}
