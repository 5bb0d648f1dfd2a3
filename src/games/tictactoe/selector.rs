//! Heuristic move selection for the computer player.
//!
//! A fixed one-move lookahead, checked in priority order:
//! 1. a move that wins immediately
//! 2. a move that blocks the human's immediate win
//! 3. the center
//! 4. a uniformly random empty cell

use super::error::GameError;
use super::rules::is_winning_set;
use super::{Board, Player, Position};
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why the selector picked a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SelectionReason {
    /// Completes a line for the computer.
    Win,
    /// Stops the human from completing a line.
    Block,
    /// Takes the free center cell.
    Center,
    /// No better option; picked at random.
    Random,
}

/// A chosen position and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct Selection {
    /// Position to play.
    position: Position,
    /// Rule that produced the position.
    reason: SelectionReason,
}

/// Picks the computer's next position.
///
/// The board is only read; hypothetical moves are tested on copies of the
/// players' position sets.
///
/// # Errors
///
/// Returns `GameError::SelectorPreconditionViolated` on a full board.
#[instrument(skip(board, rng), fields(occupied = %board.occupied()))]
pub fn select_move<R: Rng>(board: &Board, rng: &mut R) -> Result<Selection, GameError> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        return Err(GameError::SelectorPreconditionViolated);
    }

    let own = board.positions(Player::Cross);
    if let Some(&position) = empty.iter().find(|&&p| is_winning_set(own.with(p))) {
        debug!(%position, "Winning move found");
        return Ok(Selection::new(position, SelectionReason::Win));
    }

    let opponent = board.positions(Player::Circle);
    let blocks: Vec<Position> = empty
        .iter()
        .copied()
        .filter(|&p| is_winning_set(opponent.with(p)))
        .collect();
    // Only the first threat is blocked when there are several.
    if let Some(&position) = blocks.first() {
        debug!(%position, threats = blocks.len(), "Blocking move found");
        return Ok(Selection::new(position, SelectionReason::Block));
    }

    if empty.contains(&Position::Center) {
        return Ok(Selection::new(Position::Center, SelectionReason::Center));
    }

    let position = empty[rng.random_range(0..empty.len())];
    debug!(%position, candidates = empty.len(), "Random move chosen");
    Ok(Selection::new(position, SelectionReason::Random))
}

/// Move selector that owns its random source.
#[derive(Debug, Clone)]
pub struct HeuristicSelector {
    rng: StdRng,
}

impl HeuristicSelector {
    /// Creates a selector seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a selector with a fixed seed, for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a selector from an optional seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }

    /// Picks the computer's next position on `board`.
    #[instrument(skip_all)]
    pub fn select(&mut self, board: &Board) -> Result<Selection, GameError> {
        select_move(board, &mut self.rng)
    }
}

impl Default for HeuristicSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::PositionSet;
    use super::*;

    fn board(circle: &[u8], cross: &[u8]) -> Board {
        let set = |numbers: &[u8]| -> PositionSet {
            numbers
                .iter()
                .filter_map(|&n| Position::from_number(n))
                .collect()
        };
        Board::from_sets(set(circle), set(cross)).unwrap()
    }

    fn pick(board: &Board) -> Selection {
        select_move(board, &mut StdRng::seed_from_u64(7)).unwrap()
    }

    #[test]
    fn test_takes_win() {
        let selection = pick(&board(&[4, 5], &[1, 2]));
        assert_eq!(selection, Selection::new(Position::TopRight, SelectionReason::Win));
    }

    #[test]
    fn test_blocks_threat() {
        let selection = pick(&board(&[1, 2], &[5]));
        assert_eq!(selection, Selection::new(Position::TopRight, SelectionReason::Block));
    }

    #[test]
    fn test_win_beats_block() {
        // Circle threatens 3, but cross completes 4-5-6 first.
        let selection = pick(&board(&[1, 2], &[4, 5]));
        assert_eq!(selection, Selection::new(Position::MiddleRight, SelectionReason::Win));
    }

    #[test]
    fn test_blocks_lowest_of_two_threats() {
        // Circle threatens both 3 (row) and 7 (column).
        let selection = pick(&board(&[1, 2, 4], &[5, 9]));
        assert_eq!(selection, Selection::new(Position::TopRight, SelectionReason::Block));
    }

    #[test]
    fn test_center_on_empty_board() {
        let selection = pick(&Board::new());
        assert_eq!(selection, Selection::new(Position::Center, SelectionReason::Center));
    }

    #[test]
    fn test_random_fallback_picks_empty() {
        let board = board(&[5], &[]);
        for seed in 0..50 {
            let selection = select_move(&board, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(*selection.reason(), SelectionReason::Random);
            assert!(board.is_empty(*selection.position()));
        }
    }

    #[test]
    fn test_full_board_is_rejected() {
        let board = board(&[1, 3, 4, 8, 9], &[2, 5, 6, 7]);
        assert_eq!(
            select_move(&board, &mut StdRng::seed_from_u64(0)),
            Err(GameError::SelectorPreconditionViolated)
        );
    }

    #[test]
    fn test_seeded_selector_is_reproducible() {
        let board = board(&[5], &[]);
        let a = HeuristicSelector::with_seed(42).select(&board).unwrap();
        let b = HeuristicSelector::with_seed(42).select(&board).unwrap();
        assert_eq!(a, b);
    }
}
