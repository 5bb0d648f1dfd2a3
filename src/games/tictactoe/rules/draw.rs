//! Terminal-condition evaluation for tic-tac-toe.

use super::super::{Board, GameOutcome, Player};
use super::win::is_winning_set;
use tracing::{debug, instrument};

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Evaluates the outcome right after `player` has moved.
///
/// A line for `player` wins; otherwise a full board is a draw.
#[instrument(skip(board), fields(player = %player))]
pub fn evaluate(board: &Board, player: Player) -> GameOutcome {
    let outcome = if is_winning_set(board.positions(player)) {
        GameOutcome::Won(player)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::Ongoing
    };
    debug!(?outcome, "Outcome evaluated");
    outcome
}

/// Evaluates a board without knowing who moved last.
///
/// Circle's lines are checked before cross's.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> GameOutcome {
    [Player::Circle, Player::Cross]
        .into_iter()
        .find(|&player| is_winning_set(board.positions(player)))
        .map_or_else(
            || {
                if is_full(board) {
                    GameOutcome::Draw
                } else {
                    GameOutcome::Ongoing
                }
            },
            GameOutcome::Won,
        )
}

#[cfg(test)]
mod tests {
    use super::super::super::{Position, PositionSet};
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

    #[test]
    fn test_empty_board_ongoing() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert_eq!(evaluate(&board, Player::Circle), GameOutcome::Ongoing);
    }

    #[test]
    fn test_draw_detection() {
        // O X O / O X X / X O O
        let board = board(&[1, 3, 4, 8, 9], &[2, 5, 6, 7]);
        assert!(is_full(&board));
        assert_eq!(evaluate(&board, Player::Circle), GameOutcome::Draw);
        assert_eq!(evaluate(&board, Player::Cross), GameOutcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        // Circle's last move fills the board and completes 1-5-9.
        let board = board(&[1, 3, 5, 8, 9], &[2, 4, 6, 7]);
        assert!(is_full(&board));
        assert_eq!(evaluate(&board, Player::Circle), GameOutcome::Won(Player::Circle));
    }

    #[test]
    fn test_only_mover_is_evaluated() {
        let board = board(&[4, 8, 9], &[1, 2, 3]);
        assert_eq!(evaluate(&board, Player::Cross), GameOutcome::Won(Player::Cross));
        assert_eq!(evaluate(&board, Player::Circle), GameOutcome::Ongoing);
    }

    #[test]
    fn test_outcome_finds_either_winner() {
        assert_eq!(outcome(&board(&[1, 2, 3], &[4, 5])), GameOutcome::Won(Player::Circle));
        assert_eq!(outcome(&board(&[4, 8, 9], &[1, 2, 3])), GameOutcome::Won(Player::Cross));
        assert_eq!(outcome(&board(&[1, 3, 4, 8, 9], &[2, 5, 6, 7])), GameOutcome::Draw);
        assert_eq!(outcome(&board(&[1, 2], &[5])), GameOutcome::Ongoing);
    }
}
