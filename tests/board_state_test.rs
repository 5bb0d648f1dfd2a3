//! Tests for board state and line evaluation.

use circle_cross::{Board, Player, Position, PositionSet, rules};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn set(numbers: &[u8]) -> PositionSet {
    numbers
        .iter()
        .filter_map(|&n| Position::from_number(n))
        .collect()
}

#[test]
fn test_partition_holds_after_random_games() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut order = Position::ALL.to_vec();
        order.shuffle(&mut rng);

        let mut board = Board::new();
        let mut player = Player::Circle;
        for position in order {
            board.occupy(player, position).expect("empty position");
            player = player.opponent();

            let circle = board.positions(Player::Circle);
            let cross = board.positions(Player::Cross);
            let empty: PositionSet = board.empty_positions().into_iter().collect();

            assert!(circle.is_disjoint(cross));
            assert!(empty.is_disjoint(circle.union(cross)));
            assert_eq!(empty.len() + circle.len() + cross.len(), 9);
            assert!(circle.len() <= 5 && cross.len() <= 5);
            assert_eq!(board.history().len(), circle.len() + cross.len());
        }
        assert!(board.is_full());
        assert!(board.empty_positions().is_empty());
    }
}

#[test]
fn test_empty_positions_are_ascending() {
    let board = Board::from_sets(set(&[9, 1]), set(&[5])).unwrap();
    let numbers: Vec<u8> = board.empty_positions().iter().map(|p| p.number()).collect();
    assert_eq!(numbers, vec![2, 3, 4, 6, 7, 8]);
}

#[test]
fn test_exactly_eight_lines() {
    assert_eq!(rules::lines().count(), 8);
}

#[test]
fn test_winning_sets_are_line_supersets() {
    // Every subset of the 9 cells: wins iff it contains a canonical line.
    for mask in 0u16..512 {
        let positions: PositionSet = Position::ALL
            .into_iter()
            .filter(|p| mask & (1 << (p.number() - 1)) != 0)
            .collect();
        let contains_line = rules::lines().any(|line| line.iter().all(|p| positions.contains(*p)));
        assert_eq!(rules::is_winning_set(positions), contains_line, "mask {:#011b}", mask);
        if positions.len() < 3 {
            assert!(!rules::is_winning_set(positions));
        }
    }
}

#[test]
fn test_corners_do_not_win() {
    assert!(!rules::is_winning_set(set(&[1, 3, 7, 9])));
}
