//! Property-based tests using proptest.

use crate::board::{Board, Move, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use proptest::prelude::*;
use rand::prelude::*;

fn size_strategy() -> impl Strategy<Value = u32> {
    MIN_BOARD_SIZE..=MAX_BOARD_SIZE
}

fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

proptest! {
    /// Property: undoing every move in reverse order gives back an empty board
    #[test]
    fn prop_apply_undo_restores_board(
        width in size_strategy(),
        height in size_strategy(),
        seed in seed_strategy(),
        num_moves in 1..=60usize,
    ) {
        let mut board = Board::new(width, height);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut played = Vec::new();

        for _ in 0..num_moves {
            let m = board.generate_random_move(board.side_to_move(), &mut rng);
            if !m.is_ok() {
                break;
            }
            prop_assert!(board.can_place(m));
            board.apply_move(m);
            played.push(m);
            prop_assert_eq!(board.ply(), played.len());
        }

        while let Some(m) = played.pop() {
            board.undo_move(m);
        }

        prop_assert_eq!(board.ply(), 0);
        prop_assert_eq!(board.side_to_move(), Stone::Cross);
        for x in 0..width {
            for y in 0..height {
                prop_assert_eq!(board.stone_at(x, y), Stone::Empty);
            }
        }
    }

    /// Property: the board's stones always match its history
    #[test]
    fn prop_cells_match_history(seed in seed_strategy(), num_moves in 1..=100usize) {
        let mut board = Board::square(15);
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..num_moves {
            let m = board.generate_random_move(board.side_to_move(), &mut rng);
            board.apply_move(m);
        }
        for (ply, m) in board.history().iter().enumerate() {
            let expected = if ply % 2 == 0 { Stone::Cross } else { Stone::Nought };
            prop_assert_eq!(m.stone(), expected);
            prop_assert_eq!(board.stone_of(*m), expected);
        }
        prop_assert_eq!(board.empty_squares(Stone::Cross).len(), 225 - num_moves);
    }

    /// Property: a packed move keeps coordinates and stone through the metadata setters
    #[test]
    fn prop_move_fields_survive_metadata(
        x in 0u32..32,
        y in 0u32..32,
        dist in 0u32..8,
        comb in 0u32..16,
        bitmap in 0u32..(1 << 11),
        forced in any::<bool>(),
    ) {
        let m = Move::new(Stone::Nought, x, y)
            .with_win_distance(dist)
            .with_combined_threat(comb)
            .with_threat_cost_bitmap(bitmap)
            .with_forced(forced);
        prop_assert_eq!(m.coordinates(), (x, y));
        prop_assert_eq!(m.stone(), Stone::Nought);
        prop_assert_eq!(m.win_distance(), dist.min(3));
        prop_assert_eq!(m.combined_threat(), comb);
        prop_assert_eq!(m.threat_cost_bitmap(), bitmap);
        prop_assert_eq!(m.is_forced(), forced);
        prop_assert_eq!(m, Move::new(Stone::Nought, x, y));
    }
}
