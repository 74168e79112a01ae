//! Gomoku board representation.
//!
//! The grid is indexed by a move's packed coordinates, so placing or
//! removing a stone is a single store. Every placement is recorded and
//! must be undone in reverse order.
//!
//! # Example
//! ```
//! use gomoku_brain::board::{Board, Move, Stone};
//!
//! let mut board = Board::square(15);
//! let m = Move::new(Stone::Cross, 7, 7);
//! board.apply_move(m);
//! assert_eq!(board.stone_at(7, 7), Stone::Cross);
//! board.undo_move(m);
//! assert_eq!(board.ply(), 0);
//! ```

mod error;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::PlacementError;
pub use state::{Board, BOARD_STRIDE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use types::{Move, Stone, ThreatDir, COORD_BITS, MAX_COMBINED_THREAT, MAX_WIN_DISTANCE};
