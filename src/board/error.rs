//! Error types for board operations.

use std::fmt;

use super::Stone;

/// Why a checked placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Coordinates fall outside the board.
    OutOfBounds { x: u32, y: u32 },
    /// The square already holds a stone.
    Occupied { x: u32, y: u32 },
    /// The move does not carry a player stone.
    NotAPlayer { stone: Stone },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds { x, y } => {
                write!(f, "Square [{x},{y}] is outside the board")
            }
            PlacementError::Occupied { x, y } => {
                write!(f, "Square [{x},{y}] is already occupied")
            }
            PlacementError::NotAPlayer { stone } => {
                write!(f, "Cannot place a stone of type {stone}")
            }
        }
    }
}

impl std::error::Error for PlacementError {}
