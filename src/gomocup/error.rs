//! Protocol error responses.

use std::fmt;

/// A recoverable protocol failure. `Display` is the response line sent to
/// the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// `START` with missing or unsupported dimensions.
    BoardSize,
    /// A board command arrived before `START`.
    NoBoard,
    /// Coordinates could not be parsed.
    Coordinates(String),
    /// Own stone could not be placed.
    MyMove { x: i64, y: i64 },
    /// Opponent stone could not be placed.
    OpponentMove { x: i64, y: i64 },
    /// `TAKEBACK` does not name the last move.
    Takeback { x: i64, y: i64 },
    /// Malformed line inside a `BOARD` block.
    BoardLine(String),
    /// Known `INFO` key with an unusable value.
    InfoValue { key: String, value: String },
    /// The move selector found nothing to play.
    NoMoveAvailable,
    /// Command rejected while a move is being computed.
    InSearch,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::BoardSize => write!(f, "ERROR size of the board"),
            CommandError::NoBoard => write!(f, "ERROR no board, send START first"),
            CommandError::Coordinates(text) => write!(f, "ERROR invalid coordinates [{text}]"),
            CommandError::MyMove { x, y } => write!(f, "ERROR my move [{x},{y}]"),
            CommandError::OpponentMove { x, y } => write!(f, "ERROR opponent's move [{x},{y}]"),
            CommandError::Takeback { x, y } => write!(f, "ERROR takeback [{x},{y}]"),
            CommandError::BoardLine(line) => write!(f, "ERROR board line [{line}]"),
            CommandError::InfoValue { key, value } => {
                write!(f, "ERROR info value [{key} {value}]")
            }
            CommandError::NoMoveAvailable => write!(f, "ERROR no legal move"),
            CommandError::InSearch => write!(f, "ERROR bad command in search mode"),
        }
    }
}

impl std::error::Error for CommandError {}
