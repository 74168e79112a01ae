use std::fmt;

use super::{Move, Stone, COORD_BITS};

/// Smallest playable board edge.
pub const MIN_BOARD_SIZE: u32 = 5;

/// Largest playable board edge.
pub const MAX_BOARD_SIZE: u32 = 20;

/// Row stride of the cell grid. Power of two so a move's packed coordinates
/// are directly the cell index.
pub const BOARD_STRIDE: usize = 1 << COORD_BITS;

const GRID_CELLS: usize = BOARD_STRIDE * MAX_BOARD_SIZE as usize;
const MAX_HISTORY: usize = (MAX_BOARD_SIZE * MAX_BOARD_SIZE) as usize;

const _: () = assert!(BOARD_STRIDE >= MAX_BOARD_SIZE as usize);

/// Game board: cell grid, played moves and side to move.
pub struct Board {
    pub(crate) cells: [Stone; GRID_CELLS],
    /// Plain moves in play order; its length is the game ply.
    pub(crate) history: Vec<Move>,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) cross_to_move: bool,
}

impl Board {
    /// Create an empty `width` x `height` board.
    ///
    /// # Panics
    /// If either dimension is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            Self::is_valid_size(width) && Self::is_valid_size(height),
            "board size {width}x{height} out of range"
        );
        Board {
            cells: [Stone::Empty; GRID_CELLS],
            history: Vec::with_capacity(MAX_HISTORY),
            width,
            height,
            cross_to_move: true,
        }
    }

    /// Square board with edge `size`.
    #[must_use]
    pub fn square(size: u32) -> Self {
        Board::new(size, size)
    }

    /// Like [`Board::new`] but returns `None` for unsupported dimensions.
    #[must_use]
    pub fn try_new(width: u32, height: u32) -> Option<Self> {
        if Self::is_valid_size(width) && Self::is_valid_size(height) {
            Some(Board::new(width, height))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub fn is_valid_size(size: u32) -> bool {
        (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size)
    }

    /// Clear every cell and the history in place.
    pub fn reset(&mut self) {
        self.cells.fill(Stone::Empty);
        self.history.clear();
        self.cross_to_move = true;
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of moves on the board.
    #[inline]
    #[must_use]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// The stone that would be placed next.
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Stone {
        if self.cross_to_move {
            Stone::Cross
        } else {
            Stone::Nought
        }
    }

    /// Played moves, oldest first, metadata stripped.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn move_at(&self, ply: usize) -> Option<Move> {
        self.history.get(ply).copied()
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }
}

/// Replays the history so the copy has a consistent ply order.
impl Clone for Board {
    fn clone(&self) -> Self {
        let mut board = Board::new(self.width, self.height);
        for &m in &self.history {
            board.apply_move(m);
        }
        debug_assert_eq!(board.cross_to_move, self.cross_to_move);
        board
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("ply", &self.ply())
            .field("side_to_move", &self.side_to_move())
            .field("history", &self.history)
            .finish()
    }
}

/// ASCII dump: one text row per `y`, columns are `x`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.width {
            write!(f, "{:>3}", x)?;
        }
        writeln!(f)?;
        for y in 0..self.height {
            write!(f, "{y:>3}")?;
            for x in 0..self.width {
                write!(f, "{:>3}", self.stone_at(x, y).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
