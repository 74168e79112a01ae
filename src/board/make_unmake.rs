use super::{Board, Move, PlacementError, Stone, BOARD_STRIDE};

impl Board {
    /// Returns true if both coordinates are inside the board.
    #[inline]
    #[must_use]
    pub fn check_coords(&self, m: Move) -> bool {
        m.x() < self.width && m.y() < self.height
    }

    /// Stone on `(x, y)`. Coordinates outside the board read as `Blocked`.
    #[inline]
    #[must_use]
    pub fn stone_at(&self, x: u32, y: u32) -> Stone {
        if x < self.width && y < self.height {
            self.cells[x as usize * BOARD_STRIDE + y as usize]
        } else {
            Stone::Blocked
        }
    }

    /// Stone on the square of `m`.
    #[inline]
    #[must_use]
    pub fn stone_of(&self, m: Move) -> Stone {
        self.stone_at(m.x(), m.y())
    }

    /// Returns true if `m` is inside the board and its square is empty.
    ///
    /// `m` must carry a player stone; checked in debug builds.
    #[inline]
    #[must_use]
    pub fn can_place(&self, m: Move) -> bool {
        debug_assert!(!m.is_empty(), "can_place on an empty move");
        self.check_coords(m) && self.cells[m.coords()] == Stone::Empty
    }

    /// Returns true once every square is taken.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        let area = self.width as usize * self.height as usize;
        debug_assert!(self.ply() <= area);
        self.ply() == area
    }

    /// Place `m` and pass the turn.
    ///
    /// # Panics
    /// If `m` has no player stone or [`Board::can_place`] fails.
    pub fn apply_move(&mut self, m: Move) {
        assert!(m.stone().is_player(), "apply_move needs a player stone: {m:?}");
        assert!(self.can_place(m), "illegal apply_move {m:?}");

        self.cells[m.coords()] = m.stone();
        self.history.push(m.plain());
        self.cross_to_move = !self.cross_to_move;
    }

    /// Checked placement for moves coming from outside the engine.
    pub fn try_apply_move(&mut self, m: Move) -> Result<(), PlacementError> {
        if !m.stone().is_player() {
            return Err(PlacementError::NotAPlayer { stone: m.stone() });
        }
        if !self.check_coords(m) {
            return Err(PlacementError::OutOfBounds { x: m.x(), y: m.y() });
        }
        if self.cells[m.coords()] != Stone::Empty {
            return Err(PlacementError::Occupied { x: m.x(), y: m.y() });
        }
        self.apply_move(m);
        Ok(())
    }

    /// Take back `m`, which must be the last move played.
    ///
    /// # Panics
    /// If the board is empty or `m` is not the most recent move.
    pub fn undo_move(&mut self, m: Move) {
        let last = self.history.last().copied();
        assert!(
            last.is_some_and(|last| last.as_u32() == m.plain().as_u32()),
            "undo_move {m:?} does not match last move {last:?}"
        );

        self.cells[m.coords()] = Stone::Empty;
        self.history.pop();
        self.cross_to_move = !self.cross_to_move;
    }
}
