use rand::Rng;

use super::{Board, Move, Stone};

impl Board {
    /// Pick a uniformly random empty square for `player`.
    ///
    /// Returns [`Move::NONE`] when the board is full.
    pub fn generate_random_move<R: Rng + ?Sized>(&self, player: Stone, rng: &mut R) -> Move {
        debug_assert!(player.is_player());
        if self.is_full() {
            return Move::NONE;
        }
        loop {
            let m = Move::new(
                player,
                rng.gen_range(0..self.width),
                rng.gen_range(0..self.height),
            );
            if self.can_place(m) {
                return m;
            }
        }
    }

    /// All empty squares as moves for `player`, column by column.
    #[must_use]
    pub fn empty_squares(&self, player: Stone) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.width as usize * self.height as usize - self.ply());
        for x in 0..self.width {
            for y in 0..self.height {
                if self.stone_at(x, y) == Stone::Empty {
                    moves.push(Move::new(player, x, y));
                }
            }
        }
        moves
    }
}
