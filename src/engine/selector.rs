//! Move selection hook called by the protocol worker on `BEGIN` and `TURN`.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::SearchLimits;
use crate::board::{Board, Move, Stone};

/// Seed of the default [`RandomSelector`].
pub const DEFAULT_SEED: u64 = 0x5EED_601D;

/// Chooses the engine's move.
///
/// Returning [`Move::NONE`] means no move is available (full board).
pub trait MoveSelector: Send {
    fn select(&mut self, board: &Board, player: Stone, limits: &SearchLimits) -> Move;
}

impl<F> MoveSelector for F
where
    F: FnMut(&Board, Stone, &SearchLimits) -> Move + Send,
{
    fn select(&mut self, board: &Board, player: Stone, limits: &SearchLimits) -> Move {
        self(board, player, limits)
    }
}

/// Plays a uniformly random empty square.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        RandomSelector {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl MoveSelector for RandomSelector {
    fn select(&mut self, board: &Board, player: Stone, _limits: &SearchLimits) -> Move {
        board.generate_random_move(player, &mut self.rng)
    }
}
