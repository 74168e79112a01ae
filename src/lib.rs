pub mod board;
pub mod engine;
pub mod gomocup;
pub mod sync;

pub use board::{Board, Move, Stone};
pub use engine::{Config, Engine, MoveSelector};
pub use sync::BlockingChannel;
