//! Core Gomoku types.
//!
//! - `Stone` - cell occupant / move owner
//! - `ThreatDir` - line direction cached in a move
//! - `Move` - packed 32-bit move word

mod moves;
mod stone;

pub use moves::{Move, COORD_BITS, MAX_COMBINED_THREAT, MAX_WIN_DISTANCE};
pub use stone::{Stone, ThreatDir};
