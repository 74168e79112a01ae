//! Stone (cell occupant / move player) and threat direction types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What occupies a board cell, and which side a move belongs to.
///
/// The discriminants are the raw values of the two type bits in a packed
/// [`Move`](super::Move), so `Empty` is zero and `Blocked` fills the field.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Stone {
    #[default]
    Empty = 0,
    /// Side A, the side that moves first.
    Cross = 1,
    /// Side B.
    Nought = 2,
    /// Not playable (wall or removed square).
    Blocked = 3,
}

impl Stone {
    /// The two sides that can actually place stones.
    pub const PLAYERS: [Stone; 2] = [Stone::Cross, Stone::Nought];

    /// Decode the two low bits of `bits`.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u32) -> Stone {
        match bits & 0b11 {
            0 => Stone::Empty,
            1 => Stone::Cross,
            2 => Stone::Nought,
            _ => Stone::Blocked,
        }
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Returns true for `Cross` and `Nought`.
    #[inline]
    #[must_use]
    pub const fn is_player(self) -> bool {
        matches!(self, Stone::Cross | Stone::Nought)
    }

    /// The other side. `Empty` and `Blocked` map to themselves.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Stone {
        match self {
            Stone::Cross => Stone::Nought,
            Stone::Nought => Stone::Cross,
            other => other,
        }
    }

    /// Single-character rendering used by board dumps.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Cross => 'x',
            Stone::Nought => 'o',
            Stone::Blocked => '#',
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Empty => write!(f, "Empty"),
            Stone::Cross => write!(f, "Cross"),
            Stone::Nought => write!(f, "Nought"),
            Stone::Blocked => write!(f, "Blocked"),
        }
    }
}

/// Line direction of a threat cached in a move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum ThreatDir {
    #[default]
    Row = 0,
    Col = 1,
    /// Rising diagonal.
    Up = 2,
    /// Falling diagonal.
    Down = 3,
}

impl ThreatDir {
    pub const ALL: [ThreatDir; 4] = [
        ThreatDir::Row,
        ThreatDir::Col,
        ThreatDir::Up,
        ThreatDir::Down,
    ];

    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u32) -> ThreatDir {
        match bits & 0b11 {
            0 => ThreatDir::Row,
            1 => ThreatDir::Col,
            2 => ThreatDir::Up,
            _ => ThreatDir::Down,
        }
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self as u32
    }
}
