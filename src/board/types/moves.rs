//! Packed move representation.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::stone::{Stone, ThreatDir};

/// Bits per coordinate; also log2 of the grid stride.
pub const COORD_BITS: u32 = 5;

const OFFSET_TYPE: u32 = 2 * COORD_BITS;
const OFFSET_THREAT: u32 = 12;
const OFFSET_COST: u32 = 14;
const OFFSET_DIST: u32 = 25;
const OFFSET_COMB: u32 = 27;
const OFFSET_FORCED: u32 = 31;

const SIZE_TYPE: u32 = OFFSET_THREAT - OFFSET_TYPE;
const SIZE_DIR: u32 = OFFSET_COST - OFFSET_THREAT;
const SIZE_COST: u32 = OFFSET_DIST - OFFSET_COST;
const SIZE_DIST: u32 = OFFSET_COMB - OFFSET_DIST;
const SIZE_COMB: u32 = OFFSET_FORCED - OFFSET_COMB;
const SIZE_THREAT: u32 = OFFSET_COMB - OFFSET_THREAT;

/// Low `bits` bits set.
const fn mask(bits: u32) -> u32 {
    if bits >= u32::BITS {
        u32::MAX
    } else {
        (1 << bits) - 1
    }
}

const MASK_COORD: u32 = mask(COORD_BITS);
const MASK_COORDS: u32 = mask(OFFSET_TYPE);
const MASK_TYPE: u32 = mask(SIZE_TYPE) << OFFSET_TYPE;
/// Direction, cost bitmap and win distance together.
const MASK_THREAT: u32 = mask(SIZE_THREAT) << OFFSET_THREAT;
const MASK_DIR: u32 = mask(SIZE_DIR) << OFFSET_THREAT;
const MASK_COST: u32 = mask(SIZE_COST) << OFFSET_COST;
const MASK_DIST: u32 = mask(SIZE_DIST) << OFFSET_DIST;
const MASK_COMB: u32 = mask(SIZE_COMB) << OFFSET_COMB;
const MASK_FORCED: u32 = 1 << OFFSET_FORCED;

/// Identity of a move: stone type plus coordinates.
const MASK_PLAIN: u32 = MASK_TYPE | MASK_COORDS;

const _: () = assert!(mask(0) == 0);
const _: () = assert!(mask(2) == 0b11);
const _: () = assert!(mask(32) == u32::MAX);
const _: () = assert!(
    MASK_COORDS | MASK_TYPE | MASK_THREAT | MASK_COMB | MASK_FORCED == u32::MAX,
    "move fields do not cover 32 bits"
);
const _: () = assert!(
    MASK_COORDS ^ MASK_TYPE ^ MASK_THREAT ^ MASK_COMB ^ MASK_FORCED == u32::MAX,
    "move fields overlap"
);
const _: () = assert!(MASK_DIR | MASK_COST | MASK_DIST == MASK_THREAT);
const _: () = assert!(MASK_DIR ^ MASK_COST ^ MASK_DIST == MASK_THREAT);
const _: () = assert!(MASK_TYPE == Stone::Blocked.bits() << OFFSET_TYPE);

/// Largest value the win distance field can hold.
pub const MAX_WIN_DISTANCE: u32 = mask(SIZE_DIST);

/// Largest combined-threat id.
pub const MAX_COMBINED_THREAT: u32 = mask(SIZE_COMB);

/// Compact 32-bit move representation.
///
/// Encoding (bit 0 = least significant):
/// - bits 0-4:   y coordinate
/// - bits 5-9:   x coordinate
/// - bits 10-11: stone type ([`Stone`])
/// - bits 12-13: threat direction ([`ThreatDir`])
/// - bits 14-24: threat cost bitmap
/// - bits 25-26: distance to win, saturating
/// - bits 27-30: combined threat id
/// - bit 31:     forced flag
///
/// Equality and hashing only look at the stone type and coordinates, so a
/// move carrying cached threat data still matches its plain history entry.
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u32);

impl Move {
    /// No move. Empty type, coordinates (0, 0).
    pub const NONE: Move = Move(0);

    /// Null move: every coordinate bit set, empty type.
    pub const NULL: Move = Move(MASK_COORDS);

    /// Create a move for `stone` at `(x, y)`.
    ///
    /// `stone` must be `Cross` or `Nought` and both coordinates must fit the
    /// coordinate field. Checked in debug builds only.
    #[inline]
    #[must_use]
    pub const fn new(stone: Stone, x: u32, y: u32) -> Self {
        debug_assert!(stone.is_player(), "move needs a player stone");
        debug_assert!(x <= MASK_COORD && y <= MASK_COORD);
        Move((stone.bits() << OFFSET_TYPE) | (x << COORD_BITS) | y)
    }

    /// Create a move from a packed `x * 32 + y` index.
    #[inline]
    #[must_use]
    pub const fn from_index(stone: Stone, coords: usize) -> Self {
        debug_assert!(stone.is_player(), "move needs a player stone");
        Move((stone.bits() << OFFSET_TYPE) | (coords as u32 & MASK_COORDS))
    }

    /// Get the raw 32-bit value
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Create from raw 32-bit value
    #[inline]
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Move(value)
    }

    #[inline]
    #[must_use]
    pub const fn x(self) -> u32 {
        (self.0 >> COORD_BITS) & MASK_COORD
    }

    #[inline]
    #[must_use]
    pub const fn y(self) -> u32 {
        self.0 & MASK_COORD
    }

    /// `(x, y)` pair.
    #[inline]
    #[must_use]
    pub const fn coordinates(self) -> (u32, u32) {
        (self.x(), self.y())
    }

    /// Grid index `x * 32 + y`.
    #[inline]
    #[must_use]
    pub const fn coords(self) -> usize {
        (self.0 & MASK_COORDS) as usize
    }

    #[inline]
    #[must_use]
    pub const fn stone(self) -> Stone {
        Stone::from_bits(self.0 >> OFFSET_TYPE)
    }

    #[inline]
    #[must_use]
    pub const fn threat_dir(self) -> ThreatDir {
        ThreatDir::from_bits(self.0 >> OFFSET_THREAT)
    }

    /// Occupancy mask of the cost squares along the threat ray.
    #[inline]
    #[must_use]
    pub const fn threat_cost_bitmap(self) -> u32 {
        (self.0 & MASK_COST) >> OFFSET_COST
    }

    #[inline]
    #[must_use]
    pub const fn win_distance(self) -> u32 {
        (self.0 & MASK_DIST) >> OFFSET_DIST
    }

    #[inline]
    #[must_use]
    pub const fn combined_threat(self) -> u32 {
        (self.0 & MASK_COMB) >> OFFSET_COMB
    }

    #[inline]
    #[must_use]
    pub const fn is_forced(self) -> bool {
        self.0 & MASK_FORCED != 0
    }

    /// Returns true if anything beyond the coordinates is set.
    #[inline]
    #[must_use]
    pub const fn is_ok(self) -> bool {
        self.0 & !MASK_COORDS != 0
    }

    /// Returns true if the stone type is `Empty`.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 & MASK_TYPE == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_stone(self, stone: Stone) -> bool {
        self.0 & MASK_TYPE == stone.bits() << OFFSET_TYPE
    }

    /// Strip the tactical metadata, keeping stone type and coordinates.
    #[inline]
    #[must_use]
    pub const fn plain(self) -> Self {
        Move(self.0 & MASK_PLAIN)
    }

    /// Coordinates plus the low type bit: indexes a `[Cross, Nought] x square` table.
    #[inline]
    #[must_use]
    pub const fn hash_index(self) -> u32 {
        self.0 & ((Stone::Cross.bits() << OFFSET_TYPE) | MASK_COORDS)
    }

    /// Coordinates, type and threat direction.
    #[inline]
    #[must_use]
    pub const fn threat_coords(self) -> Self {
        Move(self.0 & mask(OFFSET_COST))
    }

    #[inline]
    #[must_use]
    pub const fn same_threat_coords(self, other: Move) -> bool {
        (self.0 ^ other.0) & mask(OFFSET_COST) == 0
    }

    #[inline]
    #[must_use]
    pub const fn same_coords(self, other: Move) -> bool {
        (self.0 ^ other.0) & MASK_COORDS == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_win_distance_le(self, distance: u32) -> bool {
        self.win_distance() <= distance
    }

    #[inline]
    #[must_use]
    pub const fn is_win_distance_eq(self, distance: u32) -> bool {
        self.win_distance() == distance
    }

    #[inline]
    #[must_use]
    pub const fn is_combined_threat(self, id: u32) -> bool {
        self.combined_threat() == id
    }

    /// Both the combined threat id and the win distance match.
    #[inline]
    #[must_use]
    pub const fn is_combined_threat_with_dist(self, id: u32, distance: u32) -> bool {
        self.0 & (MASK_COMB | MASK_DIST) == (id << OFFSET_COMB) | (distance << OFFSET_DIST)
    }

    #[inline]
    #[must_use]
    pub const fn with_coords(self, x: u32, y: u32) -> Self {
        Move((self.0 & !MASK_COORDS) | ((x & MASK_COORD) << COORD_BITS) | (y & MASK_COORD))
    }

    #[inline]
    #[must_use]
    pub const fn with_stone(self, stone: Stone) -> Self {
        Move((self.0 & !MASK_TYPE) | (stone.bits() << OFFSET_TYPE))
    }

    #[inline]
    #[must_use]
    pub const fn with_threat_dir(self, dir: ThreatDir) -> Self {
        Move((self.0 & !MASK_DIR) | (dir.bits() << OFFSET_THREAT))
    }

    /// Bits above the 11-bit field are dropped.
    #[inline]
    #[must_use]
    pub const fn with_threat_cost_bitmap(self, bitmap: u32) -> Self {
        Move((self.0 & !MASK_COST) | ((bitmap << OFFSET_COST) & MASK_COST))
    }

    /// Saturates at [`MAX_WIN_DISTANCE`].
    #[inline]
    #[must_use]
    pub const fn with_win_distance(self, distance: u32) -> Self {
        let distance = if distance > MAX_WIN_DISTANCE {
            MAX_WIN_DISTANCE
        } else {
            distance
        };
        Move((self.0 & !MASK_DIST) | (distance << OFFSET_DIST))
    }

    /// Bits above the 4-bit field are dropped.
    #[inline]
    #[must_use]
    pub const fn with_combined_threat(self, id: u32) -> Self {
        Move((self.0 & !MASK_COMB) | ((id << OFFSET_COMB) & MASK_COMB))
    }

    #[inline]
    #[must_use]
    pub const fn with_forced(self, forced: bool) -> Self {
        if forced {
            Move(self.0 | MASK_FORCED)
        } else {
            Move(self.0 & !MASK_FORCED)
        }
    }
}

impl PartialEq for Move {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        (self.0 ^ other.0) & MASK_PLAIN == 0
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.0 & MASK_PLAIN).hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({},{} {}", self.x(), self.y(), self.stone())?;
        if self.0 & !MASK_PLAIN != 0 {
            write!(
                f,
                " {:?} cost={:#013b} dist={} comb={}",
                self.threat_dir(),
                self.threat_cost_bitmap(),
                self.win_distance(),
                self.combined_threat()
            )?;
        }
        if self.is_forced() {
            write!(f, " forced")?;
        }
        write!(f, ")")
    }
}

/// Wire format: `x,y`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x(), self.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_create_and_read_back() {
        let m = Move::new(Stone::Cross, 7, 19);
        assert_eq!(m.coordinates(), (7, 19));
        assert_eq!(m.stone(), Stone::Cross);
        assert_eq!(m.coords(), 7 * 32 + 19);
        assert!(!m.is_forced());
        assert_eq!(m.win_distance(), 0);
        assert_eq!(m.combined_threat(), 0);

        let m = Move::new(Stone::Nought, 31, 0);
        assert_eq!(m.coordinates(), (31, 0));
        assert_eq!(m.stone(), Stone::Nought);
    }

    #[test]
    fn test_sentinels() {
        assert!(Move::NONE.is_empty());
        assert!(!Move::NONE.is_ok());
        assert!(Move::NULL.is_empty());
        assert!(!Move::NULL.is_ok());
        assert_eq!(Move::default(), Move::NONE);
        assert_eq!(Move::NULL.coordinates(), (31, 31));
        assert!(Move::new(Stone::Cross, 0, 0).is_ok());
    }

    #[test]
    fn test_from_index_matches_new() {
        let m = Move::new(Stone::Nought, 4, 9);
        assert_eq!(Move::from_index(Stone::Nought, m.coords()), m);
    }

    #[test]
    fn test_metadata_fields_are_independent() {
        let m = Move::new(Stone::Cross, 3, 4)
            .with_threat_dir(ThreatDir::Down)
            .with_threat_cost_bitmap(0b101_0101_0101)
            .with_win_distance(2)
            .with_combined_threat(9)
            .with_forced(true);

        assert_eq!(m.coordinates(), (3, 4));
        assert_eq!(m.stone(), Stone::Cross);
        assert_eq!(m.threat_dir(), ThreatDir::Down);
        assert_eq!(m.threat_cost_bitmap(), 0b101_0101_0101);
        assert_eq!(m.win_distance(), 2);
        assert_eq!(m.combined_threat(), 9);
        assert!(m.is_forced());

        let cleared = m.with_forced(false).with_combined_threat(0);
        assert!(!cleared.is_forced());
        assert_eq!(cleared.combined_threat(), 0);
        assert_eq!(cleared.win_distance(), 2);
    }

    #[test]
    fn test_field_setters_do_not_overflow() {
        let m = Move::new(Stone::Cross, 1, 1)
            .with_threat_cost_bitmap(u32::MAX)
            .with_combined_threat(u32::MAX)
            .with_win_distance(100);
        assert_eq!(m.threat_cost_bitmap(), 0x7FF);
        assert_eq!(m.combined_threat(), MAX_COMBINED_THREAT);
        assert_eq!(m.win_distance(), MAX_WIN_DISTANCE);
        assert!(!m.is_forced());
        assert_eq!(m.stone(), Stone::Cross);
        assert_eq!(m.coordinates(), (1, 1));
    }

    #[test]
    fn test_plain_strips_metadata() {
        let m = Move::new(Stone::Nought, 10, 11)
            .with_threat_dir(ThreatDir::Col)
            .with_win_distance(1)
            .with_forced(true);
        let plain = m.plain();
        assert_eq!(plain.as_u32(), Move::new(Stone::Nought, 10, 11).as_u32());
        assert_eq!(plain.plain().as_u32(), plain.as_u32());
    }

    #[test]
    fn test_equality_ignores_metadata() {
        let a = Move::new(Stone::Cross, 5, 5);
        let b = a.with_combined_threat(3).with_forced(true);
        assert_eq!(a, b);
        assert_ne!(a.as_u32(), b.as_u32());

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));

        assert_ne!(a, Move::new(Stone::Nought, 5, 5));
        assert_ne!(a, Move::new(Stone::Cross, 5, 6));
    }

    #[test]
    fn test_with_stone_and_coords() {
        let m = Move::new(Stone::Cross, 2, 3).with_combined_threat(4);
        let n = m.with_stone(Stone::Nought);
        assert_eq!(n.stone(), Stone::Nought);
        assert_eq!(n.combined_threat(), 4);
        assert!(n.is_stone(Stone::Nought));
        assert!(!n.is_stone(Stone::Cross));

        let moved = m.with_coords(8, 9);
        assert_eq!(moved.coordinates(), (8, 9));
        assert_eq!(moved.combined_threat(), 4);
        assert!(!m.same_coords(moved));
        assert!(m.same_coords(m.with_stone(Stone::Nought)));
    }

    #[test]
    fn test_threat_coords() {
        let a = Move::new(Stone::Cross, 6, 6).with_threat_dir(ThreatDir::Up);
        let b = a.with_win_distance(3).with_threat_cost_bitmap(0x3);
        assert!(a.same_threat_coords(b));
        assert!(!a.same_threat_coords(b.with_threat_dir(ThreatDir::Row)));
        assert_eq!(b.threat_coords().as_u32(), a.as_u32());
    }

    #[test]
    fn test_win_distance_predicates() {
        let m = Move::new(Stone::Cross, 0, 0).with_win_distance(1);
        assert!(m.is_win_distance_le(1));
        assert!(m.is_win_distance_le(2));
        assert!(!m.is_win_distance_le(0));
        assert!(m.is_win_distance_eq(1));

        let m = m.with_combined_threat(7);
        assert!(m.is_combined_threat(7));
        assert!(m.is_combined_threat_with_dist(7, 1));
        assert!(!m.is_combined_threat_with_dist(7, 2));
        assert!(!m.is_combined_threat_with_dist(6, 1));
    }

    #[test]
    fn test_hash_index_separates_players() {
        let cross = Move::new(Stone::Cross, 3, 3);
        let nought = Move::new(Stone::Nought, 3, 3);
        assert_ne!(cross.hash_index(), nought.hash_index());
        assert_eq!(nought.hash_index(), nought.coords() as u32);
    }

    #[test]
    fn test_display_is_wire_format() {
        assert_eq!(Move::new(Stone::Cross, 12, 3).to_string(), "12,3");
        let debug = format!("{:?}", Move::new(Stone::Nought, 1, 2).with_forced(true));
        assert!(debug.contains("1,2"));
        assert!(debug.contains("forced"));
    }
}
