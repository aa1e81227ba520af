//! The [`Coordinate`] key type.
//!
//! A coordinate names one grid cell. It is a plain value: two coordinates are
//! the same cell iff both components match, and every hashing or ordering
//! derived from it agrees with that equality.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Seed of [`Coordinate::hash_code`].
const HASH_SEED: i32 = 17;
/// Per-component multiplier of [`Coordinate::hash_code`].
const HASH_MULTIPLIER: i32 = 37;

/// An integer grid position. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Origin (0, 0), the same value as `Coordinate::default()`.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate. Any integer pair is valid.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the coordinate shifted by (dx, dy), or `None` if either
    /// component would overflow.
    #[inline]
    pub const fn checked_shift(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// The cardinal neighbours (up, right, down, left). Neighbours past the
    /// `i32` range are skipped.
    #[inline]
    pub fn neighbors_4(self) -> impl Iterator<Item = Coordinate> {
        const DIRS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        DIRS.into_iter()
            .filter_map(move |(dx, dy)| self.checked_shift(dx, dy))
    }

    /// All eight neighbours, clockwise from up. Neighbours past the `i32`
    /// range are skipped.
    #[inline]
    pub fn neighbors_8(self) -> impl Iterator<Item = Coordinate> {
        const DIRS: [(i32, i32); 8] = [
            (0, -1),
            (1, -1),
            (1, 0),
            (1, 1),
            (0, 1),
            (-1, 1),
            (-1, 0),
            (-1, -1),
        ];
        DIRS.into_iter()
            .filter_map(move |(dx, dy)| self.checked_shift(dx, dy))
    }

    /// A compact 32-bit hash: `37 * (37 * 17 + x) + y`, with wrapping
    /// arithmetic.
    ///
    /// Equal coordinates always give equal codes. Useful when a stable,
    /// platform-independent hash value is needed outside of `std::hash`.
    #[inline]
    pub const fn hash_code(self) -> i32 {
        let mut result = HASH_SEED;
        result = result.wrapping_mul(HASH_MULTIPLIER).wrapping_add(self.x);
        result = result.wrapping_mul(HASH_MULTIPLIER).wrapping_add(self.y);
        result
    }
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    /// Row-major: `y` first, then `x`.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y)
    }
}

/// Manhattan (L1) distance between two coordinates, saturating at
/// `i32::MAX`.
#[inline]
pub fn manhattan(a: Coordinate, b: Coordinate) -> i32 {
    let d = a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y));
    i32::try_from(d).unwrap_or(i32::MAX)
}

/// Chebyshev (L∞) distance between two coordinates, saturating at
/// `i32::MAX`.
#[inline]
pub fn chebyshev(a: Coordinate, b: Coordinate) -> i32 {
    let d = a.x.abs_diff(b.x).max(a.y.abs_diff(b.y));
    i32::try_from(d).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::{BTreeSet, HashSet};

    fn std_hash(c: Coordinate) -> u64 {
        let mut h = DefaultHasher::new();
        c.hash(&mut h);
        h.finish()
    }

    #[test]
    fn default_is_origin() {
        assert_eq!(Coordinate::default(), Coordinate::ORIGIN);
        assert_eq!(Coordinate::default(), Coordinate::new(0, 0));
    }

    #[test]
    fn equality_is_component_wise() {
        assert_eq!(Coordinate::new(3, -4), Coordinate::new(3, -4));
        assert_ne!(Coordinate::new(3, -4), Coordinate::new(-4, 3));
        assert_ne!(Coordinate::new(3, -4), Coordinate::new(3, 4));
    }

    #[test]
    fn equal_coordinates_hash_equal() {
        for x in -5..5 {
            for y in -5..5 {
                let a = Coordinate::new(x, y);
                let b = Coordinate::new(x, y);
                assert_eq!(std_hash(a), std_hash(b));
                assert_eq!(a.hash_code(), b.hash_code());
            }
        }
    }

    #[test]
    fn hash_code_matches_formula() {
        assert_eq!(Coordinate::ORIGIN.hash_code(), 17 * 37 * 37);
        assert_eq!(Coordinate::new(2, 5).hash_code(), (17 * 37 + 2) * 37 + 5);
        // Extreme values wrap instead of overflowing.
        let _ = Coordinate::new(i32::MAX, i32::MIN).hash_code();
    }

    #[test]
    fn hash_code_spreads_small_grid() {
        let mut seen = HashSet::new();
        for x in 0..37 {
            for y in 0..37 {
                assert!(seen.insert(Coordinate::new(x, y).hash_code()));
            }
        }
    }

    #[test]
    fn usable_as_hash_key() {
        let mut set = HashSet::new();
        set.insert(Coordinate::new(1, 2));
        assert!(set.contains(&Coordinate::new(1, 2)));
        assert!(!set.contains(&Coordinate::new(2, 1)));
    }

    #[test]
    fn ordering_is_row_major() {
        let set: BTreeSet<_> = [
            Coordinate::new(1, 1),
            Coordinate::new(0, 1),
            Coordinate::new(5, 0),
        ]
        .into_iter()
        .collect();
        let order: Vec<_> = set.into_iter().collect();
        assert_eq!(
            order,
            vec![
                Coordinate::new(5, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 1)
            ]
        );
    }

    #[test]
    fn neighbors() {
        let c = Coordinate::new(2, 2);
        let n4: Vec<_> = c.neighbors_4().collect();
        assert_eq!(n4[0], Coordinate::new(2, 1));
        assert_eq!(n4[3], Coordinate::new(1, 2));
        let n8: Vec<_> = c.neighbors_8().collect();
        assert_eq!(n8.len(), 8);
        assert!(!n8.contains(&c));
    }

    #[test]
    fn checked_shift_at_limits() {
        let c = Coordinate::new(i32::MAX, i32::MIN);
        assert_eq!(c.checked_shift(1, 0), None);
        assert_eq!(c.checked_shift(0, -1), None);
        assert_eq!(
            c.checked_shift(-1, 1),
            Some(Coordinate::new(i32::MAX - 1, i32::MIN + 1))
        );
    }

    #[test]
    fn neighbors_skip_overflow() {
        let edge = Coordinate::new(i32::MAX, 0);
        let n4: Vec<_> = edge.neighbors_4().collect();
        assert_eq!(
            n4,
            vec![
                Coordinate::new(i32::MAX, -1),
                Coordinate::new(i32::MAX, 1),
                Coordinate::new(i32::MAX - 1, 0)
            ]
        );

        let corner = Coordinate::new(i32::MAX, i32::MIN);
        assert_eq!(corner.neighbors_4().count(), 2);
        let n8: Vec<_> = corner.neighbors_8().collect();
        assert_eq!(
            n8,
            vec![
                Coordinate::new(i32::MAX, i32::MIN + 1),
                Coordinate::new(i32::MAX - 1, i32::MIN + 1),
                Coordinate::new(i32::MAX - 1, i32::MIN)
            ]
        );
    }

    #[test]
    fn distances() {
        let a = Coordinate::new(0, 0);
        let b = Coordinate::new(3, -4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
    }

    #[test]
    fn distances_saturate() {
        let lo = Coordinate::new(i32::MIN, i32::MIN);
        let hi = Coordinate::new(i32::MAX, i32::MAX);
        assert_eq!(manhattan(lo, hi), i32::MAX);
        assert_eq!(chebyshev(lo, hi), i32::MAX);
        assert_eq!(manhattan(Coordinate::new(i32::MAX - 2, 0), Coordinate::new(i32::MIN, 0)), i32::MAX);
        assert_eq!(manhattan(Coordinate::new(i32::MAX - 2, 0), Coordinate::new(i32::MAX, 1)), 3);
    }

    #[test]
    fn display_and_tuple_conversion() {
        let c: Coordinate = (7, -1).into();
        assert_eq!(c.to_string(), "(7, -1)");
        assert_eq!(<(i32, i32)>::from(c), (7, -1));
    }
}
