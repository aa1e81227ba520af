//! The grid abstraction a search is bound to: [`Map2D`] and the
//! vector-backed [`TerrainMap`].

use std::fmt;

use crate::coord::Coordinate;

/// Terrain lookup for a 2D grid.
///
/// Bounds checks and passability are the map's responsibility; the frontier
/// never validates coordinates itself.
pub trait Map2D {
    /// Whether `loc` lies inside the map.
    fn contains(&self, loc: Coordinate) -> bool;

    /// Cost of entering `loc`, or `None` if it is impassable or outside the
    /// map. Costs must be > 0.
    fn cost(&self, loc: Coordinate) -> Option<i32>;

    /// Append traversable neighbours of `loc` into `buf`. The caller clears
    /// `buf` before calling.
    ///
    /// The default enumerates the four cardinal directions.
    fn neighbors(&self, loc: Coordinate, buf: &mut Vec<Coordinate>) {
        for n in loc.neighbors_4() {
            if self.cost(n).is_some() {
                buf.push(n);
            }
        }
    }
}

impl<M: Map2D + ?Sized> Map2D for &M {
    #[inline]
    fn contains(&self, loc: Coordinate) -> bool {
        (**self).contains(loc)
    }

    #[inline]
    fn cost(&self, loc: Coordinate) -> Option<i32> {
        (**self).cost(loc)
    }

    #[inline]
    fn neighbors(&self, loc: Coordinate, buf: &mut Vec<Coordinate>) {
        (**self).neighbors(loc, buf)
    }
}

/// Rectangular map anchored at (0, 0) storing one entry cost per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainMap {
    width: i32,
    height: i32,
    cells: Vec<Option<i32>>,
    diagonal: bool,
}

impl TerrainMap {
    /// Create a `width`×`height` map where every cell costs 1.
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            width,
            height,
            cells: vec![Some(1); cell_count(width, height)],
            diagonal: false,
        }
    }

    /// Parse a map from text rows.
    ///
    /// `.` is a floor of cost 1, `#` is a wall, and the digits `1`-`9` are
    /// floors of that cost. All rows must share one width.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let mut width = None;
        let mut cells = Vec::new();
        let mut height = 0;
        for (y, line) in s.lines().enumerate() {
            let mut w = 0;
            for (x, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' => Some(1),
                    '#' => None,
                    '1'..='9' => Some(ch as i32 - '0' as i32),
                    _ => {
                        return Err(MapError::InvalidRune {
                            ch,
                            pos: Coordinate::new(x as i32, y as i32),
                        });
                    }
                };
                cells.push(cell);
                w += 1;
            }
            match width {
                None => width = Some(w),
                Some(expected) if expected != w => {
                    return Err(MapError::InconsistentSize {
                        row: y as i32,
                        expected,
                        found: w,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }
        Ok(Self {
            width: width.unwrap_or(0),
            height,
            cells,
            diagonal: false,
        })
    }

    /// Enumerate all eight neighbours instead of the four cardinal ones.
    pub fn with_diagonals(mut self, diagonal: bool) -> Self {
        self.diagonal = diagonal;
        self
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Set the entry cost of `loc`; `None` makes it a wall. Returns `false`
    /// if `loc` is outside the map.
    pub fn set_cost(&mut self, loc: Coordinate, cost: Option<i32>) -> bool {
        match self.idx(loc) {
            Some(i) => {
                self.cells[i] = cost;
                true
            }
            None => false,
        }
    }

    /// Shorthand for `set_cost(loc, None)`.
    pub fn block(&mut self, loc: Coordinate) -> bool {
        self.set_cost(loc, None)
    }

    fn idx(&self, loc: Coordinate) -> Option<usize> {
        if !self.contains(loc) {
            return None;
        }
        Some(loc.y as usize * self.width as usize + loc.x as usize)
    }
}

/// Number of cells of a `width`×`height` map, computed in `usize` so large
/// dimensions cannot overflow `i32`. Negative sizes count as zero.
fn cell_count(width: i32, height: i32) -> usize {
    width.max(0) as usize * height.max(0) as usize
}

impl Map2D for TerrainMap {
    fn contains(&self, loc: Coordinate) -> bool {
        loc.x >= 0 && loc.y >= 0 && loc.x < self.width && loc.y < self.height
    }

    fn cost(&self, loc: Coordinate) -> Option<i32> {
        self.idx(loc).and_then(|i| self.cells[i])
    }

    fn neighbors(&self, loc: Coordinate, buf: &mut Vec<Coordinate>) {
        if self.diagonal {
            buf.extend(
                loc.neighbors_8()
                    .filter(|&n| self.cost(n).is_some()),
            );
        } else {
            buf.extend(
                loc.neighbors_4()
                    .filter(|&n| self.cost(n).is_some()),
            );
        }
    }
}

/// Errors that can occur when parsing a [`TerrainMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A row's width differs from the first row's.
    InconsistentSize { row: i32, expected: i32, found: i32 },
    /// A character outside `.#1-9` was found.
    InvalidRune { ch: char, pos: Coordinate },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "map: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "map contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for MapError {}
