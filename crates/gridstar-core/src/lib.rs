//! **gridstar-core** — value types shared by the gridstar search crates.
//!
//! - [`Coordinate`]: the integer cell key used by open and closed sets.
//! - [`Map2D`]: the grid abstraction a search is bound to, with
//!   [`TerrainMap`] as a simple vector-backed implementation.

pub mod coord;
pub mod map;

pub use coord::{Coordinate, chebyshev, manhattan};
pub use map::{Map2D, MapError, TerrainMap};
