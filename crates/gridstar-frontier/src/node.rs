use std::fmt;

use gridstar_core::Coordinate;

/// A candidate the outer search offers to the frontier.
///
/// The frontier keys nodes by [`coordinate`](SearchNode::coordinate), keeps
/// the one with the lowest [`cost_so_far`](SearchNode::cost_so_far) per key,
/// and ranks keys by [`total_cost`](SearchNode::total_cost).
pub trait SearchNode {
    /// Cost type. Floating-point costs need a totally ordered wrapper.
    type Cost: Copy + Ord + fmt::Debug;

    /// The cell this node stands on.
    fn coordinate(&self) -> Coordinate;

    /// Accumulated cost from the search origin.
    fn cost_so_far(&self) -> Self::Cost;

    /// Cost so far plus the heuristic estimate to the goal.
    fn total_cost(&self) -> Self::Cost;
}

/// A concrete search node with integer costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub loc: Coordinate,
    /// Cost of the path from the origin to `loc`.
    pub previous_cost: i32,
    /// Heuristic estimate from `loc` to the goal.
    pub remaining_cost: i32,
    /// The coordinate this waypoint was reached from, if any.
    pub previous: Option<Coordinate>,
}

impl Waypoint {
    pub fn new(loc: Coordinate, previous_cost: i32, remaining_cost: i32) -> Self {
        Self {
            loc,
            previous_cost,
            remaining_cost,
            previous: None,
        }
    }

    /// Record the coordinate this waypoint was expanded from.
    pub fn with_previous(mut self, previous: Coordinate) -> Self {
        self.previous = Some(previous);
        self
    }
}

impl SearchNode for Waypoint {
    type Cost = i32;

    #[inline]
    fn coordinate(&self) -> Coordinate {
        self.loc
    }

    #[inline]
    fn cost_so_far(&self) -> i32 {
        self.previous_cost
    }

    #[inline]
    fn total_cost(&self) -> i32 {
        self.previous_cost.saturating_add(self.remaining_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_previous_plus_remaining() {
        let w = Waypoint::new(Coordinate::new(1, 2), 4, 6);
        assert_eq!(w.coordinate(), Coordinate::new(1, 2));
        assert_eq!(w.cost_so_far(), 4);
        assert_eq!(w.total_cost(), 10);
        assert_eq!(w.previous, None);
    }

    #[test]
    fn total_saturates() {
        let w = Waypoint::new(Coordinate::ORIGIN, i32::MAX, 1);
        assert_eq!(w.total_cost(), i32::MAX);
    }

    #[test]
    fn breadcrumb() {
        let w = Waypoint::new(Coordinate::new(1, 0), 1, 0).with_previous(Coordinate::ORIGIN);
        assert_eq!(w.previous, Some(Coordinate::ORIGIN));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn waypoint_round_trip() {
        let w = Waypoint::new(Coordinate::new(3, 7), 42, 5).with_previous(Coordinate::new(3, 6));
        let json = serde_json::to_string(&w).unwrap();
        let back: Waypoint = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);
    }
}
