//! A reference A* loop composed from [`FrontierState`] operations.

use gridstar_core::{Coordinate, Map2D};

use crate::config::FrontierConfig;
use crate::node::{SearchNode, Waypoint};
use crate::state::FrontierState;

/// Heuristic estimate of the remaining cost between two coordinates.
pub trait Heuristic {
    fn estimate(&self, from: Coordinate, to: Coordinate) -> i32;
}

impl<F: Fn(Coordinate, Coordinate) -> i32> Heuristic for F {
    #[inline]
    fn estimate(&self, from: Coordinate, to: Coordinate) -> i32 {
        self(from, to)
    }
}

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The goal was taken from the open set.
    Found,
    /// The open set ran dry before reaching the goal.
    Exhausted,
    /// [`FrontierConfig::max_expansions`] expansions happened and the next
    /// best open node is not the goal.
    LimitReached,
}

/// Result of [`AstarSearch::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub status: SearchStatus,
    /// The goal waypoint, set iff `status` is [`SearchStatus::Found`].
    pub goal: Option<Waypoint>,
    /// Number of nodes whose neighbours were expanded.
    pub expanded: usize,
}

/// Runs A* over a [`Map2D`], keeping its [`FrontierState`] between runs so
/// callers can inspect the open and closed sets afterwards.
pub struct AstarSearch<G: Map2D> {
    state: FrontierState<G, Waypoint>,
    nbuf: Vec<Coordinate>,
}

impl<G: Map2D> AstarSearch<G> {
    pub fn new(grid: G) -> Self {
        Self::with_config(grid, FrontierConfig::default())
    }

    pub fn with_config(grid: G, config: FrontierConfig) -> Self {
        Self {
            state: FrontierState::with_config(grid, config),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// The frontier left behind by the last run.
    #[inline]
    pub fn state(&self) -> &FrontierState<G, Waypoint> {
        &self.state
    }

    /// Search from `start` to `goal`. The step cost of entering a cell is
    /// [`Map2D::cost`]; impassable neighbours are skipped.
    ///
    /// The frontier is cleared first. A start that is outside the map or
    /// impassable finishes immediately as [`SearchStatus::Exhausted`].
    pub fn run<H: Heuristic>(
        &mut self,
        start: Coordinate,
        goal: Coordinate,
        heuristic: &H,
    ) -> SearchOutcome {
        self.state.clear();
        let max_expansions = self.state.config().max_expansions;

        if self.state.grid().cost(start).is_some() {
            self.state
                .admit_open(Waypoint::new(start, 0, heuristic.estimate(start, goal)));
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0;

        let (status, found) = loop {
            let Some(current) = self.state.query_best_open().copied() else {
                break (SearchStatus::Exhausted, None);
            };
            if current.loc == goal {
                self.state.pop_best();
                break (SearchStatus::Found, Some(current));
            }
            // The cap bounds expansions only; the best node stays open when
            // it is hit.
            if max_expansions.is_some_and(|limit| expanded >= limit) {
                log::warn!("search: stopped after {expanded} expansions");
                break (SearchStatus::LimitReached, None);
            }
            self.state.pop_best();
            expanded += 1;

            nbuf.clear();
            self.state.grid().neighbors(current.loc, &mut nbuf);
            for &n in nbuf.iter() {
                let Some(step) = self.state.grid().cost(n) else {
                    continue;
                };
                let candidate = Waypoint::new(
                    n,
                    current.cost_so_far().saturating_add(step),
                    heuristic.estimate(n, goal),
                )
                .with_previous(current.loc);
                self.state.admit_open(candidate);
            }
        };

        self.nbuf = nbuf;
        log::debug!(
            "search: {start} -> {goal} {status:?} after {expanded} expansions, {} open, {} closed",
            self.state.count_open(),
            self.state.count_closed()
        );
        SearchOutcome {
            status,
            goal: found,
            expanded,
        }
    }
}
