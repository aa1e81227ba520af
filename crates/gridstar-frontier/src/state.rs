use std::collections::BTreeMap;

use gridstar_core::{Coordinate, Map2D};

use crate::config::{ClosePolicy, ClosedAdmission, FrontierConfig};
use crate::error::FrontierError;
use crate::heap::OpenHeap;
use crate::node::SearchNode;

/// Open/closed bookkeeping for one A* run over one grid.
///
/// Open nodes live in an indexed min-heap keyed by coordinate, so the best
/// candidate is found in O(1) and admission or closing costs O(log n).
/// Closed coordinates are kept in a `BTreeMap` so iteration over them is
/// deterministic.
///
/// The open and closed key sets are always disjoint.
///
/// # Tie-breaking
///
/// Among open nodes of equal total cost, the one admitted earliest wins. A
/// node that replaced a more expensive one counts as admitted at the moment
/// of replacement.
pub struct FrontierState<G, N: SearchNode> {
    grid: G,
    open: OpenHeap<N>,
    /// `None` marks a coordinate closed without ever being open.
    closed: BTreeMap<Coordinate, Option<N>>,
    config: FrontierConfig,
}

impl<G: Map2D, N: SearchNode> FrontierState<G, N> {
    /// Create an empty state bound to `grid` with the default configuration.
    pub fn new(grid: G) -> Self {
        Self::with_config(grid, FrontierConfig::default())
    }

    /// Create an empty state bound to `grid`.
    pub fn with_config(grid: G, config: FrontierConfig) -> Self {
        log::debug!("frontier: new state, config {config:?}");
        Self {
            grid,
            open: OpenHeap::new(),
            closed: BTreeMap::new(),
            config,
        }
    }

    /// Like [`new`](Self::new), for callers holding an optional grid.
    ///
    /// Fails with [`FrontierError::InvalidArgument`] if `grid` is `None`.
    pub fn try_new(grid: Option<G>) -> Result<Self, FrontierError> {
        match grid {
            Some(grid) => Ok(Self::new(grid)),
            None => Err(FrontierError::InvalidArgument("grid cannot be absent")),
        }
    }

    /// The grid this state searches over.
    #[inline]
    pub fn grid(&self) -> &G {
        &self.grid
    }

    #[inline]
    pub fn config(&self) -> &FrontierConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Open set
    // -----------------------------------------------------------------------

    /// The open node with the lowest total estimated cost, or `None` if the
    /// open set is empty.
    #[inline]
    pub fn query_best_open(&self) -> Option<&N> {
        self.open.peek()
    }

    /// Offer `candidate` to the open set. Returns whether it was stored.
    ///
    /// A coordinate with no open entry is always admitted. Otherwise the
    /// candidate replaces the stored node only if its cost so far is strictly
    /// lower. Candidates for closed coordinates follow
    /// [`FrontierConfig::closed_admission`]. A rejected candidate leaves the
    /// state untouched.
    pub fn admit_open(&mut self, candidate: N) -> bool {
        let loc = candidate.coordinate();
        let g = candidate.cost_so_far();

        if let Some(closed) = self.closed.get(&loc) {
            match self.config.closed_admission {
                ClosedAdmission::Reject => {
                    log::debug!("frontier: reject {loc}, already closed");
                    return false;
                }
                ClosedAdmission::Reopen => {
                    if let Some(node) = closed {
                        if g >= node.cost_so_far() {
                            return false;
                        }
                    }
                    log::trace!("frontier: reopen {loc} at cost {g:?}");
                    self.closed.remove(&loc);
                }
            }
        }

        if let Some(existing) = self.open.get(loc) {
            if g >= existing.cost_so_far() {
                log::trace!(
                    "frontier: keep {loc} at cost {:?}, offered {g:?}",
                    existing.cost_so_far()
                );
                return false;
            }
        }
        match self.open.upsert(candidate) {
            Some(old) => log::trace!(
                "frontier: improve {loc} from {:?} to {g:?}",
                old.cost_so_far()
            ),
            None => log::trace!("frontier: open {loc} at cost {g:?}"),
        }
        true
    }

    /// Number of open nodes.
    #[inline]
    pub fn count_open(&self) -> usize {
        self.open.len()
    }

    #[inline]
    pub fn is_open(&self, loc: Coordinate) -> bool {
        self.open.contains(loc)
    }

    /// The open node stored for `loc`.
    #[inline]
    pub fn open_node(&self, loc: Coordinate) -> Option<&N> {
        self.open.get(loc)
    }

    /// All open nodes, in no particular order.
    pub fn open_nodes(&self) -> impl Iterator<Item = &N> {
        self.open.iter()
    }

    // -----------------------------------------------------------------------
    // Closed set
    // -----------------------------------------------------------------------

    /// Move `loc` from open to closed.
    ///
    /// If `loc` is not open, [`ClosePolicy::Lenient`] records it as closed
    /// without a node (an already closed coordinate keeps its node), and
    /// [`ClosePolicy::Strict`] fails with [`FrontierError::NotOpen`].
    pub fn close_coordinate(&mut self, loc: Coordinate) -> Result<(), FrontierError> {
        match self.open.remove(loc) {
            Some(node) => {
                log::trace!("frontier: close {loc} at cost {:?}", node.cost_so_far());
                self.closed.insert(loc, Some(node));
            }
            None => match self.config.close_policy {
                ClosePolicy::Strict => return Err(FrontierError::NotOpen(loc)),
                ClosePolicy::Lenient => {
                    log::trace!("frontier: close {loc}, was not open");
                    self.closed.entry(loc).or_insert(None);
                }
            },
        }
        Ok(())
    }

    /// Remove the best open node, close its coordinate and return it.
    pub fn pop_best(&mut self) -> Option<N>
    where
        N: Clone,
    {
        let node = self.open.pop()?;
        let loc = node.coordinate();
        log::trace!("frontier: close {loc} at cost {:?}", node.cost_so_far());
        self.closed.insert(loc, Some(node.clone()));
        Some(node)
    }

    #[inline]
    pub fn is_closed(&self, loc: Coordinate) -> bool {
        self.closed.contains_key(&loc)
    }

    /// The node `loc` was closed with, if it was open when closed.
    #[inline]
    pub fn closed_node(&self, loc: Coordinate) -> Option<&N> {
        self.closed.get(&loc).and_then(Option::as_ref)
    }

    #[inline]
    pub fn count_closed(&self) -> usize {
        self.closed.len()
    }

    /// Closed coordinates in row-major order.
    pub fn closed_coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.closed.keys().copied()
    }

    /// Forget all open and closed entries, keeping the grid and config.
    pub fn clear(&mut self) {
        self.open.clear();
        self.closed.clear();
    }
}
