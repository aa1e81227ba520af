use std::collections::HashMap;

use gridstar_core::Coordinate;

use crate::node::SearchNode;

/// Heap slot: a node plus the admission sequence number that breaks ties.
struct Slot<N> {
    node: N,
    seq: u64,
}

// ---------------------------------------------------------------------------
// OpenHeap
// ---------------------------------------------------------------------------

/// Binary min-heap of open nodes, ordered by `(total_cost, seq)`, with a side
/// index from coordinate to heap slot.
///
/// The index makes lookup O(1) and lets replacement and removal of an
/// arbitrary coordinate run in O(log n). Each coordinate occupies at most one
/// slot, so the heap never holds stale entries.
pub(crate) struct OpenHeap<N: SearchNode> {
    slots: Vec<Slot<N>>,
    index: HashMap<Coordinate, usize>,
    next_seq: u64,
}

impl<N: SearchNode> OpenHeap<N> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
            next_seq: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn contains(&self, loc: Coordinate) -> bool {
        self.index.contains_key(&loc)
    }

    #[inline]
    pub(crate) fn get(&self, loc: Coordinate) -> Option<&N> {
        self.index.get(&loc).map(|&i| &self.slots[i].node)
    }

    /// The node with the lowest total cost; the earliest admitted on ties.
    #[inline]
    pub(crate) fn peek(&self) -> Option<&N> {
        self.slots.first().map(|s| &s.node)
    }

    /// Insert `node`, or replace the node already stored for its coordinate.
    /// Either way the node gets a fresh sequence number. Returns the replaced
    /// node, if any.
    pub(crate) fn upsert(&mut self, node: N) -> Option<N> {
        let loc = node.coordinate();
        let seq = self.next_seq;
        self.next_seq += 1;
        match self.index.get(&loc).copied() {
            Some(i) => {
                let old = std::mem::replace(&mut self.slots[i], Slot { node, seq });
                self.restore(i);
                Some(old.node)
            }
            None => {
                let i = self.slots.len();
                self.slots.push(Slot { node, seq });
                self.index.insert(loc, i);
                self.sift_up(i);
                None
            }
        }
    }

    /// Remove and return the minimum node.
    pub(crate) fn pop(&mut self) -> Option<N> {
        if self.slots.is_empty() {
            return None;
        }
        Some(self.remove_at(0))
    }

    /// Remove the node stored for `loc`, if any.
    pub(crate) fn remove(&mut self, loc: Coordinate) -> Option<N> {
        let i = self.index.get(&loc).copied()?;
        Some(self.remove_at(i))
    }

    /// Drop every node and restart the sequence counter, keeping allocations.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.next_seq = 0;
    }

    /// Open nodes in heap order (not sorted).
    pub(crate) fn iter(&self) -> impl Iterator<Item = &N> {
        self.slots.iter().map(|s| &s.node)
    }

    // -----------------------------------------------------------------------
    // Heap maintenance
    // -----------------------------------------------------------------------

    fn remove_at(&mut self, i: usize) -> N {
        let Slot { node, .. } = self.slots.swap_remove(i);
        self.index.remove(&node.coordinate());
        if i < self.slots.len() {
            self.index.insert(self.slots[i].node.coordinate(), i);
            self.restore(i);
        }
        node
    }

    /// Re-establish heap order for a slot whose key changed in either
    /// direction.
    fn restore(&mut self, i: usize) {
        let i = self.sift_up(i);
        self.sift_down(i);
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        let (sa, sb) = (&self.slots[a], &self.slots[b]);
        (sa.node.total_cost(), sa.seq) < (sb.node.total_cost(), sb.seq)
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.slots.swap(a, b);
        self.index.insert(self.slots[a].node.coordinate(), a);
        self.index.insert(self.slots[b].node.coordinate(), b);
    }

    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
        i
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut best = i;
            if left < len && self.less(left, best) {
                best = left;
            }
            if right < len && self.less(right, best) {
                best = right;
            }
            if best == i {
                return;
            }
            self.swap(i, best);
            i = best;
        }
    }
}
