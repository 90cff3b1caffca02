//! Best-first frontier with a closed set.
//!
//! The open list holds node handles keyed by [`FrontierKey`]. States are
//! marked closed when popped, not when pushed, so a state may sit in the open
//! list more than once; the engine skips stale duplicates on pop.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use meander_kernel::model::state::State;

use crate::node::{FrontierKey, NodeId, SearchNode};

/// A frontier entry wrapping a node handle with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_cost` first).
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Best-first frontier manager.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the best node
/// - A `HashSet<State>` of closed (already expanded) states
/// - A monotone creation counter that feeds the FIFO tie-break
#[derive(Debug, Default)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<FrontierEntry>,
    closed: HashSet<State>,
    next_order: u64,
    high_water: u64,
}

impl BestFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a node handle keyed by `weight * h + g`.
    pub fn push(&mut self, id: NodeId, node: &SearchNode, weight: f64) {
        let key = FrontierKey::new(node, weight, self.next_order);
        self.next_order += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node: id,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the best (lowest key) node handle.
    #[must_use]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.node)
    }

    /// Mark a state closed. Returns `false` if it was already closed.
    pub fn close(&mut self, state: &State) -> bool {
        if self.closed.contains(state) {
            return false;
        }
        self.closed.insert(state.clone())
    }

    #[must_use]
    pub fn is_closed(&self, state: &State) -> bool {
        self.closed.contains(state)
    }

    /// Number of closed states.
    #[must_use]
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// Current open-list size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the open list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of open-list size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
