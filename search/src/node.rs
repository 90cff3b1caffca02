//! Search nodes, the arena that owns them, and the frontier ordering key.

use std::ops::Index;

use meander_kernel::model::condition::{Condition, Effect};
use meander_kernel::model::state::State;

/// Handle to a node inside a [`NodeArena`].
///
/// Handles are non-owning: a node's parent link never keeps the parent alive.
/// The arena (and whatever engine owns it) decides node lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One point in the search tree.
///
/// The node owns a private copy of its state. `action` is `None` only for a
/// root; otherwise it is the index, in the problem's flat action list, of the
/// action applied to the parent.
#[derive(Debug, Clone)]
pub struct SearchNode {
    state: State,
    parent: Option<NodeId>,
    action: Option<usize>,
    /// Cumulative path cost (+1 per applied action).
    g_cost: u32,
    /// Tree depth (root = 0). Equal to `g_cost` under unit costs, tracked
    /// separately because it bounds walk length.
    depth: u32,
    /// Heuristic estimate, computed once at creation.
    h_cost: f64,
}

impl SearchNode {
    /// A root node: no parent, no action, zero cost and depth.
    #[must_use]
    pub fn root(state: State, h_cost: f64) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            g_cost: 0,
            depth: 0,
            h_cost,
        }
    }

    /// A child node reached from `parent` by `action`.
    #[must_use]
    pub fn child(
        state: State,
        parent: NodeId,
        action: usize,
        g_cost: u32,
        depth: u32,
        h_cost: f64,
    ) -> Self {
        Self {
            state,
            parent: Some(parent),
            action: Some(action),
            g_cost,
            depth,
            h_cost,
        }
    }

    /// A parentless node holding a copy of this node's state, for building a
    /// successor in place with [`SearchNode::apply`].
    #[must_use]
    pub fn detached_copy(&self) -> Self {
        Self::root(self.state.clone(), 0.0)
    }

    /// Apply an effect to this node's own state copy.
    pub fn apply(&mut self, effect: &Effect) {
        self.state.apply(effect);
    }

    #[must_use]
    pub fn satisfy(&self, condition: &Condition) -> bool {
        self.state.satisfy(condition)
    }

    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn action(&self) -> Option<usize> {
        self.action
    }

    #[must_use]
    pub fn g_cost(&self) -> u32 {
        self.g_cost
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn h_cost(&self) -> f64 {
        self.h_cost
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.action.is_none()
    }

    pub fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    pub fn set_action(&mut self, action: Option<usize>) {
        self.action = action;
    }

    pub fn set_g_cost(&mut self, g_cost: u32) {
        self.g_cost = g_cost;
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.depth = depth;
    }

    pub fn set_h_cost(&mut self, h_cost: f64) {
        self.h_cost = h_cost;
    }

    /// `f = weight * h + g`, the frontier ordering value.
    ///
    /// A zero weight ignores `h` entirely, including an infinite one.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn f_cost(&self, weight: f64) -> f64 {
        if weight == 0.0 {
            return f64::from(self.g_cost);
        }
        weight * self.h_cost + f64::from(self.g_cost)
    }
}

/// Append-only node storage addressed by [`NodeId`].
///
/// Parent handles always point to lower indices, so truncating the arena
/// never leaves a dangling parent among the surviving nodes.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node and return its handle.
    ///
    /// # Panics
    ///
    /// Panics if the node's parent handle does not refer to an existing node.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        if let Some(parent) = node.parent {
            assert!(
                parent.0 < self.nodes.len(),
                "parent {parent:?} not in arena of {} nodes",
                self.nodes.len()
            );
        }
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SearchNode> {
        self.nodes.get_mut(id.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Handles and nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Drop every node stored at or after index `len`.
    pub fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len);
    }

    /// Handles from the root down to `id`, inclusive.
    #[must_use]
    pub fn lineage(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            path.push(node_id);
            current = self.nodes.get(node_id.0).and_then(SearchNode::parent);
        }
        path.reverse();
        path
    }

    /// Build a new arena holding only the lineage of `id`.
    ///
    /// Returns the compacted arena and the new handle of `id`. Parent links
    /// are remapped so the chain stays intact.
    #[must_use]
    pub fn retain_lineage(&self, id: NodeId) -> (Self, NodeId) {
        let mut compacted = Self::new();
        let mut last = None;
        for old in self.lineage(id) {
            let mut node = self.nodes[old.0].clone();
            node.parent = last;
            last = Some(compacted.push(node));
        }
        // lineage() always contains `id` itself.
        (compacted, last.unwrap_or(NodeId(0)))
    }
}

impl Index<NodeId> for NodeArena {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}

/// The frontier ordering key: `(f_cost, h_cost, creation_order)`.
///
/// Lower `f_cost` first, then lower `h_cost` (closer to the goal), then older
/// `creation_order` (FIFO). The order is total, so search order on tied
/// nodes is reproducible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontierKey {
    pub f_cost: f64,
    pub h_cost: f64,
    pub creation_order: u64,
}

impl FrontierKey {
    #[must_use]
    pub fn new(node: &SearchNode, weight: f64, creation_order: u64) -> Self {
        Self {
            f_cost: node.f_cost(weight),
            h_cost: node.h_cost(),
            creation_order,
        }
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .total_cmp(&other.f_cost)
            .then(self.h_cost.total_cmp(&other.h_cost))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
