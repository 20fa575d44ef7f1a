use crate::search::HeuristicValue;
use ordered_float::Float;

/// Identifier of a node in a [`crate::search::SearchSpace`]. Ids are handed
/// out in generation order, so comparing two ids tells which node was
/// generated first. The frontiers rely on this to break ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// Node is in the frontier
    Open,
    /// Node has been popped from the frontier and expanded
    Closed,
    /// Node has been popped from the frontier but was discarded, because its
    /// state was already settled at a cost that is at least as good
    Pruned,
    /// The heuristic proved that no goal is reachable from the node
    Deadend,
}

/// A [`SearchNode`] is one entry of the search space: a state reached along
/// a particular path. It stores what is needed to rebuild that path (the
/// parent and the action applied to it) together with the node's g- and
/// h-values.
#[derive(Debug, Clone)]
pub struct SearchNode<A> {
    node_id: NodeId,
    status: SearchNodeStatus,
    /// G-value of the node, i.e. the accumulated cost to reach this node.
    g: HeuristicValue,
    /// H-value of the node, i.e. the heuristic estimate of the cost to reach
    /// the goal. Zero for searches that do not use a heuristic.
    h: HeuristicValue,
    /// Action that led to this node, `None` for the root
    action: Option<A>,
    /// Parent node, `None` for the root
    parent_id: Option<NodeId>,
}

impl<A> SearchNode<A> {
    /// Create the root node of a search space.
    pub fn new_root(node_id: NodeId, h: HeuristicValue) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::Open,
            g: HeuristicValue::from(0.),
            h,
            action: None,
            parent_id: None,
        }
        .check_deadend()
    }

    /// Create a node reached from `parent_id` by applying `action`.
    pub fn new_child(
        node_id: NodeId,
        parent_id: NodeId,
        action: A,
        g: HeuristicValue,
        h: HeuristicValue,
    ) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::Open,
            g,
            h,
            action: Some(action),
            parent_id: Some(parent_id),
        }
        .check_deadend()
    }

    fn check_deadend(mut self) -> Self {
        if self.h.is_infinite() {
            self.status = SearchNodeStatus::Deadend;
        }
        self
    }

    pub fn close(&mut self) {
        debug_assert_ne!(
            self.status,
            SearchNodeStatus::Closed,
            "Node must not be expanded twice"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn prune(&mut self) {
        self.status = SearchNodeStatus::Pruned;
    }

    #[inline(always)]
    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    #[inline(always)]
    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn get_parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    pub fn is_deadend(&self) -> bool {
        self.status == SearchNodeStatus::Deadend
    }
}
