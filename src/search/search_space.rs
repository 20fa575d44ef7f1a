use crate::search::{HeuristicValue, NodeId, Plan, SearchNode};
use segvec::{Linear, SegVec};

/// A [`SearchSpace`] owns every node generated during one search together with
/// the state each node stands for. Nodes are never removed, so a node id stays
/// valid for the lifetime of the search and parent links can always be
/// followed back to the root.
///
/// Unlike a closed list, the search space may hold several nodes for the same
/// state, one per path that was pushed to the frontier.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    nodes: SegVec<SearchNode<A>, Linear>,
    states: SegVec<S, Linear>,
}

impl<S, A: Clone> SearchSpace<S, A> {
    pub fn new(initial_state: S, h: HeuristicValue) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        nodes.push(SearchNode::new_root(NodeId::new(0), h));
        states.push(initial_state);
        Self { nodes, states }
    }

    /// Record a new node for `state`, reached from `parent_id` via `action`.
    pub fn insert_node(
        &mut self,
        state: S,
        action: A,
        parent_id: NodeId,
        g: HeuristicValue,
        h: HeuristicValue,
    ) -> &mut SearchNode<A> {
        let node_id = NodeId::new(self.nodes.len());
        self.nodes
            .push(SearchNode::new_child(node_id, parent_id, action, g, h));
        self.states.push(state);
        self.get_node_mut(node_id)
    }

    #[inline(always)]
    pub fn root_id(&self) -> NodeId {
        NodeId::new(0)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<A> {
        self.nodes.get(node_id.index()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode<A> {
        self.nodes.get_mut(node_id.index()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.states.get(node_id.index()).expect("Invalid node id")
    }

    /// Follow parent links from `goal_id` back to the root and return the
    /// actions along the way in execution order.
    pub fn extract_plan(&self, goal_id: NodeId) -> Plan<A> {
        let mut steps = vec![];
        let mut current_node = self.get_node(goal_id);
        while let Some(parent_id) = current_node.get_parent_id() {
            if let Some(action) = current_node.get_action() {
                steps.push(action.clone());
            }
            current_node = self.get_node(parent_id);
        }
        steps.reverse();
        Plan::new(steps)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }
}
