//! Frontier containers. All of them store node ids only; the nodes live in
//! the [`crate::search::SearchSpace`]. The priority given on push is ignored
//! by the queue and stack disciplines.

use crate::search::{HeuristicValue, NodeId};
use priority_queue::PriorityQueue;
use std::{
    cmp::Reverse,
    collections::VecDeque,
    fmt::Debug,
};

pub trait Frontier: Debug {
    fn push(&mut self, node_id: NodeId, priority: HeuristicValue);

    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node_id: NodeId, _priority: HeuristicValue) {
        self.queue.push_back(node_id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, node_id: NodeId, _priority: HeuristicValue) {
        self.stack.push(node_id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Lowest priority first. Node ids grow with generation order, so putting the
/// id in the key makes equal priorities pop in insertion order no matter how
/// the underlying heap orders equal keys.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    queue: PriorityQueue<NodeId, Reverse<(HeuristicValue, NodeId)>>,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node_id: NodeId, priority: HeuristicValue) {
        self.queue.push(node_id, Reverse((priority, node_id)));
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(node_id, _)| node_id)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
