//! A [`Strategy`] is everything that differs between the search engines:
//! which frontier discipline is used, when goals are tested, when duplicate
//! states are detected, and how frontier priorities are computed. The
//! traversal itself lives in [`crate::search::search_engines::graph_search`].

use crate::search::{
    search_engines::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier},
    HeuristicValue,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierKind {
    Fifo,
    Lifo,
    Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalTest {
    /// Successors are tested before they are pushed.
    OnGeneration,
    /// Nodes are tested when they are popped.
    OnExpansion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateDetection {
    /// A successor whose state was ever generated before is dropped.
    OnGeneration,
    /// A popped node whose state was already expanded is skipped.
    OnExpansion,
    /// A popped node is skipped if its state was already expanded with a
    /// g-value at most as large as the node's.
    OnExpansionByCost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityKey {
    /// The frontier ignores priorities.
    None,
    /// Accumulated cost.
    G,
    /// Heuristic value.
    H,
    /// Accumulated cost plus heuristic value.
    F,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    pub frontier: FrontierKind,
    pub goal_test: GoalTest,
    pub duplicate_detection: DuplicateDetection,
    pub priority_key: PriorityKey,
}

impl Strategy {
    pub const BREADTH_FIRST: Strategy = Strategy {
        frontier: FrontierKind::Fifo,
        goal_test: GoalTest::OnGeneration,
        duplicate_detection: DuplicateDetection::OnGeneration,
        priority_key: PriorityKey::None,
    };

    pub const DEPTH_FIRST: Strategy = Strategy {
        frontier: FrontierKind::Lifo,
        goal_test: GoalTest::OnExpansion,
        duplicate_detection: DuplicateDetection::OnGeneration,
        priority_key: PriorityKey::None,
    };

    pub const UNIFORM_COST: Strategy = Strategy {
        frontier: FrontierKind::Priority,
        goal_test: GoalTest::OnExpansion,
        duplicate_detection: DuplicateDetection::OnExpansionByCost,
        priority_key: PriorityKey::G,
    };

    pub const GREEDY_BEST_FIRST: Strategy = Strategy {
        frontier: FrontierKind::Priority,
        goal_test: GoalTest::OnExpansion,
        duplicate_detection: DuplicateDetection::OnExpansion,
        priority_key: PriorityKey::H,
    };

    pub const ASTAR: Strategy = Strategy {
        frontier: FrontierKind::Priority,
        goal_test: GoalTest::OnExpansion,
        duplicate_detection: DuplicateDetection::OnExpansionByCost,
        priority_key: PriorityKey::F,
    };

    pub fn create_frontier(&self) -> Box<dyn Frontier> {
        match self.frontier {
            FrontierKind::Fifo => Box::new(FifoFrontier::new()),
            FrontierKind::Lifo => Box::new(LifoFrontier::new()),
            FrontierKind::Priority => Box::new(PriorityFrontier::new()),
        }
    }

    pub fn uses_heuristic(&self) -> bool {
        matches!(self.priority_key, PriorityKey::H | PriorityKey::F)
    }

    pub fn priority(&self, g: HeuristicValue, h: HeuristicValue) -> HeuristicValue {
        match self.priority_key {
            PriorityKey::None => HeuristicValue::from(0.),
            PriorityKey::G => g,
            PriorityKey::H => h,
            PriorityKey::F => g + h,
        }
    }
}
