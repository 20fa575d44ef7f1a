mod frontier;
mod graph_search;
mod search_engine;
mod search_statistics;
mod strategy;
mod termination_condition;

pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
pub use graph_search::graph_search;
pub use search_engine::{
    astar_search, best_first_search, breadth_first_search, depth_first_search,
    uniform_cost_search, SearchEngineName, SearchResult,
};
pub use search_statistics::SearchStatistics;
pub use strategy::{DuplicateDetection, FrontierKind, GoalTest, PriorityKey, Strategy};
pub use termination_condition::TerminationCondition;
