//! Domain-independent search: the problem contract, heuristics, and the five
//! search engines built on one traversal loop.

mod heuristic_memo;
pub mod heuristics;
mod plan;
mod search_node;
mod search_problem;
pub mod search_engines;
mod search_space;
mod validate;
mod verbosity;

pub use heuristic_memo::HeuristicMemo;
pub use heuristics::{Heuristic, HeuristicValue, ZeroHeuristic};
pub use plan::Plan;
pub use search_node::{NodeId, SearchNode, SearchNodeStatus};
pub use search_engines::{
    astar_search, best_first_search, breadth_first_search, depth_first_search,
    uniform_cost_search,
};
pub use search_problem::SearchProblem;
pub use search_space::SearchSpace;
pub use validate::{validate, ValidationError};
pub use verbosity::Verbosity;
