mod assignment;
mod box_pushing;
mod config;
mod deadlock;
mod heuristic_name;
mod layout_analysis;
mod player_distance;

pub use assignment::{assignment_cost, exact_assignment_cost, greedy_assignment_cost};
pub use box_pushing::BoxPushingHeuristic;
pub use config::{ConfigError, HeuristicConfig};
pub use deadlock::{
    find_deadlocked_crate, is_corner_deadlock, is_corridor_deadlock, is_deadlocked_crate,
};
pub use heuristic_name::HeuristicName;
pub use layout_analysis::LayoutAnalysis;
pub use player_distance::PlayerDistanceHeuristic;
