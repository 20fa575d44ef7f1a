//! The box-pushing puzzle: grid geometry, level parsing, the search problem
//! and its heuristics.

mod direction;
pub mod heuristics;
mod layout;
mod level;
mod point;
mod problem;
mod state;

pub use direction::Direction;
pub use layout::Layout;
pub use level::{Level, LevelError};
pub use point::Point;
pub use problem::SokobanProblem;
pub use state::SokobanState;
