use crate::search::{Heuristic, HeuristicValue, SearchProblem};
use crate::sokoban::{SokobanProblem, SokobanState};

/// A weak but admissible estimate: the player has to walk next to some crate
/// before the first push, so at least the distance to the nearest crate minus
/// one moves remain. Blind to walls and goals.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlayerDistanceHeuristic;

impl Heuristic<SokobanProblem> for PlayerDistanceHeuristic {
    fn evaluate(&mut self, problem: &mut SokobanProblem, state: &SokobanState) -> HeuristicValue {
        if problem.is_goal(state) {
            return HeuristicValue::from(0.);
        }
        let distance = state
            .player_to_nearest_crate()
            .map_or(0, |distance| distance.saturating_sub(1));
        HeuristicValue::from(distance as f64)
    }
}
