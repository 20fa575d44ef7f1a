//! The main heuristic of the box-pushing domain. It is built from three
//! pieces:
//!
//! - deadlock detection, which returns infinity for states in which some crate
//!   can provably never reach a goal,
//! - the cost of a one-to-one crate-goal assignment under Manhattan distance,
//!   a relaxation of the pushes still needed,
//! - the distance from the player to the nearest crate, scaled down by a
//!   weight, since the player has to walk to a crate before pushing it.
//!
//! The result is not strictly admissible: the player term can make it
//! overestimate in tight levels. Values are rounded and memoised per problem.

use crate::search::{Heuristic, HeuristicValue, SearchProblem};
use crate::sokoban::{
    heuristics::{assignment_cost, find_deadlocked_crate, HeuristicConfig},
    Point, SokobanProblem, SokobanState,
};
use ordered_float::Float;
use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct BoxPushingHeuristic {
    config: HeuristicConfig,
}

impl BoxPushingHeuristic {
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    fn compute(&self, problem: &SokobanProblem, state: &SokobanState) -> HeuristicValue {
        if problem.is_goal(state) {
            return HeuristicValue::from(0.);
        }

        let layout = problem.layout();
        let analysis = problem.analysis();
        if let Some(crate_pos) =
            find_deadlocked_crate(analysis, layout, state, self.config.corridor_deadlocks)
        {
            trace!(%crate_pos, "deadlocked crate");
            return HeuristicValue::infinity();
        }

        let crates: Vec<Point> = state.crates.iter().copied().collect();
        let goals: Vec<Point> = layout.goals().iter().copied().collect();
        let Some(crate_cost) =
            assignment_cost(&crates, &goals, analysis, self.config.exact_assignment_limit)
        else {
            return HeuristicValue::infinity();
        };

        let player_cost = state.player_to_nearest_crate().unwrap_or(0);
        let estimate = crate_cost as f64 + self.config.player_weight * player_cost as f64;
        HeuristicValue::from(self.config.round(estimate))
    }
}

impl Heuristic<SokobanProblem> for BoxPushingHeuristic {
    fn evaluate(&mut self, problem: &mut SokobanProblem, state: &SokobanState) -> HeuristicValue {
        if let Some(value) = problem.memo_for(&self.config).get(state) {
            return value;
        }
        let value = self.compute(problem, state);
        problem.memo_for(&self.config).insert(state.clone(), value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{astar_search, best_first_search, validate, Plan};
    use crate::sokoban::{Direction, Level};
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    fn problem(text: &str) -> SokobanProblem {
        SokobanProblem::from_level(Level::from_text(text).unwrap())
    }

    #[test]
    fn open_grid_estimate() {
        let mut problem = problem(OPEN_GRID_LEVEL_TEXT);
        let state = problem.initial_state().clone();

        // Two pushes plus 0.45 times the four steps to the crate, rounded.
        let mut heuristic = BoxPushingHeuristic::default();
        assert_eq!(heuristic.evaluate(&mut problem, &state), HeuristicValue::from(4.));

        // Same problem, so the memo must not hand back the coarse value.
        let mut fine = BoxPushingHeuristic::new(HeuristicConfig::default().with_granularity(0.1));
        assert_approx_eq!(fine.evaluate(&mut problem, &state).into_inner(), 3.8);
        assert_eq!(heuristic.evaluate(&mut problem, &state), HeuristicValue::from(4.));
    }

    #[test]
    fn goal_state_is_zero() {
        let mut problem = problem(OPEN_GRID_LEVEL_TEXT);
        let solved = SokobanState::new(Point::new(0, 0), [Point::new(4, 2)]);
        let mut heuristic = BoxPushingHeuristic::default();
        assert_eq!(heuristic.evaluate(&mut problem, &solved), HeuristicValue::from(0.));
        assert!(problem.memo().contains(&solved));
    }

    #[test]
    fn corner_deadlock_is_infinite() {
        let mut problem = problem(CORNER_DEADLOCK_LEVEL_TEXT);
        let state = problem.initial_state().clone();
        let mut heuristic = BoxPushingHeuristic::default();
        assert!(heuristic.evaluate(&mut problem, &state).is_infinite());
        assert_eq!(
            problem.memo_for(&HeuristicConfig::default()).get(&state),
            Some(HeuristicValue::infinity())
        );
    }

    #[test]
    fn corridor_deadlock_can_be_disabled() {
        let mut problem = problem(WALL_DEADLOCK_LEVEL_TEXT);
        let state = problem.initial_state().clone();

        let mut strict = BoxPushingHeuristic::default();
        assert!(strict.evaluate(&mut problem, &state).is_infinite());

        let mut corners_only =
            BoxPushingHeuristic::new(HeuristicConfig::default().with_corridor_deadlocks(false));
        assert!(corners_only.evaluate(&mut problem, &state).is_finite());
    }

    #[test]
    fn non_deadlocked_states_are_non_negative() {
        let mut problem = problem(TWO_CRATES_LEVEL_TEXT);
        let mut heuristic = BoxPushingHeuristic::default();
        let initial_state = problem.initial_state().clone();
        let mut states = vec![initial_state.clone()];
        for direction in problem.actions(&initial_state) {
            states.push(problem.successor(&initial_state, &direction));
        }
        for state in states {
            let value = heuristic.evaluate(&mut problem, &state);
            assert!(value >= HeuristicValue::from(0.));
        }
    }

    #[test]
    fn memo_is_reused() {
        let mut problem = problem(TWO_CRATES_LEVEL_TEXT);
        let state = problem.initial_state().clone();
        let mut heuristic = BoxPushingHeuristic::default();
        let first = heuristic.evaluate(&mut problem, &state);
        let second = heuristic.evaluate(&mut problem, &state);
        assert_eq!(first, second);
        assert_eq!(problem.memo().len(), 1);
        assert_eq!(problem.memo().hits(), 1);
    }

    #[test]
    fn greedy_assignment_for_many_crates() {
        let mut problem = problem(TWO_CRATES_LEVEL_TEXT);
        let state = problem.initial_state().clone();
        let mut exact = BoxPushingHeuristic::default();
        let exact_value = exact.evaluate(&mut problem, &state);

        let mut greedy =
            BoxPushingHeuristic::new(HeuristicConfig::default().with_exact_assignment_limit(1));
        // The greedy assignment never undercuts the cheapest one.
        assert!(greedy.evaluate(&mut problem, &state) >= exact_value);
    }

    #[test]
    fn astar_solves_open_grid_optimally() {
        let mut problem = problem(OPEN_GRID_LEVEL_TEXT);
        let initial_state = problem.initial_state().clone();
        let mut heuristic = BoxPushingHeuristic::default();
        let plan = astar_search(&mut problem, &initial_state, &mut heuristic).unwrap();

        assert_eq!(plan.len(), 5);
        assert_eq!(problem.count_pushes(&plan), 2);
        assert_eq!(validate(&problem, &initial_state, &plan), Ok(()));
    }

    #[test]
    fn solutions_avoid_deadlocked_states() {
        let mut problem = problem(ROOM_LEVEL_TEXT);
        let initial_state = problem.initial_state().clone();

        let mut heuristic = BoxPushingHeuristic::default();
        let astar_plan = astar_search(&mut problem, &initial_state, &mut heuristic).unwrap();
        let gbfs_plan = best_first_search(&mut problem, &initial_state, &mut heuristic).unwrap();

        for plan in [astar_plan, gbfs_plan] {
            assert_eq!(validate(&problem, &initial_state, &plan), Ok(()));
            for state in problem.trajectory(&plan) {
                assert!(heuristic.evaluate(&mut problem, &state).is_finite());
            }
        }
    }

    #[test]
    fn deadlocked_start_has_no_solution() {
        let mut problem = problem(CORNER_DEADLOCK_LEVEL_TEXT);
        let initial_state = problem.initial_state().clone();
        let mut heuristic = BoxPushingHeuristic::default();
        let plan: Option<Plan<Direction>> =
            astar_search(&mut problem, &initial_state, &mut heuristic);
        assert_eq!(plan, None);
    }
}
