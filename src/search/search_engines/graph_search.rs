//! The traversal shared by every search engine. Each engine is this loop
//! instantiated with a different [`Strategy`]:
//!
//! 1. pop the next node from the frontier,
//! 2. skip it if its state is already settled (for engines that settle on
//!    expansion),
//! 3. test it for the goal (for engines that test on expansion),
//! 4. generate its successors, test or filter them (for engines that do so on
//!    generation), evaluate the heuristic if needed and push them.

use crate::search::{
    search_engines::{
        DuplicateDetection, GoalTest, SearchResult, SearchStatistics, Strategy,
        TerminationCondition,
    },
    Heuristic, HeuristicValue, NodeId, Plan, SearchProblem, SearchSpace,
};
use std::collections::HashMap;
use tracing::{debug, info, trace};

pub fn graph_search<P, H>(
    strategy: &Strategy,
    problem: &mut P,
    initial_state: &P::State,
    heuristic: &mut H,
    termination: &mut TerminationCondition,
) -> (SearchResult<P::Action>, SearchStatistics)
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    let mut statistics = SearchStatistics::new();

    if problem.is_goal(initial_state) {
        info!("initial state is a goal state");
        statistics.finalise_search();
        return (SearchResult::Success(Plan::empty()), statistics);
    }

    let zero = HeuristicValue::from(0.);
    let initial_h = if strategy.uses_heuristic() {
        statistics.increment_evaluated_nodes();
        heuristic.evaluate(problem, initial_state)
    } else {
        zero
    };
    info!(initial_heuristic_value = initial_h.into_inner());

    let mut search_space: SearchSpace<P::State, P::Action> =
        SearchSpace::new(initial_state.clone(), initial_h);
    let mut frontier = strategy.create_frontier();
    // Visited states for engines that detect duplicates on generation, best
    // expanded g-values for the others.
    let mut closed: HashMap<P::State, HeuristicValue> = HashMap::new();

    if strategy.duplicate_detection == DuplicateDetection::OnGeneration {
        closed.insert(initial_state.clone(), zero);
    }
    let root_id = search_space.root_id();
    frontier.push(root_id, strategy.priority(zero, initial_h));
    statistics.increment_generated_nodes();

    while let Some(node_id) = frontier.pop() {
        if let Some(result) = termination.should_terminate(&statistics) {
            info!(?result, "search terminated early");
            statistics.finalise_search();
            termination.finalise();
            return (result, statistics);
        }

        let g_value = search_space.get_node(node_id).get_g();
        let state = search_space.get_state(node_id).clone();

        let already_settled = match strategy.duplicate_detection {
            DuplicateDetection::OnGeneration => false,
            DuplicateDetection::OnExpansion => closed.contains_key(&state),
            DuplicateDetection::OnExpansionByCost => closed
                .get(&state)
                .is_some_and(|&best_g| best_g <= g_value),
        };
        if already_settled {
            search_space.get_node_mut(node_id).prune();
            statistics.increment_pruned_nodes();
            continue;
        }
        if strategy.duplicate_detection != DuplicateDetection::OnGeneration {
            closed.insert(state.clone(), g_value);
        }

        search_space.get_node_mut(node_id).close();
        statistics.increment_expanded_nodes();
        trace!(node = node_id.index(), g = g_value.into_inner(), "expanding");

        if strategy.goal_test == GoalTest::OnExpansion && problem.is_goal(&state) {
            return finish(&search_space, node_id, statistics, termination);
        }

        for action in problem.actions(&state) {
            let successor = problem.successor(&state, &action);
            let child_g = g_value + HeuristicValue::from(problem.cost(&state, &action));

            if strategy.duplicate_detection == DuplicateDetection::OnGeneration {
                if closed.contains_key(&successor) {
                    statistics.increment_pruned_nodes();
                    continue;
                }
                closed.insert(successor.clone(), child_g);
            }

            if strategy.goal_test == GoalTest::OnGeneration && problem.is_goal(&successor) {
                let child_id = search_space
                    .insert_node(successor, action, node_id, child_g, zero)
                    .get_node_id();
                statistics.increment_generated_nodes();
                return finish(&search_space, child_id, statistics, termination);
            }

            let child_h = if strategy.uses_heuristic() {
                statistics.increment_evaluated_nodes();
                heuristic.evaluate(problem, &successor)
            } else {
                zero
            };

            let child = search_space.insert_node(successor, action, node_id, child_g, child_h);
            if child.is_deadend() {
                statistics.increment_deadend_nodes();
            }
            let child_id = child.get_node_id();
            frontier.push(child_id, strategy.priority(child_g, child_h));
            statistics.increment_generated_nodes();
        }
        statistics.register_frontier_size(frontier.len());
    }

    info!("frontier exhausted, no solution exists");
    statistics.finalise_search();
    termination.finalise();
    (SearchResult::ProvablyUnsolvable, statistics)
}

fn finish<S, A: Clone>(
    search_space: &SearchSpace<S, A>,
    goal_id: NodeId,
    mut statistics: SearchStatistics,
    termination: &mut TerminationCondition,
) -> (SearchResult<A>, SearchStatistics) {
    let plan = search_space.extract_plan(goal_id);
    debug!(
        plan_length = plan.len(),
        plan_cost = search_space.get_node(goal_id).get_g().into_inner(),
        "goal found"
    );
    statistics.finalise_search();
    termination.finalise();
    (SearchResult::Success(plan), statistics)
}
