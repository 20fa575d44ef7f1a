//! One-to-one crate-goal assignments under Manhattan distance. Every crate
//! gets a distinct goal; spare goals stay unused. All functions return `None`
//! when there are more crates than goals, since no assignment exists then.

use crate::sokoban::{heuristics::LayoutAnalysis, Point};
use itertools::Itertools;

/// The cheapest assignment, found by trying every injective mapping of
/// crates to goals. Only suitable for a handful of crates.
pub fn exact_assignment_cost(crates: &[Point], goals: &[Point]) -> Option<u32> {
    if crates.len() > goals.len() {
        return None;
    }
    if crates.is_empty() {
        return Some(0);
    }

    let costs: Vec<Vec<u32>> = crates
        .iter()
        .map(|crate_pos| {
            goals
                .iter()
                .map(|goal| crate_pos.manhattan_distance(goal))
                .collect()
        })
        .collect();

    (0..goals.len())
        .permutations(crates.len())
        .map(|assignment| {
            assignment
                .iter()
                .enumerate()
                .map(|(crate_index, &goal_index)| costs[crate_index][goal_index])
                .sum::<u32>()
        })
        .min()
}

/// A cheap approximation of the cheapest assignment. Crates closest to any
/// goal choose first, each taking its nearest goal that is still free. Ties
/// go to the earlier crate and goal in the given order.
pub fn greedy_assignment_cost(
    crates: &[Point],
    goals: &[Point],
    analysis: &LayoutAnalysis,
) -> Option<u32> {
    if crates.len() > goals.len() {
        return None;
    }

    let order = crates.iter().sorted_by_key(|crate_pos| {
        analysis
            .nearest_goal_distance(crate_pos)
            .unwrap_or(u32::MAX)
    });

    let mut taken = vec![false; goals.len()];
    let mut total = 0;
    for crate_pos in order {
        let (goal_index, distance) = goals
            .iter()
            .enumerate()
            .filter(|(goal_index, _)| !taken[*goal_index])
            .map(|(goal_index, goal)| (goal_index, crate_pos.manhattan_distance(goal)))
            .min_by_key(|&(goal_index, distance)| (distance, goal_index))?;
        taken[goal_index] = true;
        total += distance;
    }
    Some(total)
}

/// Number of injective mappings of `crates` crates onto `goals` goals, or
/// `None` if it does not fit in a `u64`.
fn num_assignments(crates: usize, goals: usize) -> Option<u64> {
    if crates > goals {
        return Some(0);
    }
    ((goals - crates + 1)..=goals).try_fold(1u64, |total, factor| total.checked_mul(factor as u64))
}

/// The exact assignment while there are at most as many crate-goal mappings
/// as for `exact_limit` crates on as many goals, the greedy one otherwise.
/// Spare goals count towards the limit: seven crates on seven goals are
/// solved exactly, seven crates on thirteen goals are not.
pub fn assignment_cost(
    crates: &[Point],
    goals: &[Point],
    analysis: &LayoutAnalysis,
    exact_limit: usize,
) -> Option<u32> {
    let budget = num_assignments(exact_limit, exact_limit);
    let needed = num_assignments(crates.len(), goals.len());
    match (needed, budget) {
        (Some(needed), Some(budget)) if needed <= budget => exact_assignment_cost(crates, goals),
        (Some(_), None) => exact_assignment_cost(crates, goals),
        _ => greedy_assignment_cost(crates, goals, analysis),
    }
}
