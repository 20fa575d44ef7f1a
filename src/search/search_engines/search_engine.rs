use crate::search::{
    search_engines::{graph_search, SearchStatistics, Strategy, TerminationCondition},
    Heuristic, Plan, SearchProblem, ZeroHeuristic,
};
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<A> {
    /// The search was successful. The plan is empty if the initial state is
    /// already a goal.
    Success(Plan<A>),
    /// The frontier was exhausted without reaching a goal
    ProvablyUnsolvable,
    /// The search engine ran out of time
    TimeLimitExceeded,
    /// The search engine ran out of memory
    MemoryLimitExceeded,
    /// The search engine expanded as many nodes as it was allowed to
    ExpansionLimitExceeded,
}

impl<A> SearchResult<A> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    /// The plan, if one was found.
    pub fn plan(self) -> Option<Plan<A>> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            _ => None,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Breadth-first search, shortest plans by number of actions.")]
    Bfs,
    #[clap(help = "Depth-first search.")]
    Dfs,
    #[clap(help = "Uniform-cost search, cheapest plans.")]
    Ucs,
    #[clap(help = "Greedy best-first search, ordered by heuristic value only.")]
    Gbfs,
    #[clap(
        name = "astar",
        help = "A* search, cheapest plans when the heuristic is admissible."
    )]
    Astar,
}

impl SearchEngineName {
    pub fn strategy(&self) -> Strategy {
        match self {
            SearchEngineName::Bfs => Strategy::BREADTH_FIRST,
            SearchEngineName::Dfs => Strategy::DEPTH_FIRST,
            SearchEngineName::Ucs => Strategy::UNIFORM_COST,
            SearchEngineName::Gbfs => Strategy::GREEDY_BEST_FIRST,
            SearchEngineName::Astar => Strategy::ASTAR,
        }
    }

    pub fn is_informed(&self) -> bool {
        self.strategy().uses_heuristic()
    }

    /// Run the named engine. Uninformed engines never call the heuristic.
    pub fn search<P, H>(
        &self,
        problem: &mut P,
        initial_state: &P::State,
        heuristic: &mut H,
        termination: &mut TerminationCondition,
    ) -> (SearchResult<P::Action>, SearchStatistics)
    where
        P: SearchProblem,
        H: Heuristic<P> + ?Sized,
    {
        graph_search(
            &self.strategy(),
            problem,
            initial_state,
            heuristic,
            termination,
        )
    }
}

impl Display for SearchEngineName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchEngineName::Bfs => "breadth-first search",
            SearchEngineName::Dfs => "depth-first search",
            SearchEngineName::Ucs => "uniform-cost search",
            SearchEngineName::Gbfs => "greedy best-first search",
            SearchEngineName::Astar => "A* search",
        };
        write!(f, "{}", name)
    }
}

fn unbounded<P, H>(
    name: SearchEngineName,
    problem: &mut P,
    initial_state: &P::State,
    heuristic: &mut H,
) -> Option<Plan<P::Action>>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    name.search(
        problem,
        initial_state,
        heuristic,
        &mut TerminationCondition::unbounded(),
    )
    .0
    .plan()
}

/// Shortest plan by number of actions, or `None` if there is no plan.
pub fn breadth_first_search<P: SearchProblem>(
    problem: &mut P,
    initial_state: &P::State,
) -> Option<Plan<P::Action>> {
    unbounded(SearchEngineName::Bfs, problem, initial_state, &mut ZeroHeuristic)
}

/// Some plan, or `None` if there is no plan.
pub fn depth_first_search<P: SearchProblem>(
    problem: &mut P,
    initial_state: &P::State,
) -> Option<Plan<P::Action>> {
    unbounded(SearchEngineName::Dfs, problem, initial_state, &mut ZeroHeuristic)
}

/// Cheapest plan, or `None` if there is no plan.
pub fn uniform_cost_search<P: SearchProblem>(
    problem: &mut P,
    initial_state: &P::State,
) -> Option<Plan<P::Action>> {
    unbounded(SearchEngineName::Ucs, problem, initial_state, &mut ZeroHeuristic)
}

/// Some plan found by greedily following `heuristic`, or `None` if there is
/// no plan.
pub fn best_first_search<P, H>(
    problem: &mut P,
    initial_state: &P::State,
    heuristic: &mut H,
) -> Option<Plan<P::Action>>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    unbounded(SearchEngineName::Gbfs, problem, initial_state, heuristic)
}

/// Cheapest plan if `heuristic` never overestimates, or `None` if there is no
/// plan.
pub fn astar_search<P, H>(
    problem: &mut P,
    initial_state: &P::State,
    heuristic: &mut H,
) -> Option<Plan<P::Action>>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    unbounded(SearchEngineName::Astar, problem, initial_state, heuristic)
}
