use crate::search::{HeuristicValue, Plan, SearchProblem};
use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use std::collections::{HashMap, HashSet};

pub const OPEN_GRID_LEVEL_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/sokoban/open_grid.txt"
));

pub const RAGGED_LEVEL_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/sokoban/ragged.txt"
));

pub const CORNER_DEADLOCK_LEVEL_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/sokoban/corner_deadlock.txt"
));

pub const WALL_DEADLOCK_LEVEL_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/sokoban/wall_deadlock.txt"
));

pub const ROOM_LEVEL_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/sokoban/room.txt"
));

pub const TWO_CRATES_LEVEL_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/sokoban/two_crates.txt"
));

/// A small explicit graph as a search problem. States are node names and the
/// action of moving along an edge is named after the edge's target.
#[derive(Debug, Clone)]
pub struct GraphProblem {
    graph: DiGraph<&'static str, f64>,
    nodes: HashMap<&'static str, NodeIndex>,
    initial: &'static str,
    goals: HashSet<&'static str>,
    estimates: HashMap<&'static str, f64>,
}

impl GraphProblem {
    pub fn new(
        initial: &'static str,
        edges: &[(&'static str, &'static str, f64)],
        goals: &[&'static str],
    ) -> Self {
        let mut graph = DiGraph::new();
        let mut nodes = HashMap::new();
        for name in std::iter::once(initial).chain(edges.iter().flat_map(|(u, v, _)| [*u, *v])) {
            nodes.entry(name).or_insert_with(|| graph.add_node(name));
        }
        for (u, v, cost) in edges {
            graph.add_edge(nodes[u], nodes[v], *cost);
        }
        Self {
            graph,
            nodes,
            initial,
            goals: goals.iter().copied().collect(),
            estimates: HashMap::new(),
        }
    }

    pub fn with_estimates(mut self, estimates: &[(&'static str, f64)]) -> Self {
        self.estimates.extend(estimates.iter().copied());
        self
    }

    pub fn initial_state(&self) -> &'static str {
        self.initial
    }

    /// The estimate given with [`GraphProblem::with_estimates`], zero for
    /// nodes without one. Usable directly as a heuristic.
    pub fn estimate(&mut self, state: &&'static str) -> HeuristicValue {
        HeuristicValue::from(self.estimates.get(state).copied().unwrap_or(0.))
    }

    pub fn plan_cost(&self, plan: &Plan<&'static str>) -> f64 {
        let mut state = self.initial;
        let mut total = 0.;
        for action in plan.steps() {
            total += self.cost(&state, action);
            state = self.successor(&state, action);
        }
        total
    }
}

impl SearchProblem for GraphProblem {
    type State = &'static str;
    type Action = &'static str;

    fn is_goal(&self, state: &&'static str) -> bool {
        self.goals.contains(state)
    }

    fn actions(&self, state: &&'static str) -> Vec<&'static str> {
        let Some(&node) = self.nodes.get(state) else {
            return vec![];
        };
        // petgraph lists the newest edge first
        let mut edges: Vec<_> = self.graph.edges(node).collect();
        edges.sort_by_key(|edge| edge.id());
        edges
            .into_iter()
            .map(|edge| self.graph[edge.target()])
            .collect()
    }

    fn successor(&self, _state: &&'static str, action: &&'static str) -> &'static str {
        *action
    }

    fn cost(&self, state: &&'static str, action: &&'static str) -> f64 {
        let (from, to) = (self.nodes[state], self.nodes[action]);
        self.graph
            .edges_connecting(from, to)
            .map(|edge| *edge.weight())
            .fold(f64::INFINITY, f64::min)
    }
}

/// The graph used by most search tests:
///
/// ```text
/// S -1-> A -3-> B -3-> D -3-> G
/// |      |             ^      ^
/// |      +-1-> C --1---+      |
/// |            +------2-------+
/// +-----------12--------------+
/// ```
///
/// The cheapest plan is A, C, G with cost 4. The only one-step plan is G.
pub fn weighted_diamond() -> GraphProblem {
    GraphProblem::new(
        "S",
        &[
            ("S", "A", 1.),
            ("S", "G", 12.),
            ("A", "B", 3.),
            ("A", "C", 1.),
            ("B", "D", 3.),
            ("C", "D", 1.),
            ("C", "G", 2.),
            ("D", "G", 3.),
        ],
        &["G"],
    )
    .with_estimates(&[
        ("S", 3.),
        ("A", 2.),
        ("B", 5.),
        ("C", 2.),
        ("D", 3.),
        ("G", 0.),
    ])
}
