//! The capability contract every search engine consumes. A problem only needs
//! to answer four questions about its states: is this a goal, which actions
//! are available, where does an action lead, and what does it cost.

use std::{fmt::Debug, hash::Hash};

pub trait SearchProblem {
    /// States are used as keys of the visited and memo tables, and are cloned
    /// into the search space whenever a node is generated.
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// The actions applicable in `state`. The order of the returned actions
    /// is the order in which successors are generated, and hence the order
    /// used to break ties between equally good nodes.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action` in `state`. Only required to be
    /// defined for actions returned by [`SearchProblem::actions`].
    fn successor(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// The non-negative cost of applying `action` in `state`.
    fn cost(&self, state: &Self::State, action: &Self::Action) -> f64;
}
