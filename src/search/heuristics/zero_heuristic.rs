use crate::search::{Heuristic, HeuristicValue, SearchProblem};

/// The blind heuristic. With it, A* behaves like uniform-cost search.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl<P: SearchProblem> Heuristic<P> for ZeroHeuristic {
    fn evaluate(&mut self, _problem: &mut P, _state: &P::State) -> HeuristicValue {
        (0.).into()
    }
}
