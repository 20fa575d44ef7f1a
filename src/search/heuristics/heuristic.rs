use crate::search::SearchProblem;
use ordered_float::OrderedFloat;

/// Heuristic values are floats wrapped so that they are totally ordered and
/// can be used as priority queue keys. Positive infinity means the state was
/// proven to have no path to a goal.
pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic<P: SearchProblem> {
    /// Estimate the cost of reaching a goal from `state`. The problem is
    /// handed over mutably so that evaluators can keep per-problem caches in
    /// it, see [`crate::search::HeuristicMemo`].
    fn evaluate(&mut self, problem: &mut P, state: &P::State) -> HeuristicValue;
}

/// Any function of the right shape is a heuristic, which lets callers pass a
/// plain function or closure where an informed search expects one.
impl<P, F> Heuristic<P> for F
where
    P: SearchProblem,
    F: FnMut(&mut P, &P::State) -> HeuristicValue,
{
    fn evaluate(&mut self, problem: &mut P, state: &P::State) -> HeuristicValue {
        self(problem, state)
    }
}
