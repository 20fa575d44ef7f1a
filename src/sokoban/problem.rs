use crate::search::{HeuristicMemo, Plan, SearchProblem};
use crate::sokoban::{
    heuristics::{HeuristicConfig, LayoutAnalysis},
    Direction, Layout, Level, SokobanState,
};
use once_cell::unsync::OnceCell;
use std::rc::Rc;
use strum::IntoEnumIterator;
use tracing::debug;

/// A box-pushing puzzle instance. Besides the shared layout and the initial
/// state, the problem owns the mutable data heuristics keep about it: the
/// layout analysis, built the first time it is needed, and the memo of
/// heuristic values. Both belong to this instance only; two problems over the
/// same layout never share them.
#[derive(Debug)]
pub struct SokobanProblem {
    layout: Rc<Layout>,
    initial_state: SokobanState,
    analysis: OnceCell<LayoutAnalysis>,
    memo: HeuristicMemo<SokobanState>,
    /// The configuration the memoised values were computed with.
    memo_config: Option<HeuristicConfig>,
}

impl SokobanProblem {
    pub fn new(layout: Rc<Layout>, initial_state: SokobanState) -> Self {
        Self {
            layout,
            initial_state,
            analysis: OnceCell::new(),
            memo: HeuristicMemo::new(),
            memo_config: None,
        }
    }

    pub fn from_level(level: Level) -> Self {
        Self::new(Rc::new(level.layout), level.initial_state)
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn initial_state(&self) -> &SokobanState {
        &self.initial_state
    }

    /// Layout-derived data, computed once per problem.
    pub fn analysis(&self) -> &LayoutAnalysis {
        self.analysis
            .get_or_init(|| LayoutAnalysis::new(&self.layout))
    }

    pub fn memo(&self) -> &HeuristicMemo<SokobanState> {
        &self.memo
    }

    /// The memo of heuristic values computed with `config`. The memo holds
    /// values of one configuration at a time; asking for another one clears
    /// it first.
    pub fn memo_for(&mut self, config: &HeuristicConfig) -> &mut HeuristicMemo<SokobanState> {
        if self.memo_config.as_ref() != Some(config) {
            if !self.memo.is_empty() {
                debug!(entries = self.memo.len(), "heuristic config changed, clearing memo");
            }
            self.memo.clear();
            self.memo_config = Some(config.clone());
        }
        &mut self.memo
    }

    /// Whether moving in `direction` from `state` pushes a crate.
    pub fn is_push(&self, state: &SokobanState, direction: &Direction) -> bool {
        state.has_crate(&(state.player + direction.offset()))
    }

    /// The number of moves in `plan` that push a crate, replayed from the
    /// initial state.
    pub fn count_pushes(&self, plan: &Plan<Direction>) -> usize {
        let mut state = self.initial_state.clone();
        let mut pushes = 0;
        for direction in plan.steps() {
            if self.is_push(&state, direction) {
                pushes += 1;
            }
            state = self.successor(&state, direction);
        }
        pushes
    }

    /// The states visited by `plan`, starting with the initial state.
    pub fn trajectory(&self, plan: &Plan<Direction>) -> Vec<SokobanState> {
        let mut states = vec![self.initial_state.clone()];
        for direction in plan.steps() {
            let next = self.successor(states.last().unwrap_or(&self.initial_state), direction);
            states.push(next);
        }
        states
    }
}

impl SearchProblem for SokobanProblem {
    type State = SokobanState;
    type Action = Direction;

    fn is_goal(&self, state: &SokobanState) -> bool {
        state.crates.iter().all(|crate_pos| self.layout.is_goal(crate_pos))
    }

    fn actions(&self, state: &SokobanState) -> Vec<Direction> {
        Direction::iter()
            .filter(|direction| {
                let target = state.player + direction.offset();
                if !self.layout.is_walkable(&target) {
                    return false;
                }
                if !state.has_crate(&target) {
                    return true;
                }
                let beyond = target + direction.offset();
                self.layout.is_walkable(&beyond) && !state.has_crate(&beyond)
            })
            .collect()
    }

    fn successor(&self, state: &SokobanState, action: &Direction) -> SokobanState {
        let target = state.player + action.offset();
        let mut crates = state.crates.clone();
        if crates.remove(&target) {
            crates.insert(target + action.offset());
        }
        SokobanState {
            player: target,
            crates,
        }
    }

    fn cost(&self, _state: &SokobanState, _action: &Direction) -> f64 {
        1.
    }
}
