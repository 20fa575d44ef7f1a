use crate::search::{Heuristic, ZeroHeuristic};
use crate::sokoban::{
    heuristics::{BoxPushingHeuristic, HeuristicConfig, PlayerDistanceHeuristic},
    SokobanProblem,
};
use std::fmt::Display;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(name = "zero", help = "The blind heuristic, always zero.")]
    Zero,
    #[clap(help = "Distance from the player to the nearest crate, minus one.")]
    PlayerDistance,
    #[default]
    #[clap(help = "Deadlock detection plus crate-goal assignment and player distance.")]
    BoxPushing,
}

impl HeuristicName {
    /// Build the named heuristic. Only the box-pushing heuristic reads
    /// `config`.
    pub fn create(&self, config: &HeuristicConfig) -> Box<dyn Heuristic<SokobanProblem>> {
        match self {
            HeuristicName::Zero => Box::new(ZeroHeuristic),
            HeuristicName::PlayerDistance => Box::new(PlayerDistanceHeuristic),
            HeuristicName::BoxPushing => Box::new(BoxPushingHeuristic::new(config.clone())),
        }
    }
}

impl Display for HeuristicName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeuristicName::Zero => write!(f, "zero"),
            HeuristicName::PlayerDistance => write!(f, "player-distance"),
            HeuristicName::BoxPushing => write!(f, "box-pushing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::HeuristicValue;
    use crate::sokoban::Level;
    use crate::test_utils::*;

    #[test]
    fn created_heuristics_evaluate_initial_state() {
        let mut problem =
            SokobanProblem::from_level(Level::from_text(OPEN_GRID_LEVEL_TEXT).unwrap());
        let state = problem.initial_state().clone();
        let config = HeuristicConfig::default();

        let expected = [
            (HeuristicName::Zero, 0.),
            (HeuristicName::PlayerDistance, 3.),
            (HeuristicName::BoxPushing, 4.),
        ];
        for (name, value) in expected {
            let mut heuristic = name.create(&config);
            assert_eq!(
                heuristic.evaluate(&mut problem, &state),
                HeuristicValue::from(value),
                "{name}"
            );
        }
    }
}
