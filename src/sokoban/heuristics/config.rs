use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read heuristic config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse heuristic config")]
    Parse(#[from] toml::de::Error),
    #[error("invalid heuristic config: {0}")]
    Invalid(String),
}

/// Tuning knobs of [`crate::sokoban::heuristics::BoxPushingHeuristic`]. None
/// of them affect correctness of the deadlock detection.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct HeuristicConfig {
    /// Weight of the distance from the player to the nearest crate.
    pub player_weight: f64,
    /// The crate-goal assignment is solved exactly while it has no more
    /// mappings than this many crates on as many goals. Larger instances,
    /// including small crate counts with many spare goals, use the greedy
    /// assignment.
    pub exact_assignment_limit: usize,
    /// Heuristic values are rounded to a multiple of this. Zero disables
    /// rounding.
    pub granularity: f64,
    /// Also look for crates stuck along a wall without a goal, not just
    /// crates stuck in corners.
    pub corridor_deadlocks: bool,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            player_weight: 0.45,
            exact_assignment_limit: 7,
            granularity: 1.0,
            corridor_deadlocks: true,
        }
    }
}

impl HeuristicConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: HeuristicConfig = toml::from_str(text)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if !self.player_weight.is_finite() || self.player_weight < 0. {
            return Err(ConfigError::Invalid(format!(
                "player-weight must be a non-negative number, got {}",
                self.player_weight
            )));
        }
        if !self.granularity.is_finite() || self.granularity < 0. {
            return Err(ConfigError::Invalid(format!(
                "granularity must be a non-negative number, got {}",
                self.granularity
            )));
        }
        Ok(())
    }

    pub fn with_player_weight(self, player_weight: f64) -> Self {
        Self {
            player_weight,
            ..self
        }
    }

    pub fn with_granularity(self, granularity: f64) -> Self {
        Self {
            granularity,
            ..self
        }
    }

    pub fn with_exact_assignment_limit(self, exact_assignment_limit: usize) -> Self {
        Self {
            exact_assignment_limit,
            ..self
        }
    }

    pub fn with_corridor_deadlocks(self, corridor_deadlocks: bool) -> Self {
        Self {
            corridor_deadlocks,
            ..self
        }
    }

    /// Round `value` to the configured granularity. Infinity is kept as is.
    pub fn round(&self, value: f64) -> f64 {
        if self.granularity == 0. || !value.is_finite() {
            return value;
        }
        (value / self.granularity).round() * self.granularity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::io::Write;

    #[test]
    fn missing_fields_use_defaults() {
        let config = HeuristicConfig::from_toml("player-weight = 0.3").unwrap();
        assert_eq!(config, HeuristicConfig::default().with_player_weight(0.3));
    }

    #[test]
    fn rejects_unknown_and_invalid_fields() {
        assert!(matches!(
            HeuristicConfig::from_toml("player_weight = 0.3"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            HeuristicConfig::from_toml("granularity = -1.0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "player-weight = 0.25\nexact-assignment-limit = 4\ngranularity = 0.1\ncorridor-deadlocks = false"
        )
        .unwrap();
        let config = HeuristicConfig::from_path(file.path()).unwrap();
        assert_approx_eq!(config.player_weight, 0.25);
        assert_eq!(config.exact_assignment_limit, 4);
        assert!(!config.corridor_deadlocks);
    }

    #[test]
    fn rounding() {
        let config = HeuristicConfig::default();
        assert_approx_eq!(config.round(3.8), 4.0);
        assert_approx_eq!(config.round(3.2), 3.0);
        assert!(config.round(f64::INFINITY).is_infinite());

        let fine = config.with_granularity(0.1);
        assert_approx_eq!(fine.round(3.84), 3.8);

        let exact = HeuristicConfig::default().with_granularity(0.);
        assert_approx_eq!(exact.round(3.84), 3.84);
    }
}
