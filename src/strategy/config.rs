//! Rollout strategy configuration parameters.

use serde::{Deserialize, Serialize};

/// Rollout strategy configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RolloutConfig {
    /// Playouts per decision.
    pub iterations: u32,

    /// UCB1 exploration constant (default: sqrt(2) = 1.414).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Maximum confirms per playout before it is scored by points
    /// (0 = play to the end). Random play can shuttle back and forth for a
    /// long time, so an unlimited depth is rarely what you want.
    pub max_depth: u32,

    /// Random seed for playouts.
    /// Same seed produces deterministic decisions.
    pub seed: u64,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            iterations: 400,
            exploration_constant: std::f64::consts::SQRT_2,
            max_depth: 60,
            seed: 42,
        }
    }
}

impl RolloutConfig {
    /// Create a new config with a custom number of playouts.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Create a new config with custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with custom max depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RolloutConfig::default();
        assert!((config.exploration_constant - std::f64::consts::SQRT_2).abs() < 0.001);
        assert_eq!(config.iterations, 400);
        assert_eq!(config.max_depth, 60);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = RolloutConfig::default()
            .with_iterations(10)
            .with_exploration(2.0)
            .with_seed(123)
            .with_max_depth(50);

        assert_eq!(config.iterations, 10);
        assert_eq!(config.exploration_constant, 2.0);
        assert_eq!(config.seed, 123);
        assert_eq!(config.max_depth, 50);
    }

    #[test]
    fn test_serialization() {
        let config = RolloutConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RolloutConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
