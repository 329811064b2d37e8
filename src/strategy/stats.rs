//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one rollout decision.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Playouts performed.
    pub simulations: u32,

    /// Playouts that reached the end of the game (the rest hit the depth
    /// limit and were scored by points).
    pub completed_games: u32,

    /// Longest playout, in confirms.
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate simulations per second.
    #[must_use]
    pub fn simulations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.simulations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Share of playouts that ran to the end of the game.
    #[must_use]
    pub fn completion_rate(&self) -> f64 {
        if self.simulations == 0 {
            0.0
        } else {
            self.completed_games as f64 / self.simulations as f64
        }
    }
}
