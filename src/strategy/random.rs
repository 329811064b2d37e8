//! Uniform random seat.

use super::Strategy;
use crate::core::GameRng;
use crate::game::Game;

/// Picks uniformly among the movable cells.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Use an existing RNG, e.g. a fork of a playout RNG.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_target(&mut self, game: &Game) -> Option<usize> {
        let n = game.movable_cells().len();
        if game.is_game_over() || n == 0 {
            return None;
        }
        Some(self.rng.gen_range_usize(0..n))
    }
}
