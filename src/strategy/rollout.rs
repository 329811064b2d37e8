//! Rollout strategy: UCB1 over the movable set with random playouts.
//!
//! Each iteration picks a root target by UCB1, plays it on a private copy
//! of the game, then plays uniformly random moves until the game ends or
//! the depth limit is hit. Finished games score 1 / 0.5 / 0 for a win,
//! draw, or loss; cut-off playouts score the searching player's share of
//! owned cells. The most visited target is played.

use std::time::Instant;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::RolloutConfig;
use super::random::RandomStrategy;
use super::stats::SearchStats;
use super::{play_turn, Strategy};
use crate::core::{GameRng, PlayerId, Position};
use crate::game::Game;
use crate::rules::GameResult;

/// Per-target playout statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmStats {
    pub visits: u32,
    pub total_reward: f64,
}

impl ArmStats {
    /// Average reward, 0 if never visited.
    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward / self.visits as f64
        }
    }
}

/// Playout-driven seat.
#[derive(Clone, Debug)]
pub struct RolloutStrategy {
    config: RolloutConfig,
    rng: GameRng,
    stats: SearchStats,
    arms: FxHashMap<Position, ArmStats>,
}

impl RolloutStrategy {
    #[must_use]
    pub fn new(config: RolloutConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            config,
            stats: SearchStats::default(),
            arms: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RolloutConfig {
        &self.config
    }

    /// Statistics of the last decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Per-target statistics of the last decision.
    #[must_use]
    pub fn arm_stats(&self) -> &FxHashMap<Position, ArmStats> {
        &self.arms
    }

    /// UCB1: Q(a) + c * sqrt(ln(N) / n(a)), unvisited arms first.
    fn select(&self, arms: &[ArmStats], total_visits: u32) -> usize {
        let ln_parent = (total_visits.max(1) as f64).ln();

        arms.iter()
            .enumerate()
            .map(|(i, arm)| {
                let score = if arm.visits == 0 {
                    f64::INFINITY
                } else {
                    arm.mean_reward()
                        + self.config.exploration_constant * (ln_parent / arm.visits as f64).sqrt()
                };
                (i, score)
            })
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Play `target` on a copy of `game`, then random moves; returns the
    /// reward for `player`.
    fn simulate(&mut self, game: &Game, target: usize, player: PlayerId) -> f64 {
        let mut sim = game.clone();
        let mut playout = RandomStrategy::with_rng(self.rng.fork());
        let mut first = FixedTarget(target);
        let mut depth = 0;

        let mut step = play_turn(&mut first, &mut sim);
        while step.is_ok() && !sim.is_game_over() {
            if self.config.max_depth > 0 && depth >= self.config.max_depth {
                break;
            }
            step = play_turn(&mut playout, &mut sim);
            depth += 1;
        }

        self.stats.simulations += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        match sim.result() {
            Some(result) => {
                self.stats.completed_games += 1;
                result_to_reward(result, player)
            }
            None => point_share(&sim, player),
        }
    }
}

impl Strategy for RolloutStrategy {
    fn name(&self) -> &str {
        "rollout"
    }

    fn choose_target(&mut self, game: &Game) -> Option<usize> {
        if game.is_game_over() {
            return None;
        }

        let start = Instant::now();
        self.stats.reset();
        self.arms.clear();

        let player = game.current_player();
        let n = game.movable_cells().len();
        if n <= 1 {
            return Some(0);
        }

        let mut arms = vec![ArmStats::default(); n];
        for iteration in 0..self.config.iterations {
            let arm = self.select(&arms, iteration);
            let reward = self.simulate(game, arm, player);
            arms[arm].visits += 1;
            arms[arm].total_reward += reward;
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        self.arms = game
            .movable_cells()
            .iter()
            .copied()
            .zip(arms.iter().copied())
            .collect();

        // Greedy: most visited, earliest index on ties
        let best = arms
            .iter()
            .enumerate()
            .max_by(|(i, a), (j, b)| a.visits.cmp(&b.visits).then(j.cmp(i)))
            .map(|(i, _)| i)
            .unwrap_or(0);

        debug!(
            player = %player,
            target = %game.movable_cells()[best],
            visits = arms[best].visits,
            mean = arms[best].mean_reward(),
            simulations = self.stats.simulations,
            completion = self.stats.completion_rate(),
            per_second = self.stats.simulations_per_second(),
            "rollout decision"
        );
        Some(best)
    }
}

/// Plays one predetermined index; used for the first move of a playout.
struct FixedTarget(usize);

impl Strategy for FixedTarget {
    fn name(&self) -> &str {
        "fixed"
    }

    fn choose_target(&mut self, game: &Game) -> Option<usize> {
        (!game.is_game_over()).then_some(self.0)
    }
}

/// Convert a game result to a reward for `player`.
fn result_to_reward(result: GameResult, player: PlayerId) -> f64 {
    match result {
        GameResult::Winner(winner) if winner == player => 1.0,
        GameResult::Winner(_) => 0.0,
        GameResult::Draw => 0.5,
    }
}

/// Share of owned cells held by `player`; 0.5 when nobody owns anything.
fn point_share(game: &Game, player: PlayerId) -> f64 {
    let mine = game.point(player);
    let total = mine + game.point(player.opponent());
    if total == 0 {
        0.5
    } else {
        mine as f64 / total as f64
    }
}
