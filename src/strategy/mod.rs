//! Automated seat control.
//!
//! A strategy only decides *which* movable cell to take. Getting there goes
//! through the same three actions a human sends, so an automated seat is
//! indistinguishable from a keyboard to the engine.
//!
//! - `RandomStrategy`: uniform over the movable set
//! - `RolloutStrategy`: UCB1 over the movable set, scored by random playouts
//!
//! ## Usage
//!
//! ```
//! use hex_territory::game::Game;
//! use hex_territory::strategy::{play_turn, RandomStrategy};
//!
//! let mut game = Game::default();
//! let mut cpu = RandomStrategy::new(7);
//! let outcome = play_turn(&mut cpu, &mut game).unwrap();
//! assert!(outcome.is_some());
//! ```

pub mod config;
pub mod random;
pub mod rollout;
pub mod stats;

pub use config::RolloutConfig;
pub use random::RandomStrategy;
pub use rollout::{ArmStats, RolloutStrategy};
pub use stats::SearchStats;

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Action, GameError};
use crate::game::Game;
use crate::rules::MoveOutcome;

/// Cursor moves plus the final confirm.
pub type ActionPlan = SmallVec<[Action; 4]>;

/// A policy that picks a target for the current player.
pub trait Strategy {
    /// Short label for logs.
    fn name(&self) -> &str;

    /// Pick an index into `game.movable_cells()`.
    ///
    /// Returns `None` if the game is over.
    fn choose_target(&mut self, game: &Game) -> Option<usize>;
}

/// The shortest cursor walk from `from` to `to` over `n` cyclic slots,
/// followed by `Confirm`. Ties go right.
#[must_use]
pub fn plan_actions(from: usize, to: usize, n: usize) -> ActionPlan {
    let mut plan = ActionPlan::new();
    if n > 0 {
        let right = (to + n - from % n) % n;
        let left = n - right;
        if right <= left {
            plan.extend(std::iter::repeat(Action::CursorRight).take(right));
        } else {
            plan.extend(std::iter::repeat(Action::CursorLeft).take(left));
        }
    }
    plan.push(Action::Confirm);
    plan
}

/// Let `strategy` play one turn on `game`.
///
/// Returns `Ok(None)` without acting if the game is already over.
pub fn play_turn<S: Strategy + ?Sized>(
    strategy: &mut S,
    game: &mut Game,
) -> Result<Option<MoveOutcome>, GameError> {
    let Some(target) = strategy.choose_target(game) else {
        return Ok(None);
    };

    debug!(
        strategy = strategy.name(),
        player = %game.current_player(),
        target = ?game.movable_cells().get(target),
        "strategy chose target"
    );

    let mut outcome = None;
    for action in plan_actions(game.selected_index(), target, game.movable_cells().len()) {
        if let Some(resolved) = game.apply(action)? {
            outcome = Some(resolved);
        }
    }
    Ok(outcome)
}
