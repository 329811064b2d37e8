//! Game rules.
//!
//! - `movable`: which cells a player may target this turn
//! - `resolve`: what confirming a target does
//! - `scoring`: points, termination, and the winner
//!
//! The functions here operate on borrowed board and player state; the turn
//! engine in `game` owns that state and sequences the calls.

pub mod movable;
pub mod resolve;
pub mod scoring;

pub use movable::movable_cells_for;
pub use resolve::{resolve_move, MoveOutcome};
pub use scoring::{decide, is_game_over, point, points, result, GameResult};
