//! # hex-territory
//!
//! A two-player territory game on a small hexagonal board.
//!
//! ## Rules in brief
//!
//! The board has 11 cells in rows of 4, 3 and 4; odd rows sit half a cell to
//! the right. Each player has one token that starts in reserve and enters
//! through two home entry cells. On a turn the player picks one of its
//! movable cells with a cursor and confirms:
//!
//! - a neutral cell is claimed and the token moves there
//! - an own cell is reinforced and the token moves there
//! - an opponent cell is weakened; at zero it is captured, the defender's
//!   token (if there) returns to reserve, and the mover steps in
//!
//! The game ends when no neutral cell remains; the player owning more cells
//! wins.
//!
//! ## Design
//!
//! - **Positions, not references**: cells live in a flat arena indexed by
//!   `(row, col)`; tokens and selections are positions.
//! - **Three inputs**: everything, including automated seats, goes through
//!   `Action::{CursorLeft, CursorRight, Confirm}`.
//! - **Cheap clones**: history is an `im::Vector`, so strategies simulate on
//!   private copies of the game.
//!
//! ## Modules
//!
//! - `core`: players, positions, actions, configuration, RNG, errors
//! - `board`: the hex grid, neighbors, and clockwise ordering
//! - `rules`: movable set, move resolution, scoring
//! - `game`: game state, the action state machine, snapshots
//! - `strategy`: automated seat control (random, rollout)
//! - `display`: ANSI terminal rendering

pub mod core;
pub mod board;
pub mod rules;
pub mod game;
pub mod strategy;
pub mod display;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ConfigError, GameConfig, GameError, GameRng, Player, PlayerConfig,
    PlayerId, PlayerMap, Position, TieBreak,
};

pub use crate::board::{Cell, Grid, CELL_COUNT, ROW_LENGTHS};

pub use crate::rules::{GameResult, MoveOutcome};

pub use crate::game::{Game, Snapshot};

pub use crate::strategy::{
    play_turn, RandomStrategy, RolloutConfig, RolloutStrategy, Strategy,
};
