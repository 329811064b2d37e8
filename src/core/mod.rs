//! Core types: players, positions, actions, RNG, configuration, errors.
//!
//! Everything here is independent of the board topology and the rules;
//! the other modules build on these.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, PlayerConfig, TieBreak};
pub use error::{ConfigError, GameError};
pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use position::Position;
pub use rng::GameRng;
