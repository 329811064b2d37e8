//! Error types.
//!
//! `GameError` covers precondition failures in the engine's invocation
//! discipline. None of them mutate state: the engine checks before it
//! writes. `ConfigError` covers invalid game setups.

use super::player::PlayerId;
use super::position::Position;

/// Rejected engine operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game is over; no further actions are accepted")]
    GameOver,

    #[error("{player} cannot move onto its own cell {position}")]
    SelfTarget { player: PlayerId, position: Position },

    #[error("selection index {index} is out of range for {len} movable cells")]
    SelectionOutOfRange { index: usize, len: usize },

    #[error("no cell at {0}")]
    NotOnBoard(Position),
}

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("home entry cell {position} of {player} is off the board")]
    HomeCellOutOfBounds { player: PlayerId, position: Position },

    #[error("home entry cells of {0} must be two different cells")]
    DuplicateHomeCell(PlayerId),

    #[error("home entry cell {0} is shared by both players")]
    SharedHomeCell(Position),

    #[error("unknown player seat {0}")]
    UnknownPlayer(u8),
}
