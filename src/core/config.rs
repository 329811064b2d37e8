//! Game configuration types.
//!
//! The board shape is fixed; what a game configures at startup is:
//! - `PlayerConfig`: display name, alias, and home entry cells per seat
//! - `GameConfig`: both seats, who moves first, and the tie-break policy
//!
//! Configurations serialize with serde so they can be loaded from JSON.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::{PlayerId, PlayerMap};
use super::position::Position;
use crate::board::Grid;

/// How to decide the winner when both players own the same number of cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The first seat in player order (A) wins ties.
    #[default]
    SeatOrder,
    /// Equal points end the game as a draw.
    Draw,
}

/// Configuration for a single seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Short name shown on the board and in the score line.
    pub name: String,

    /// Name used in turn and winning messages.
    pub alias: String,

    /// Cells the player enters from while in reserve, in cursor order.
    pub home_entry: [Position; 2],
}

impl PlayerConfig {
    /// Create a seat configuration. The alias defaults to the name.
    pub fn new(name: impl Into<String>, home_entry: [Position; 2]) -> Self {
        let name = name.into();
        Self {
            alias: name.clone(),
            name,
            home_entry,
        }
    }

    /// Set the alias used in messages.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seat configurations in player order.
    pub players: PlayerMap<PlayerConfig>,

    /// Seat that takes the first turn.
    pub first_player: PlayerId,

    /// Tie-break policy for equal points at game end.
    #[serde(default)]
    pub tie_break: TieBreak,
}

impl Default for GameConfig {
    /// The classic layout: "You" enters from the bottom row, "CPU" from the
    /// top row, and CPU moves first.
    fn default() -> Self {
        let you = PlayerConfig::new("You", [Position::new(2, 1), Position::new(2, 2)])
            .with_alias("あなた");
        let cpu = PlayerConfig::new("CPU", [Position::new(0, 2), Position::new(0, 1)]);

        Self {
            players: PlayerMap::new(|p| if p == PlayerId::A { you.clone() } else { cpu.clone() }),
            first_player: PlayerId::B,
            tie_break: TieBreak::SeatOrder,
        }
    }
}

impl GameConfig {
    /// Replace a seat's configuration.
    #[must_use]
    pub fn with_player(mut self, player: PlayerId, config: PlayerConfig) -> Self {
        self.players[player] = config;
        self
    }

    /// Set the seat that moves first.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Set the tie-break policy.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Get a seat's configuration.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerConfig {
        &self.players[player]
    }

    /// Check that every home entry cell is on the board, that each seat has
    /// two distinct cells, and that no cell is shared between seats.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = Grid::new();

        for (player, config) in self.players.iter() {
            let [first, second] = config.home_entry;
            for position in [first, second] {
                if !grid.contains(position) {
                    return Err(ConfigError::HomeCellOutOfBounds { player, position });
                }
            }
            if first == second {
                return Err(ConfigError::DuplicateHomeCell(player));
            }
        }

        let a = self.players[PlayerId::A].home_entry;
        let b = self.players[PlayerId::B].home_entry;
        if let Some(shared) = a.iter().find(|pos| b.contains(*pos)) {
            return Err(ConfigError::SharedHomeCell(*shared));
        }

        Ok(())
    }
}
