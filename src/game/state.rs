//! Game state.
//!
//! ## GameState
//!
//! Everything that changes during play:
//! - The grid (ownership, strength, tokens)
//! - Both players' positions
//! - Whose turn it is, their movable set, and the selection index
//! - Phase (awaiting selection or over)
//! - Action history
//!
//! Fields are private; only the turn engine mutates them.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{Grid, Neighbors};
use crate::core::{ActionRecord, GameConfig, Player, PlayerId, PlayerMap, Position};
use crate::rules::{movable_cells_for, GameResult};

/// Where the turn state machine is.
///
/// Confirming a move passes through a turn advance inside a single call, so
/// only the resting phases are observable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for cursor moves or a confirm from the current player.
    AwaitingSelection,
    /// Terminal; no further mutation.
    GameOver(GameResult),
}

/// Complete mutable game state.
///
/// `history` is an `im::Vector` so that cloning the state for playouts is
/// O(1) in the history length.
#[derive(Clone, Debug)]
pub struct GameState {
    grid: Grid,
    players: PlayerMap<Player>,
    current: PlayerId,
    movable: Neighbors,
    selected: usize,
    phase: Phase,
    turn_number: u32,
    history: Vector<ActionRecord>,
}

impl GameState {
    /// Create the opening state: neutral grid, both players in reserve, the
    /// first player's home entry cells movable with the first one selected.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let grid = Grid::new();
        let players = PlayerMap::new(|p| Player::new(p, config.player(p).home_entry));
        let current = config.first_player;
        let movable = movable_cells_for(&grid, &players[current]);

        Self {
            grid,
            players,
            current,
            movable,
            selected: 0,
            phase: Phase::AwaitingSelection,
            turn_number: 1,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// The current player's legal targets, in cursor order.
    #[must_use]
    pub fn movable_cells(&self) -> &[Position] {
        &self.movable
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The cell under the cursor.
    #[must_use]
    pub fn selected_cell(&self) -> Option<Position> {
        self.movable.get(self.selected).copied()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Turn number (starts at 1, increments on every confirm).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every accepted action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Mutation (turn engine only) ===

    pub(crate) fn board_mut(&mut self) -> (&mut Grid, &mut PlayerMap<Player>) {
        (&mut self.grid, &mut self.players)
    }

    pub(crate) fn set_selected(&mut self, index: usize) {
        self.selected = index;
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn record(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    /// Pass the turn to the opponent and recompute its movable set.
    pub(crate) fn advance_turn(&mut self) {
        self.current = self.current.opponent();
        self.movable = movable_cells_for(&self.grid, &self.players[self.current]);
        self.selected = 0;
        self.turn_number += 1;
    }
}
