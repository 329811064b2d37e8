//! The fixed 11-cell board.
//!
//! ## Layout
//!
//! Three rows of lengths `[4, 3, 4]`. Odd rows are drawn shifted half a
//! cell to the right, which gives every cell up to six hex neighbors:
//!
//! ```text
//! |0,0|0,1|0,2|0,3|
//!   |1,0|1,1|1,2|
//! |2,0|2,1|2,2|2,3|
//! ```
//!
//! ## Arena
//!
//! Cells live in one flat `Vec` addressed by `row_offset + col`. Players and
//! the turn engine refer to cells by `Position`, never by reference.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::direction::sort_clockwise;
use crate::core::{PlayerId, Position};

/// Row lengths, top to bottom.
pub const ROW_LENGTHS: [usize; 3] = [4, 3, 4];

/// Total number of cells on the board.
pub const CELL_COUNT: usize = 11;

/// Neighbor offsets `(d_row, d_col)` for a cell on an even row.
const EVEN_ROW_OFFSETS: [(isize, isize); 6] = [(-1, -1), (-1, 0), (0, -1), (0, 1), (1, -1), (1, 0)];

/// Neighbor offsets for a cell on an odd row.
const ODD_ROW_OFFSETS: [(isize, isize); 6] = [(-1, 0), (-1, 1), (0, -1), (0, 1), (1, 0), (1, 1)];

/// Up to six neighbor positions, stored inline.
pub type Neighbors = SmallVec<[Position; 6]>;

/// A unit of territory.
///
/// `owner` is `None` exactly when `strength` is 0. `occupant` is the player
/// whose token sits here, which is always the owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    owner: Option<PlayerId>,
    strength: u32,
    occupant: Option<PlayerId>,
}

impl Cell {
    fn neutral(position: Position) -> Self {
        Self {
            position,
            owner: None,
            strength: 0,
            occupant: None,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    #[must_use]
    pub fn strength(&self) -> u32 {
        self.strength
    }

    /// The player whose token is on this cell.
    #[must_use]
    pub fn occupant(&self) -> Option<PlayerId> {
        self.occupant
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.occupant.is_some()
    }

    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.owner.is_none()
    }

    /// Take ownership with strength 1.
    pub(crate) fn claim(&mut self, player: PlayerId) {
        self.owner = Some(player);
        self.strength = 1;
    }

    pub(crate) fn reinforce(&mut self) {
        self.strength += 1;
    }

    /// Reduce strength by one, dropping ownership at zero.
    pub(crate) fn weaken(&mut self) {
        self.strength = self.strength.saturating_sub(1);
        if self.strength == 0 {
            self.owner = None;
        }
    }

    pub(crate) fn set_occupant(&mut self, occupant: Option<PlayerId>) {
        self.occupant = occupant;
    }
}

/// The board: an immutable shape holding mutable cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create the board with every cell neutral.
    #[must_use]
    pub fn new() -> Self {
        let cells = ROW_LENGTHS
            .iter()
            .enumerate()
            .flat_map(|(row, &len)| (0..len).map(move |col| Cell::neutral(Position::new(row, col))))
            .collect();

        Self { cells }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        ROW_LENGTHS.len()
    }

    /// Length of a row, or 0 for a row past the bottom.
    #[must_use]
    pub fn row_len(&self, row: usize) -> usize {
        ROW_LENGTHS.get(row).copied().unwrap_or(0)
    }

    /// Check whether a position addresses a cell.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.col < self.row_len(pos.row)
    }

    /// Flat arena index of a position.
    #[must_use]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        let offset: usize = ROW_LENGTHS[..pos.row].iter().sum();
        Some(offset + pos.col)
    }

    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.index_of(pos).map(|i| &self.cells[i])
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.index_of(pos).map(move |i| &mut self.cells[i])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Cells of a single row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(move |c| c.position.row == row)
    }

    /// Every in-bounds cell adjacent to `pos`, in enumeration order.
    ///
    /// Off-board candidates are dropped silently. An off-board `pos` has no
    /// neighbors.
    #[must_use]
    pub fn neighbors_of(&self, pos: Position) -> Neighbors {
        if !self.contains(pos) {
            return Neighbors::new();
        }

        let offsets = if pos.is_odd_row() {
            &ODD_ROW_OFFSETS
        } else {
            &EVEN_ROW_OFFSETS
        };

        offsets
            .iter()
            .filter_map(|&(d_row, d_col)| pos.offset(d_row, d_col))
            .filter(|&candidate| self.contains(candidate))
            .collect()
    }

    /// Neighbors of `pos` in the canonical clockwise order.
    #[must_use]
    pub fn clockwise_neighbors(&self, pos: Position) -> Neighbors {
        let mut neighbors = self.neighbors_of(pos);
        sort_clockwise(pos, &mut neighbors);
        neighbors
    }

    /// Number of cells owned by a player.
    #[must_use]
    pub fn count_owned(&self, player: PlayerId) -> usize {
        self.cells.iter().filter(|c| c.owner == Some(player)).count()
    }

    /// Number of cells with no owner.
    #[must_use]
    pub fn count_neutral(&self) -> usize {
        self.cells.iter().filter(|c| c.is_neutral()).count()
    }

    /// Position of the cell carrying a player's token.
    #[must_use]
    pub fn token_of(&self, player: PlayerId) -> Option<Position> {
        self.cells
            .iter()
            .find(|c| c.occupant == Some(player))
            .map(|c| c.position)
    }
}
