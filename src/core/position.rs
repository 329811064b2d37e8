//! Board addressing.

use serde::{Deserialize, Serialize};

/// A cell address on the board.
///
/// Rows are counted top to bottom, columns left to right within a row.
/// Whether a position is in bounds is a property of the grid, not of the
/// position itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Rows alternate parity; odd rows are drawn shifted half a cell right.
    #[must_use]
    pub const fn is_odd_row(self) -> bool {
        self.row % 2 == 1
    }

    /// Offset this position, returning `None` if either coordinate would go
    /// negative.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
