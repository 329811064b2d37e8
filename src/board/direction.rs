//! Clockwise ordering of neighbors.
//!
//! Cursor cycling must feel spatially consistent, so the neighbors of an
//! occupied cell are always emitted in one fixed rotation regardless of how
//! the grid enumerates them. Each neighbor gets a rank 0-5 from the offset
//! `origin - neighbor`, read through the table for the neighbor's own row
//! parity.

use crate::core::Position;

/// Ranks for a neighbor on an even row, indexed by `(d_row, d_col)`.
const EVEN_ROW_RANKS: [((isize, isize), u8); 6] = [
    ((-1, 0), 0),
    ((0, 1), 1),
    ((1, 0), 2),
    ((1, -1), 3),
    ((0, -1), 4),
    ((-1, -1), 5),
];

/// Ranks for a neighbor on an odd row.
const ODD_ROW_RANKS: [((isize, isize), u8); 6] = [
    ((-1, 1), 0),
    ((0, 1), 1),
    ((1, 1), 2),
    ((1, 0), 3),
    ((0, -1), 4),
    ((-1, 0), 5),
];

/// Rank of `neighbor` in the clockwise rotation around `origin`.
///
/// Returns `None` if the two positions are not adjacent.
#[must_use]
pub fn clockwise_rank(origin: Position, neighbor: Position) -> Option<u8> {
    let delta = (
        origin.row as isize - neighbor.row as isize,
        origin.col as isize - neighbor.col as isize,
    );
    let table = if neighbor.is_odd_row() {
        &ODD_ROW_RANKS
    } else {
        &EVEN_ROW_RANKS
    };

    table
        .iter()
        .find(|(offset, _)| *offset == delta)
        .map(|(_, rank)| *rank)
}

/// Sort neighbors of `origin` into clockwise order in place.
pub fn sort_clockwise(origin: Position, neighbors: &mut [Position]) {
    neighbors.sort_by_key(|&n| clockwise_rank(origin, n).unwrap_or(u8::MAX));
}
