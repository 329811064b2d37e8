//! Board representation: the fixed grid, its cells, and adjacency.

pub mod direction;
pub mod grid;

pub use direction::{clockwise_rank, sort_clockwise};
pub use grid::{Cell, Grid, Neighbors, CELL_COUNT, ROW_LENGTHS};
