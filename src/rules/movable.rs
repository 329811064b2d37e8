//! Movable-set computation.
//!
//! The movable set is the ordered list of cells a player may target this
//! turn, and it is the domain of the turn's selection index:
//! - in reserve: the player's two home entry cells, in construction order
//! - on the board: the neighbors of the occupied cell, clockwise

use crate::board::{Grid, Neighbors};
use crate::core::Player;

/// Compute the legal targets for `player`, in cursor order.
#[must_use]
pub fn movable_cells_for(grid: &Grid, player: &Player) -> Neighbors {
    match player.current_cell() {
        None => player.home_entry().into_iter().collect(),
        Some(pos) => grid.clockwise_neighbors(pos),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, Position};

    #[test]
    fn test_reserve_uses_home_entry() {
        let grid = Grid::new();
        let player = Player::new(PlayerId::B, [Position::new(0, 2), Position::new(0, 1)]);

        let movable = movable_cells_for(&grid, &player);
        assert_eq!(movable.as_slice(), &[Position::new(0, 2), Position::new(0, 1)]);
    }

    #[test]
    fn test_on_board_uses_clockwise_neighbors() {
        let grid = Grid::new();
        let mut player = Player::new(PlayerId::A, [Position::new(2, 1), Position::new(2, 2)]);
        player.set_current_cell(Some(Position::new(1, 1)));

        let movable = movable_cells_for(&grid, &player);
        assert_eq!(movable, grid.clockwise_neighbors(Position::new(1, 1)));
        assert_eq!(movable[0], Position::new(2, 1));
        assert!(!movable.contains(&Position::new(1, 1)));
    }
}
