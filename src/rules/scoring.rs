//! Scoring and termination.
//!
//! A player's point is the number of cells it owns. The game ends when no
//! neutral cell remains; the player with strictly more points wins, and
//! equal points are settled by the configured `TieBreak`.

use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::core::{PlayerId, PlayerMap, TieBreak};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal points under `TieBreak::Draw`.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Number of cells owned by `player`.
#[must_use]
pub fn point(grid: &Grid, player: PlayerId) -> usize {
    grid.count_owned(player)
}

/// Points of both players.
#[must_use]
pub fn points(grid: &Grid) -> PlayerMap<usize> {
    PlayerMap::new(|p| point(grid, p))
}

/// The game is over once every cell has an owner.
#[must_use]
pub fn is_game_over(grid: &Grid) -> bool {
    grid.count_neutral() == 0
}

/// Decide the result from final points.
#[must_use]
pub fn decide(points: &PlayerMap<usize>, tie_break: TieBreak) -> GameResult {
    let a = points[PlayerId::A];
    let b = points[PlayerId::B];

    match a.cmp(&b) {
        std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::A),
        std::cmp::Ordering::Less => GameResult::Winner(PlayerId::B),
        std::cmp::Ordering::Equal => match tie_break {
            TieBreak::SeatOrder => GameResult::Winner(PlayerId::A),
            TieBreak::Draw => GameResult::Draw,
        },
    }
}

/// The result of the game, or `None` while neutral cells remain.
#[must_use]
pub fn result(grid: &Grid, tie_break: TieBreak) -> Option<GameResult> {
    is_game_over(grid).then(|| decide(&points(grid), tie_break))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CELL_COUNT;

    fn claim_all(grid: &mut Grid, a_cells: usize) {
        let positions: Vec<_> = grid.cells().map(|c| c.position()).collect();
        for (i, pos) in positions.into_iter().enumerate() {
            let owner = if i < a_cells { PlayerId::A } else { PlayerId::B };
            grid.cell_mut(pos).unwrap().claim(owner);
        }
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::B);
        assert!(!result.is_winner(PlayerId::A));
        assert!(result.is_winner(PlayerId::B));
        assert_eq!(result.winner(), Some(PlayerId::B));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::A));
        assert_eq!(draw.winner(), None);
    }

    #[test]
    fn test_new_grid_not_over() {
        let grid = Grid::new();

        assert!(!is_game_over(&grid));
        assert_eq!(result(&grid, TieBreak::SeatOrder), None);
        assert_eq!(point(&grid, PlayerId::A), 0);
    }

    #[test]
    fn test_full_board_majority_wins() {
        let mut grid = Grid::new();
        claim_all(&mut grid, 4);

        assert!(is_game_over(&grid));
        let pts = points(&grid);
        assert_eq!(pts[PlayerId::A], 4);
        assert_eq!(pts[PlayerId::B], 7);
        assert_eq!(pts.values().sum::<usize>(), CELL_COUNT);
        assert_eq!(result(&grid, TieBreak::SeatOrder), Some(GameResult::Winner(PlayerId::B)));
    }

    #[test]
    fn test_one_neutral_cell_keeps_game_running() {
        let mut grid = Grid::new();
        claim_all(&mut grid, 6);
        let last = grid.cells().last().unwrap().position();
        grid.cell_mut(last).unwrap().weaken();

        assert!(!is_game_over(&grid));
    }

    #[test]
    fn test_decide_tie_break() {
        let tied: PlayerMap<usize> = PlayerMap::with_value(5);

        assert_eq!(decide(&tied, TieBreak::SeatOrder), GameResult::Winner(PlayerId::A));
        assert_eq!(decide(&tied, TieBreak::Draw), GameResult::Draw);

        let mut ahead = tied.clone();
        ahead[PlayerId::B] = 6;
        assert_eq!(decide(&ahead, TieBreak::SeatOrder), GameResult::Winner(PlayerId::B));
        assert_eq!(decide(&ahead, TieBreak::Draw), GameResult::Winner(PlayerId::B));
    }
}
