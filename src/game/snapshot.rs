//! Read-only projection of a game for presentation adapters.
//!
//! A `Snapshot` is a plain value: rendering it can never mutate the game,
//! and it can be serialized for adapters living outside the process.

use serde::{Deserialize, Serialize};

use super::engine::Game;
use crate::core::{PlayerId, Position};
use crate::rules::GameResult;

/// One cell as the renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub position: Position,
    pub owner: Option<PlayerId>,
    pub strength: u32,
    /// Player whose token sits here.
    pub token: Option<PlayerId>,
    /// In the current player's movable set.
    pub movable: bool,
    /// Under the cursor.
    pub selected: bool,
}

/// One player as the renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub alias: String,
    pub point: usize,
    /// `None` while the token is in reserve.
    pub current_cell: Option<Position>,
}

/// Everything a renderer needs after a move or selection completes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells in row-major order.
    pub cells: Vec<CellView>,
    /// Players in seat order.
    pub players: Vec<PlayerView>,
    /// Player to move; `None` once the game is over.
    pub current: Option<PlayerId>,
    pub turn_number: u32,
    pub is_game_over: bool,
    pub result: Option<GameResult>,
    pub winner: Option<PlayerId>,
}

impl Snapshot {
    pub(crate) fn capture(game: &Game) -> Self {
        let over = game.is_game_over();
        let movable = game.movable_cells();
        let selected = movable.get(game.selected_index()).copied();

        let cells = game
            .grid()
            .cells()
            .map(|cell| {
                let position = cell.position();
                CellView {
                    position,
                    owner: cell.owner(),
                    strength: cell.strength(),
                    token: cell.occupant(),
                    movable: !over && movable.contains(&position),
                    selected: !over && selected == Some(position),
                }
            })
            .collect();

        let players = PlayerId::all()
            .map(|id| {
                let config = game.config().player(id);
                PlayerView {
                    id,
                    name: config.name.clone(),
                    alias: config.alias.clone(),
                    point: game.point(id),
                    current_cell: game.player(id).current_cell(),
                }
            })
            .collect();

        Self {
            cells,
            players,
            current: (!over).then(|| game.current_player()),
            turn_number: game.state().turn_number(),
            is_game_over: over,
            result: game.result(),
            winner: game.winner(),
        }
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &CellView> {
        self.cells.iter().filter(move |c| c.position.row == row)
    }

    /// Number of rows on the board.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.iter().map(|c| c.position.row + 1).max().unwrap_or(0)
    }

    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&CellView> {
        self.cells.iter().find(|c| c.position == position)
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerView> {
        self.players.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_of_new_game() {
        let game = Game::default();
        let snap = game.snapshot();

        assert_eq!(snap.cells.len(), 11);
        assert_eq!(snap.rows(), 3);
        assert_eq!(snap.row(1).count(), 3);
        assert_eq!(snap.current, Some(PlayerId::B));
        assert!(!snap.is_game_over);
        assert_eq!(snap.result, None);

        let selected: Vec<_> = snap.cells.iter().filter(|c| c.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].position, Position::new(0, 2));

        let movable: Vec<_> = snap.cells.iter().filter(|c| c.movable).map(|c| c.position).collect();
        assert_eq!(movable, vec![Position::new(0, 1), Position::new(0, 2)]);
    }

    #[test]
    fn test_snapshot_tracks_moves() {
        let mut game = Game::default();
        game.confirm().unwrap();

        let snap = game.snapshot();
        let cell = snap.cell(Position::new(0, 2)).unwrap();
        assert_eq!(cell.owner, Some(PlayerId::B));
        assert_eq!(cell.strength, 1);
        assert_eq!(cell.token, Some(PlayerId::B));

        let b = snap.player(PlayerId::B).unwrap();
        assert_eq!(b.name, "CPU");
        assert_eq!(b.point, 1);
        assert_eq!(b.current_cell, Some(Position::new(0, 2)));
        assert_eq!(snap.player(PlayerId::A).unwrap().current_cell, None);
    }

    #[test]
    fn test_snapshot_serialization() {
        let snap = Game::default().snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let deserialized: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, deserialized);
    }
}
