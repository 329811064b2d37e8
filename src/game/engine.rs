//! Turn engine.
//!
//! `Game` owns the configuration and the state, and is the only way to
//! change either. It accepts the three logical actions:
//! - `cursor_left` / `cursor_right`: move the selection, wrapping around
//! - `confirm`: resolve the selected cell, pass the turn, check for game end
//!
//! Once the game is over every action is rejected with `GameError::GameOver`.

use tracing::{info, trace};

use super::snapshot::Snapshot;
use super::state::{GameState, Phase};
use crate::board::Grid;
use crate::core::{
    Action, ActionRecord, ConfigError, GameConfig, GameError, Player, PlayerId, Position,
};
use crate::rules::{self, resolve_move, GameResult, MoveOutcome};

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::from_valid_config(GameConfig::default())
    }
}

impl Game {
    /// Start a game from a configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GameConfig) -> Self {
        let state = GameState::new(&config);
        Self { config, state }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.state.grid()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        self.state.player(id)
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    #[must_use]
    pub fn movable_cells(&self) -> &[Position] {
        self.state.movable_cells()
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.state.selected_index()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.state.phase() {
            Phase::GameOver(result) => Some(result),
            Phase::AwaitingSelection => None,
        }
    }

    /// Winning player, once the game is over and not drawn.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.result().and_then(|r| r.winner())
    }

    /// Number of cells a player owns.
    #[must_use]
    pub fn point(&self, player: PlayerId) -> usize {
        rules::point(self.grid(), player)
    }

    /// Read-only projection for presentation adapters.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    // === Actions ===

    /// Apply a logical action.
    ///
    /// Returns the move outcome for `Confirm`, `None` for cursor moves.
    pub fn apply(&mut self, action: Action) -> Result<Option<MoveOutcome>, GameError> {
        match action {
            Action::CursorLeft => self.cursor_left().map(|_| None),
            Action::CursorRight => self.cursor_right().map(|_| None),
            Action::Confirm => self.confirm().map(Some),
        }
    }

    /// Select the previous movable cell. Returns the new index.
    pub fn cursor_left(&mut self) -> Result<usize, GameError> {
        self.move_cursor(Action::CursorLeft)
    }

    /// Select the next movable cell. Returns the new index.
    pub fn cursor_right(&mut self) -> Result<usize, GameError> {
        self.move_cursor(Action::CursorRight)
    }

    fn move_cursor(&mut self, action: Action) -> Result<usize, GameError> {
        self.ensure_running()?;

        let n = self.state.movable_cells().len();
        let index = self.checked_selection()?;
        let next = match action {
            Action::CursorLeft => (index + n - 1) % n,
            _ => (index + 1) % n,
        };

        self.state.set_selected(next);
        self.record(action);
        trace!(player = %self.current_player(), index = next, "cursor moved");
        Ok(next)
    }

    /// Resolve the selected cell, then pass the turn.
    ///
    /// The turn passes whatever the outcome, including an attack that does
    /// not move the player.
    pub fn confirm(&mut self) -> Result<MoveOutcome, GameError> {
        self.ensure_running()?;

        let index = self.checked_selection()?;
        let target = self.state.movable_cells()[index];
        let mover = self.current_player();

        let (grid, players) = self.state.board_mut();
        let outcome = resolve_move(grid, players, mover, target)?;

        self.record(Action::Confirm);
        self.state.advance_turn();

        if let Some(result) = rules::result(self.grid(), self.config.tie_break) {
            self.state.set_phase(Phase::GameOver(result));
            info!(
                ?result,
                a = self.point(PlayerId::A),
                b = self.point(PlayerId::B),
                "game over"
            );
        }

        Ok(outcome)
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    fn checked_selection(&self) -> Result<usize, GameError> {
        let index = self.state.selected_index();
        let len = self.state.movable_cells().len();
        if index >= len {
            return Err(GameError::SelectionOutOfRange { index, len });
        }
        Ok(index)
    }

    fn record(&mut self, action: Action) {
        let record = ActionRecord::new(self.current_player(), action, self.state.turn_number());
        self.state.record(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_config() {
        let bad = GameConfig::default().with_player(
            PlayerId::A,
            crate::core::PlayerConfig::new("A", [Position::new(9, 9), Position::new(2, 2)]),
        );

        assert!(Game::new(bad).is_err());
        assert!(Game::new(GameConfig::default()).is_ok());
    }

    #[test]
    fn test_cursor_wraps() {
        let mut game = Game::default();
        assert_eq!(game.movable_cells().len(), 2);

        assert_eq!(game.cursor_left().unwrap(), 1);
        assert_eq!(game.cursor_left().unwrap(), 0);
        assert_eq!(game.cursor_right().unwrap(), 1);
        assert_eq!(game.cursor_right().unwrap(), 0);
    }

    #[test]
    fn test_cursor_does_not_touch_board() {
        let mut game = Game::default();
        let before = game.grid().clone();

        game.cursor_right().unwrap();

        assert_eq!(game.grid(), &before);
        assert_eq!(game.current_player(), PlayerId::B);
    }

    #[test]
    fn test_confirm_claims_and_passes_turn() {
        let mut game = Game::default();

        let outcome = game.confirm().unwrap();

        assert_eq!(outcome, MoveOutcome::Claimed);
        assert_eq!(game.player(PlayerId::B).current_cell(), Some(Position::new(0, 2)));
        assert_eq!(game.current_player(), PlayerId::A);
        assert_eq!(game.selected_index(), 0);
        assert_eq!(
            game.movable_cells(),
            &[Position::new(2, 1), Position::new(2, 2)]
        );
        assert_eq!(game.point(PlayerId::B), 1);
    }

    #[test]
    fn test_apply_dispatch_and_history() {
        let mut game = Game::default();

        assert_eq!(game.apply(Action::CursorRight).unwrap(), None);
        assert_eq!(game.apply(Action::Confirm).unwrap(), Some(MoveOutcome::Claimed));
        assert_eq!(game.player(PlayerId::B).current_cell(), Some(Position::new(0, 1)));

        let history: Vec<_> = game.state().history().iter().cloned().collect();
        assert_eq!(
            history,
            vec![
                ActionRecord::new(PlayerId::B, Action::CursorRight, 1),
                ActionRecord::new(PlayerId::B, Action::Confirm, 1),
            ]
        );
    }

    #[test]
    fn test_turn_number_advances_on_confirm() {
        let mut game = Game::default();
        assert_eq!(game.state().turn_number(), 1);

        game.cursor_right().unwrap();
        assert_eq!(game.state().turn_number(), 1);

        game.confirm().unwrap();
        assert_eq!(game.state().turn_number(), 2);
    }

    #[test]
    fn test_no_result_while_running() {
        let game = Game::default();

        assert!(!game.is_game_over());
        assert_eq!(game.result(), None);
        assert_eq!(game.winner(), None);
    }
}
