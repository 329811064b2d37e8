//! Gameplay integration tests: a scripted game through every move branch.

use hex_territory::core::{Action, GameConfig, GameError, PlayerId, Position, TieBreak};
use hex_territory::game::Game;
use hex_territory::rules::{GameResult, MoveOutcome};
use hex_territory::strategy::{play_turn, RandomStrategy};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Walk the cursor right to `target` and confirm it.
fn goto(game: &mut Game, target: Position) -> MoveOutcome {
    for _ in 0..game.movable_cells().len() {
        if game.movable_cells()[game.selected_index()] == target {
            return game.confirm().unwrap();
        }
        game.cursor_right().unwrap();
    }
    panic!("{} is not movable for {}: {:?}", target, game.current_player(), game.movable_cells());
}

fn strength(game: &Game, at: Position) -> u32 {
    game.grid().cell(at).unwrap().strength()
}

fn owner(game: &Game, at: Position) -> Option<PlayerId> {
    game.grid().cell(at).unwrap().owner()
}

// =============================================================================
// Scripted game
// =============================================================================

#[test]
fn test_new_game_b_enters_home() {
    let mut game = Game::default();

    assert_eq!(game.current_player(), PlayerId::B);
    assert_eq!(game.movable_cells(), &[pos(0, 2), pos(0, 1)]);
    assert_eq!(game.selected_index(), 0);

    assert_eq!(game.confirm().unwrap(), MoveOutcome::Claimed);

    assert_eq!(owner(&game, pos(0, 2)), Some(PlayerId::B));
    assert_eq!(strength(&game, pos(0, 2)), 1);
    assert_eq!(game.player(PlayerId::B).current_cell(), Some(pos(0, 2)));
    assert!(game.grid().cell(pos(0, 2)).unwrap().has_token());
}

#[test]
fn test_turn_passes_to_a() {
    let mut game = Game::default();
    game.confirm().unwrap();

    assert_eq!(game.current_player(), PlayerId::A);
    assert_eq!(game.movable_cells(), &[pos(2, 1), pos(2, 2)]);

    game.confirm().unwrap();

    assert_eq!(owner(&game, pos(2, 1)), Some(PlayerId::A));
    assert_eq!(strength(&game, pos(2, 1)), 1);
    assert_eq!(game.current_player(), PlayerId::B);
}

/// Plays the scripted opening up to the point where B reinforces (0, 2).
fn opening() -> Game {
    let mut game = Game::default();
    goto(&mut game, pos(0, 2)); // B
    goto(&mut game, pos(2, 1)); // A
    goto(&mut game, pos(1, 1)); // B
    goto(&mut game, pos(2, 0)); // A
    game
}

#[test]
fn test_reinforce_own_cell() {
    let mut game = opening();

    assert_eq!(goto(&mut game, pos(0, 2)), MoveOutcome::Reinforced);

    assert_eq!(owner(&game, pos(0, 2)), Some(PlayerId::B));
    assert_eq!(strength(&game, pos(0, 2)), 2);
    assert_eq!(game.player(PlayerId::B).current_cell(), Some(pos(0, 2)));
    assert!(!game.grid().cell(pos(1, 1)).unwrap().has_token());
}

#[test]
fn test_attack_undefended_cell_then_capture() {
    let mut game = opening();
    goto(&mut game, pos(0, 2)); // B reinforces
    goto(&mut game, pos(2, 1)); // A reinforces
    goto(&mut game, pos(1, 2)); // B claims

    // A attacks B's empty (1, 1) at strength 1
    let outcome = goto(&mut game, pos(1, 1));
    assert_eq!(
        outcome,
        MoveOutcome::Attacked { defender: PlayerId::B, remaining: 0 }
    );
    assert_eq!(owner(&game, pos(1, 1)), None);
    assert_eq!(strength(&game, pos(1, 1)), 0);
    assert_eq!(game.player(PlayerId::A).current_cell(), Some(pos(2, 1)));
    assert_eq!(game.current_player(), PlayerId::B);

    goto(&mut game, pos(1, 1)); // B reclaims with its token on it

    // A captures the defended cell
    let outcome = goto(&mut game, pos(1, 1));
    assert_eq!(outcome, MoveOutcome::Captured { defender: PlayerId::B });
    assert_eq!(owner(&game, pos(1, 1)), Some(PlayerId::A));
    assert_eq!(strength(&game, pos(1, 1)), 1);
    assert_eq!(game.player(PlayerId::A).current_cell(), Some(pos(1, 1)));
    assert_eq!(game.player(PlayerId::B).current_cell(), None);
    assert!(!game.grid().cell(pos(2, 1)).unwrap().has_token());

    // B respawns from its home entry cells
    assert_eq!(game.movable_cells(), &[pos(0, 2), pos(0, 1)]);
}

#[test]
fn test_attack_strong_cell_keeps_owner() {
    let mut game = opening();
    goto(&mut game, pos(0, 2)); // B: (0, 2) at 2
    goto(&mut game, pos(2, 1)); // A
    goto(&mut game, pos(1, 1)); // B back on (1, 1), reinforced to 2
    goto(&mut game, pos(2, 2)); // A claims
    goto(&mut game, pos(1, 2)); // B claims (1, 2)

    // A on (2, 2) attacks B's empty (1, 1) at strength 2
    let outcome = goto(&mut game, pos(1, 1));
    assert_eq!(
        outcome,
        MoveOutcome::Attacked { defender: PlayerId::B, remaining: 1 }
    );
    assert_eq!(owner(&game, pos(1, 1)), Some(PlayerId::B));
    assert_eq!(strength(&game, pos(1, 1)), 1);
    assert_eq!(game.player(PlayerId::A).current_cell(), Some(pos(2, 2)));
}

// =============================================================================
// Cursor
// =============================================================================

#[test]
fn test_cursor_wraps_both_ways() {
    let mut game = opening();
    let n = game.movable_cells().len();
    assert!(n > 2);

    assert_eq!(game.cursor_left().unwrap(), n - 1);
    assert_eq!(game.cursor_right().unwrap(), 0);
    for _ in 0..n {
        game.cursor_right().unwrap();
    }
    assert_eq!(game.selected_index(), 0);
}

#[test]
fn test_movable_cells_in_clockwise_order() {
    let mut game = opening();
    goto(&mut game, pos(0, 2)); // B reinforces; A is on (2, 0)
    goto(&mut game, pos(2, 1)); // A moves to (2, 1)

    // B on (0, 2)
    assert_eq!(
        game.movable_cells(),
        &[pos(1, 1), pos(0, 1), pos(0, 3), pos(1, 2)]
    );
}

#[test]
fn test_history_records_every_action() {
    let mut game = Game::default();
    game.apply(Action::CursorRight).unwrap();
    game.apply(Action::CursorLeft).unwrap();
    game.apply(Action::Confirm).unwrap();

    let history = game.state().history();
    assert_eq!(history.len(), 3);
    assert!(history.iter().all(|r| r.player == PlayerId::B));
    assert_eq!(history[2].action, Action::Confirm);
}

// =============================================================================
// Game over
// =============================================================================

fn play_out(seed: u64) -> Game {
    let mut game = Game::default();
    let mut a = RandomStrategy::new(seed);
    let mut b = RandomStrategy::new(seed.wrapping_add(1));
    let mut turns = 0;
    while !game.is_game_over() && turns < 10_000 {
        match game.current_player() {
            PlayerId::A => play_turn(&mut a, &mut game).unwrap(),
            _ => play_turn(&mut b, &mut game).unwrap(),
        };
        turns += 1;
    }
    game
}

#[test]
fn test_full_game_fills_board() {
    let game = play_out(3);
    assert!(game.is_game_over());

    let a = game.point(PlayerId::A);
    let b = game.point(PlayerId::B);
    assert_eq!(a + b, 11);
    assert_eq!(game.grid().count_neutral(), 0);

    let expected = if a > b { PlayerId::A } else { PlayerId::B };
    assert_eq!(game.winner(), Some(expected));
    assert_eq!(game.result(), Some(GameResult::Winner(expected)));
}

#[test]
fn test_actions_rejected_after_game_over() {
    let mut game = play_out(11);
    assert!(game.is_game_over());
    let before = game.snapshot();
    let history_len = game.state().history().len();

    assert_eq!(game.apply(Action::CursorLeft), Err(GameError::GameOver));
    assert_eq!(game.apply(Action::CursorRight), Err(GameError::GameOver));
    assert_eq!(game.apply(Action::Confirm), Err(GameError::GameOver));

    assert_eq!(game.snapshot(), before);
    assert_eq!(game.state().history().len(), history_len);
    assert!(before.current.is_none());
    assert!(before.cells.iter().all(|c| !c.movable && !c.selected));
}

#[test]
fn test_a_moves_first_when_configured() {
    let config = GameConfig::default()
        .with_first_player(PlayerId::A)
        .with_tie_break(TieBreak::Draw);
    let mut game = Game::new(config).unwrap();

    assert_eq!(game.current_player(), PlayerId::A);
    assert_eq!(game.movable_cells(), &[pos(2, 1), pos(2, 2)]);
    game.confirm().unwrap();
    assert_eq!(game.current_player(), PlayerId::B);
}
