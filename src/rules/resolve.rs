//! Move resolution.
//!
//! Confirming a target applies exactly one of four outcomes, decided by the
//! target's state relative to the acting player:
//!
//! | target                     | effect                                  | mover moves |
//! |----------------------------|-----------------------------------------|-------------|
//! | neutral                    | claim at strength 1                     | yes         |
//! | own territory              | strength + 1                            | yes         |
//! | enemy cell, enemy on it    | enemy to reserve, claim at strength 1   | yes         |
//! | enemy cell, enemy absent   | strength - 1, neutral at 0              | no          |

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Cell, Grid};
use crate::core::{GameError, Player, PlayerId, PlayerMap, Position};

/// What a confirmed move did to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A neutral cell was claimed.
    Claimed,
    /// An owned cell gained one strength.
    Reinforced,
    /// The defender's token was on the cell; it went back to reserve.
    Captured { defender: PlayerId },
    /// An undefended enemy cell lost one strength.
    Attacked { defender: PlayerId, remaining: u32 },
}

impl MoveOutcome {
    /// Check whether the mover's token ends up on the target.
    #[must_use]
    pub fn moves_player(self) -> bool {
        !matches!(self, MoveOutcome::Attacked { .. })
    }
}

/// Which branch a target falls into, before anything is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Branch {
    Neutral,
    Own,
    EnemyPresent(PlayerId),
    EnemyTerritory(PlayerId),
}

fn classify(cell: &Cell, mover: PlayerId) -> Branch {
    match cell.owner() {
        None => Branch::Neutral,
        Some(owner) if owner == mover => Branch::Own,
        Some(owner) if cell.occupant() == Some(owner) => Branch::EnemyPresent(owner),
        Some(owner) => Branch::EnemyTerritory(owner),
    }
}

/// Resolve `mover` targeting `target`.
///
/// Fails without touching state if the target is off the board or is the
/// cell the mover already occupies.
pub fn resolve_move(
    grid: &mut Grid,
    players: &mut PlayerMap<Player>,
    mover: PlayerId,
    target: Position,
) -> Result<MoveOutcome, GameError> {
    let cell = grid.cell(target).ok_or(GameError::NotOnBoard(target))?;
    if players[mover].current_cell() == Some(target) {
        return Err(GameError::SelfTarget {
            player: mover,
            position: target,
        });
    }

    let branch = classify(cell, mover);
    let outcome = match branch {
        Branch::Neutral => {
            cell_at(grid, target).claim(mover);
            MoveOutcome::Claimed
        }
        Branch::Own => {
            cell_at(grid, target).reinforce();
            MoveOutcome::Reinforced
        }
        Branch::EnemyPresent(defender) => {
            players[defender].set_current_cell(None);
            let cell = cell_at(grid, target);
            cell.set_occupant(None);
            cell.claim(mover);
            MoveOutcome::Captured { defender }
        }
        Branch::EnemyTerritory(defender) => {
            let cell = cell_at(grid, target);
            cell.weaken();
            MoveOutcome::Attacked {
                defender,
                remaining: cell.strength(),
            }
        }
    };

    if outcome.moves_player() {
        step_onto(grid, players, mover, target);
    }

    debug!(player = %mover, target = %target, ?outcome, "move resolved");
    Ok(outcome)
}

/// Move the mover's token from its current cell (if any) onto `target`.
fn step_onto(grid: &mut Grid, players: &mut PlayerMap<Player>, mover: PlayerId, target: Position) {
    if let Some(old) = players[mover].current_cell() {
        cell_at(grid, old).set_occupant(None);
    }
    cell_at(grid, target).set_occupant(Some(mover));
    players[mover].set_current_cell(Some(target));
}

/// Mutable access to a position already checked to be on the board.
fn cell_at(grid: &mut Grid, pos: Position) -> &mut Cell {
    grid.cell_mut(pos)
        .unwrap_or_else(|| unreachable!("position {pos} was checked to be on the board"))
}
