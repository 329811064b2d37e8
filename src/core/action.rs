//! Logical input actions.
//!
//! The engine understands exactly three actions. Whatever produces them
//! (a keyboard, a script, an automated strategy) is outside the core:
//! - `CursorLeft` / `CursorRight` move the selection within the movable set
//! - `Confirm` resolves the selected cell and passes the turn

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A logical input action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Select the previous movable cell, wrapping to the last.
    CursorLeft,
    /// Select the next movable cell, wrapping to the first.
    CursorRight,
    /// Resolve the selected cell.
    Confirm,
}

impl Action {
    /// Check whether this action only moves the selection.
    #[must_use]
    pub fn is_cursor(self) -> bool {
        matches!(self, Action::CursorLeft | Action::CursorRight)
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player whose turn it was.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
        }
    }
}
