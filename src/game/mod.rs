//! The turn engine and its state.
//!
//! - `state`: `GameState`, the data that changes during play
//! - `engine`: `Game`, the state machine driving it
//! - `snapshot`: read-only views for renderers

pub mod engine;
pub mod snapshot;
pub mod state;

pub use engine::Game;
pub use snapshot::{CellView, PlayerView, Snapshot};
pub use state::{GameState, Phase};
