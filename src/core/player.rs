//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two seats. Seat A is listed first,
//! seat B second; turn order is configured separately.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a fixed array for O(1) access.
//!
//! ## Player
//!
//! A contestant's board presence: its home entry cells and the cell its
//! token currently sits on (or `None` while in reserve).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::ConfigError;
use super::position::Position;

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Opaque player identity.
///
/// The core never attaches formatting to a player; colors and names live in
/// the presentation layer and configuration.
///
/// Deserialization only accepts existing seats, so a loaded configuration
/// can never name a third player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// First seat in player order.
    pub const A: PlayerId = PlayerId(0);

    /// Second seat in player order.
    pub const B: PlayerId = PlayerId(1);

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// Iterate over both seats in player order.
    ///
    /// ```
    /// use hex_territory::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::A, PlayerId::B]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::A, PlayerId::B].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = ConfigError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if usize::from(index) < PLAYER_COUNT {
            Ok(PlayerId(index))
        } else {
            Err(ConfigError::UnknownPlayer(index))
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            PlayerId::A => write!(f, "Player A"),
            PlayerId::B => write!(f, "Player B"),
            PlayerId(index) => write!(f, "Player #{index}"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use hex_territory::core::{PlayerId, PlayerMap};
///
/// let mut points: PlayerMap<u32> = PlayerMap::with_value(0);
/// points[PlayerId::B] = 3;
/// assert_eq!(points[PlayerId::A], 0);
/// assert_eq!(points[PlayerId::B], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::A), factory(PlayerId::B)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in player order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    /// Iterate over values in player order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A contestant on the board.
///
/// `home_entry` is fixed at construction. `current_cell == None` means the
/// token is in reserve: not yet placed, or sent back after being captured.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    home_entry: [Position; 2],
    current_cell: Option<Position>,
}

impl Player {
    /// Create a player in reserve.
    #[must_use]
    pub fn new(id: PlayerId, home_entry: [Position; 2]) -> Self {
        Self {
            id,
            home_entry,
            current_cell: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The two cells this player may enter from while in reserve, in
    /// construction order.
    #[must_use]
    pub fn home_entry(&self) -> [Position; 2] {
        self.home_entry
    }

    #[must_use]
    pub fn current_cell(&self) -> Option<Position> {
        self.current_cell
    }

    /// Check whether the token is off the board.
    #[must_use]
    pub fn in_reserve(&self) -> bool {
        self.current_cell.is_none()
    }

    pub(crate) fn set_current_cell(&mut self, cell: Option<Position>) {
        self.current_cell = cell;
    }
}
