//! Player identification and per-side data storage.
//!
//! ## Side
//!
//! One of the two seats at the board. Only a `Side` can be "to move".
//!
//! ## Player
//!
//! Owner/outcome value: `None`, either side, or `Draw`. `Draw` only ever
//! appears as a winner.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player1,
    Player2,
}

impl Side {
    /// Get the opposing side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player1 => Side::Player2,
            Side::Player2 => Side::Player1,
        }
    }

    /// Get the storage index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player1 => 0,
            Side::Player2 => 1,
        }
    }

    /// Iterate over both sides, Player1 first.
    pub fn both() -> impl Iterator<Item = Side> {
        [Side::Player1, Side::Player2].into_iter()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player1 => write!(f, "Player 1"),
            Side::Player2 => write!(f, "Player 2"),
        }
    }
}

/// Cell owner or game winner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[default]
    None,
    Player1,
    Player2,
    /// Terminal outcome only, never a side to move.
    Draw,
}

impl Player {
    /// The side this value names, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Player::Player1 => Some(Side::Player1),
            Player::Player2 => Some(Side::Player2),
            Player::None | Player::Draw => None,
        }
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Player::None)
    }
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Player1 => Player::Player1,
            Side::Player2 => Player::Player2,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::None => write!(f, "None"),
            Player::Player1 => write!(f, "Player 1"),
            Player::Player2 => write!(f, "Player 2"),
            Player::Draw => write!(f, "Draw"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use life_duel::core::{Side, SideMap};
///
/// let mut undos: SideMap<u32> = SideMap::with_value(3);
/// undos[Side::Player2] -= 1;
///
/// assert_eq!(undos[Side::Player1], 3);
/// assert_eq!(undos[Side::Player2], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player1), factory(Side::Player2)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::both().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
