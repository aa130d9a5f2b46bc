//! Battle sides and per-side data storage.
//!
//! ## Combatant
//!
//! A battle always has exactly two sides: the player and the enemy.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Combatant`, used for HP and shield
//! flags. Backed by an array, so access is O(1) and the map is `Copy`
//! whenever `T` is.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides in a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combatant {
    Player,
    Enemy,
}

impl Combatant {
    /// The side this combatant attacks.
    ///
    /// ```
    /// use quiz_clash::core::Combatant;
    ///
    /// assert_eq!(Combatant::Player.opponent(), Combatant::Enemy);
    /// assert_eq!(Combatant::Enemy.opponent(), Combatant::Player);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Combatant::Player => Combatant::Enemy,
            Combatant::Enemy => Combatant::Player,
        }
    }

    /// Slot index for `SideMap` storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Combatant::Player => 0,
            Combatant::Enemy => 1,
        }
    }

    /// Both sides, player first.
    #[must_use]
    pub const fn both() -> [Combatant; 2] {
        [Combatant::Player, Combatant::Enemy]
    }
}

impl std::fmt::Display for Combatant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Combatant::Player => write!(f, "player"),
            Combatant::Enemy => write!(f, "enemy"),
        }
    }
}

/// Per-side data with one slot for each combatant.
///
/// ## Example
///
/// ```
/// use quiz_clash::core::{Combatant, SideMap};
///
/// let mut hp: SideMap<i64> = SideMap::with_value(60);
///
/// assert_eq!(hp[Combatant::Player], 60);
///
/// hp[Combatant::Enemy] = 45;
/// assert_eq!(hp[Combatant::Enemy], 45);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    ///
    /// The factory receives the `Combatant` for each slot.
    pub fn new(factory: impl Fn(Combatant) -> T) -> Self {
        Self {
            data: [factory(Combatant::Player), factory(Combatant::Enemy)],
        }
    }

    /// Create a map with both slots set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to one side's value.
    #[must_use]
    pub fn get(&self, side: Combatant) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to one side's value.
    pub fn get_mut(&mut self, side: Combatant) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Combatant, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Combatant, &T)> {
        Combatant::both().into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for SideMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Combatant> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Combatant) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Combatant> for SideMap<T> {
    fn index_mut(&mut self, side: Combatant) -> &mut Self::Output {
        self.get_mut(side)
    }
}
