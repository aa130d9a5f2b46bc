//! Round progression and enemy difficulty.
//!
//! A battle is a best-of-three ladder: win a round, heal up, face a
//! sharper enemy. The enemy gets smarter and faster each round - those
//! curves live here as per-round [`EnemyProfile`]s.
//!
//! ## Round boundary
//!
//! Between rounds both sides return to full HP and the player's streaks
//! reset. Power state mostly carries across: spent total-use budgets
//! stay spent, active lingering effects keep their remaining duration,
//! and only per-round use flags clear.

use serde::{Deserialize, Serialize};

use crate::battle::BattleState;
use crate::core::Combatant;

/// Rounds per battle. Clearing all of them wins it.
pub const ROUND_COUNT: u8 = 3;

/// A 1-based round number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Round(u8);

impl Round {
    /// Round 1.
    pub const FIRST: Round = Round(1);

    /// Create a round number. Callers outside tests normally only ever
    /// need [`Round::FIRST`] and [`next`](Self::next).
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Round(number)
    }

    /// The 1-based number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The following round, or `None` after the last one.
    #[must_use]
    pub const fn next(self) -> Option<Round> {
        if self.0 >= ROUND_COUNT {
            None
        } else {
            Some(Round(self.0 + 1))
        }
    }

    /// Whether winning this round wins the battle.
    #[must_use]
    pub const fn is_final(self) -> bool {
        self.0 >= ROUND_COUNT
    }

    /// Zero-based index for table lookups.
    #[must_use]
    const fn index(self) -> usize {
        (self.0.saturating_sub(1)) as usize
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round {}", self.0)
    }
}

/// How the enemy plays in one round.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyProfile {
    /// Probability the enemy answers its question correctly.
    pub accuracy: f64,

    /// Think time in milliseconds before the enemy's answer resolves.
    pub think_time_ms: u32,
}

impl EnemyProfile {
    #[must_use]
    pub const fn new(accuracy: f64, think_time_ms: u32) -> Self {
        Self { accuracy, think_time_ms }
    }
}

/// Per-round enemy difficulty: 60% accuracy in round 1 up to 90% in
/// round 3, thinking faster each round.
const DEFAULT_PROFILES: [EnemyProfile; ROUND_COUNT as usize] = [
    EnemyProfile::new(0.60, 3_000),
    EnemyProfile::new(0.75, 2_000),
    EnemyProfile::new(0.90, 1_000),
];

/// Owns the difficulty curve and the round-boundary reset.
///
/// Win/loss checks are pure queries here so the machine, tests, and
/// drivers all agree on what "battle over" means.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundManager {
    profiles: [EnemyProfile; ROUND_COUNT as usize],
}

impl Default for RoundManager {
    fn default() -> Self {
        Self { profiles: DEFAULT_PROFILES }
    }
}

impl RoundManager {
    /// Manager with the standard difficulty curve.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the difficulty curve (easier fixtures, harder modes).
    #[must_use]
    pub fn with_profiles(profiles: [EnemyProfile; ROUND_COUNT as usize]) -> Self {
        Self { profiles }
    }

    /// The enemy profile for `round`.
    #[must_use]
    pub fn profile(&self, round: Round) -> EnemyProfile {
        self.profiles[round.index().min(self.profiles.len() - 1)]
    }

    /// Reset `state` for the start of `round`.
    ///
    /// Both sides heal to `max_hp`, streaks clear, and per-round power
    /// flags clear. Cross-round power state (spent uses, remaining
    /// duration) is preserved.
    pub fn start_round(&self, state: &mut BattleState, round: Round, max_hp: i64) {
        state.round = round;
        for side in Combatant::both() {
            state.hp[side] = max_hp;
        }
        state.combo = 0;
        state.consecutive_correct = 0;
        state.power.start_round();
        state.question = None;
    }

    /// Whether the battle is won: the enemy fell in the final round.
    #[must_use]
    pub fn is_battle_won(&self, state: &BattleState) -> bool {
        state.is_defeated(Combatant::Enemy) && state.round.is_final()
    }

    /// Whether the battle is lost: the player fell in any round.
    #[must_use]
    pub fn is_battle_lost(&self, state: &BattleState) -> bool {
        state.is_defeated(Combatant::Player)
    }
}
