//! Battle state: everything a battle remembers.
//!
//! ## BattleState
//!
//! The complete mutable record of one battle:
//! - Phase, round, HP totals
//! - Player streaks (combo, consecutive correct)
//! - Power runtime, shields
//! - Live question and turn timer
//! - Running score and settlement guard
//!
//! ## BattleSnapshot
//!
//! A flat, serializable view for rendering. Drivers read snapshots;
//! only `BattleMachine` writes state.

use serde::{Deserialize, Serialize};

use crate::combat::TurnTimer;
use crate::core::{Combatant, SideMap};
use crate::powers::{Character, PowerRuntime};
use crate::questions::Question;
use crate::rounds::Round;

use super::phase::Phase;

/// Complete state of one battle.
///
/// All HP arithmetic runs through [`apply_damage`](Self::apply_damage)
/// and [`apply_heal`](Self::apply_heal) so clamping lives in one place.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BattleState {
    // === Identity ===
    /// The character the player picked. Fixed for the whole battle.
    pub character: Character,

    // === Progression ===
    /// Current phase. Written only by the machine.
    pub phase: Phase,

    /// Current round (1-based).
    pub round: Round,

    /// Bumped on every phase transition; scheduled work carries the
    /// generation it was created under and is dropped if it no longer
    /// matches.
    pub generation: u64,

    // === Health ===
    /// Hit points per side, clamped to `0..=max_hp`.
    pub hp: SideMap<i64>,

    /// One-time damage negation per side, consumed by the next hit.
    pub shields: SideMap<bool>,

    // === Streaks ===
    /// Player combo: consecutive correct answers, reset by a miss or
    /// timeout. Feeds the damage bonus and score bonus.
    pub combo: u32,

    /// Best combo reached this battle.
    pub max_combo: u32,

    /// Consecutive correct counter for power triggers. Tracks `combo`
    /// today but is reset independently, so powers keep working if the
    /// combo rules ever diverge.
    pub consecutive_correct: u32,

    // === Power ===
    /// The picked character's special power and its activation state.
    pub power: PowerRuntime,

    // === Turn ===
    /// The live question, if a turn is in progress.
    pub question: Option<Question>,

    /// Countdown for the live turn.
    pub timer: TurnTimer,

    // === Scoring ===
    /// Points accrued so far (answers + combo bonuses).
    pub score: i64,

    /// Settlement guard: set once the final score has been handed to
    /// the points ledger.
    pub points_awarded: bool,
}

impl BattleState {
    /// Fresh state for a just-picked character, sitting at the round 1
    /// intro with full HP on both sides.
    #[must_use]
    pub fn new(character: Character, max_hp: i64) -> Self {
        Self {
            character,
            phase: Phase::RoundIntro { round: Round::FIRST },
            round: Round::FIRST,
            generation: 0,
            hp: SideMap::with_value(max_hp),
            shields: SideMap::with_value(false),
            combo: 0,
            max_combo: 0,
            consecutive_correct: 0,
            power: PowerRuntime::new(character),
            question: None,
            timer: TurnTimer::default(),
            score: 0,
            points_awarded: false,
        }
    }

    /// Subtract `amount` HP from `target`, clamping at zero.
    ///
    /// Returns the HP actually lost.
    pub fn apply_damage(&mut self, target: Combatant, amount: i64) -> i64 {
        let before = self.hp[target];
        self.hp[target] = (before - amount).max(0);
        before - self.hp[target]
    }

    /// Add `amount` HP to `target`, clamping at `max_hp`.
    ///
    /// Returns the HP actually recovered.
    pub fn apply_heal(&mut self, target: Combatant, amount: i64, max_hp: i64) -> i64 {
        let before = self.hp[target];
        self.hp[target] = (before + amount).min(max_hp);
        self.hp[target] - before
    }

    /// Whether `side` is at zero HP.
    #[must_use]
    pub fn is_defeated(&self, side: Combatant) -> bool {
        self.hp[side] <= 0
    }

    /// Record a correct player answer: extend both streaks.
    pub fn record_correct(&mut self) {
        self.combo += 1;
        self.consecutive_correct += 1;
        self.max_combo = self.max_combo.max(self.combo);
    }

    /// Record a wrong player answer or timeout: break both streaks.
    pub fn record_incorrect(&mut self) {
        self.combo = 0;
        self.consecutive_correct = 0;
    }

    /// Flat view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            character: self.character,
            phase: self.phase,
            round: self.round,
            player_hp: self.hp[Combatant::Player],
            enemy_hp: self.hp[Combatant::Enemy],
            combo: self.combo,
            max_combo: self.max_combo,
            score: self.score,
            time_left_ms: self.timer.remaining_ms(),
            seconds_left: self.timer.seconds_left(),
            active_power: self.power.active_label().map(str::to_owned),
            player_shield: self.shields[Combatant::Player],
            enemy_shield: self.shields[Combatant::Enemy],
            generation: self.generation,
        }
    }
}

/// Read-only view of a battle for drivers.
///
/// Everything a battle screen needs to draw one frame, with no
/// references back into the machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub character: Character,
    pub phase: Phase,
    pub round: Round,
    pub player_hp: i64,
    pub enemy_hp: i64,
    pub combo: u32,
    pub max_combo: u32,
    pub score: i64,
    /// Milliseconds left on the turn countdown (0 when no turn is live).
    pub time_left_ms: u32,
    /// Whole seconds left, rounded up, for countdown displays.
    pub seconds_left: u32,
    /// Name of the active lingering power, if any.
    pub active_power: Option<String>,
    pub player_shield: bool,
    pub enemy_shield: bool,
    /// Phase-transition counter; lets drivers discard callbacks armed
    /// for a phase the battle has since left.
    pub generation: u64,
}
