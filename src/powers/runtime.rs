//! Power runtime state - what the catalog table looks like mid-battle.
//!
//! `PowerRuntime` owns the mutable side of a power: whether it is active,
//! how many turn cycles remain, and how many uses are left. The state
//! machine feeds it `TriggerCue`s at the three qualifying moments (answer
//! resolution, HP change, round start); everything else is bookkeeping.
//!
//! Firing is idempotent by construction: an already-active power, an
//! exhausted budget, or a spent per-round allowance all make `try_fire`
//! return `None` without touching state.

use serde::{Deserialize, Serialize};

use super::catalog::{Character, EffectKind, PowerSpec, TriggerKind};

/// A qualifying moment at which triggers are evaluated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerCue {
    /// A player answer just resolved correctly.
    AnswerResolved { consecutive_correct: u32 },
    /// A hit is about to land on the player; `amount` is pre-absorption.
    IncomingDamage { amount: i64 },
    /// Player HP just changed.
    HpChanged { player_hp: i64 },
    /// A round just began.
    RoundStart,
}

/// Mutable state of the chosen character's power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerRuntime {
    /// The character whose catalog row this runtime tracks.
    pub character: Character,

    /// Whether the power is currently active (lingering effects only).
    pub active: bool,

    /// Turn cycles left while active. Meaningless when inactive.
    pub duration_remaining: u32,

    /// Remaining battle-lifetime uses. `None` = unlimited.
    pub uses_remaining: Option<u32>,

    /// Whether a per-round-limited power already fired this round.
    pub used_this_round: bool,

    // Activation cycle is exempt from the end-of-cycle decrement, so a
    // "3 turn" power covers three full cycles after the one it fired in.
    fresh: bool,
}

impl PowerRuntime {
    /// Fresh runtime for a newly chosen character.
    #[must_use]
    pub fn new(character: Character) -> Self {
        Self {
            character,
            active: false,
            duration_remaining: 0,
            uses_remaining: character.power_spec().uses.total,
            used_this_round: false,
            fresh: false,
        }
    }

    /// The catalog row for this runtime's character.
    #[must_use]
    pub fn spec(&self) -> PowerSpec {
        self.character.power_spec()
    }

    /// Whether the trigger guard permits firing at all.
    #[must_use]
    pub fn can_fire(&self) -> bool {
        let per_round_ok = self.spec().uses.per_round.is_none() || !self.used_this_round;
        !self.active && self.uses_remaining.is_none_or(|uses| uses > 0) && per_round_ok
    }

    /// Whether the trigger predicate matches a cue.
    #[must_use]
    pub fn matches(&self, cue: &TriggerCue) -> bool {
        match (self.spec().trigger, cue) {
            (
                TriggerKind::ConsecutiveCorrect { count },
                TriggerCue::AnswerResolved { consecutive_correct },
            ) => *consecutive_correct >= count,
            (
                TriggerKind::IncomingDamageAtLeast { amount },
                TriggerCue::IncomingDamage { amount: incoming },
            ) => *incoming >= amount,
            (TriggerKind::HpBelow { threshold }, TriggerCue::HpChanged { player_hp }) => {
                *player_hp < threshold
            }
            (TriggerKind::HpAtMost { threshold }, TriggerCue::HpChanged { player_hp }) => {
                *player_hp <= threshold
            }
            (TriggerKind::RoundStart, TriggerCue::RoundStart) => true,
            _ => false,
        }
    }

    /// Evaluate one cue. Fires at most once; duplicates are no-ops.
    ///
    /// On a fire, consumes a use, marks the per-round allowance, and arms
    /// lingering effects. Returns the effect to apply.
    pub fn try_fire(&mut self, cue: &TriggerCue) -> Option<EffectKind> {
        if !self.can_fire() || !self.matches(cue) {
            return None;
        }

        let spec = self.spec();
        if let Some(uses) = &mut self.uses_remaining {
            *uses = uses.saturating_sub(1);
        }
        if spec.uses.per_round.is_some() {
            self.used_this_round = true;
        }
        if !spec.is_instant() {
            self.active = true;
            self.duration_remaining = spec.duration.unwrap_or(0);
            self.fresh = true;
        }

        Some(spec.effect)
    }

    /// The multiplier an active power lends to player attacks.
    #[must_use]
    pub fn attack_multiplier(&self) -> Option<i64> {
        match (self.active, self.spec().effect) {
            (true, EffectKind::DamageMultiplier { factor }) => Some(factor),
            _ => None,
        }
    }

    /// Whether incoming damage is currently absorbed.
    #[must_use]
    pub fn immunity_active(&self) -> bool {
        self.active && matches!(self.spec().effect, EffectKind::DamageImmunity)
    }

    /// Spend a single-shot attack modifier. Returns true if one was
    /// consumed (the power deactivates).
    pub fn consume_single_shot(&mut self) -> bool {
        if self.active && self.spec().is_single_shot() {
            self.active = false;
            self.duration_remaining = 0;
            true
        } else {
            false
        }
    }

    /// End-of-cycle duration bookkeeping. Returns true if the power
    /// expired on this cycle.
    ///
    /// The activation cycle itself is skipped; single-shot modifiers only
    /// expire through `consume_single_shot`.
    pub fn end_cycle(&mut self) -> bool {
        if !self.active {
            return false;
        }
        if self.fresh {
            self.fresh = false;
            return false;
        }
        if self.spec().is_single_shot() {
            return false;
        }

        self.duration_remaining = self.duration_remaining.saturating_sub(1);
        if self.duration_remaining == 0 {
            self.active = false;
            return true;
        }
        false
    }

    /// Reset per-round allowances. Active state, remaining duration, and
    /// lifetime uses all carry across rounds.
    pub fn start_round(&mut self) {
        self.used_this_round = false;
    }

    /// Display label while the power is active.
    #[must_use]
    pub fn active_label(&self) -> Option<&'static str> {
        self.active.then(|| self.spec().name)
    }
}
