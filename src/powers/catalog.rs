//! The character catalog - five variants, one rule table.
//!
//! Every character ability is a `PowerSpec` row: a trigger predicate, an
//! effect, an optional duration, and a use budget. The state machine
//! evaluates the table generically; nothing downstream branches on which
//! character is in play.
//!
//! | Character | Trigger | Effect | Duration/Uses |
//! |---|---|---|---|
//! | Warrior | 3 consecutive correct | double damage | 3 turns, renewable |
//! | Wizard | incoming damage >= 25 | damage immunity | 2 turns, re-triggerable |
//! | Ninja | player HP < 20 | triple next attack | 1 use |
//! | Robot | player HP <= 15 | heal +30 | 1 use per battle |
//! | Dragon | round start | 10 instant damage | 1 per round, 3 per battle |

use serde::{Deserialize, Serialize};

/// A playable character, chosen once per battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Character {
    Warrior,
    Wizard,
    Ninja,
    Robot,
    Dragon,
}

impl Character {
    /// All five characters, in catalog order.
    pub const ALL: [Character; 5] = [
        Character::Warrior,
        Character::Wizard,
        Character::Ninja,
        Character::Robot,
        Character::Dragon,
    ];

    /// This character's power, as catalog data.
    #[must_use]
    pub const fn power_spec(self) -> PowerSpec {
        match self {
            Character::Warrior => PowerSpec {
                name: "Battle Fury",
                trigger: TriggerKind::ConsecutiveCorrect { count: 3 },
                effect: EffectKind::DamageMultiplier { factor: 2 },
                duration: Some(3),
                uses: UseLimit::UNLIMITED,
            },
            Character::Wizard => PowerSpec {
                name: "Arcane Ward",
                trigger: TriggerKind::IncomingDamageAtLeast { amount: 25 },
                effect: EffectKind::DamageImmunity,
                duration: Some(2),
                uses: UseLimit::UNLIMITED,
            },
            Character::Ninja => PowerSpec {
                name: "Shadow Strike",
                trigger: TriggerKind::HpBelow { threshold: 20 },
                effect: EffectKind::DamageMultiplier { factor: 3 },
                duration: None,
                uses: UseLimit::total(1),
            },
            Character::Robot => PowerSpec {
                name: "Emergency Repair",
                trigger: TriggerKind::HpAtMost { threshold: 15 },
                effect: EffectKind::Heal { amount: 30 },
                duration: None,
                uses: UseLimit::total(1),
            },
            Character::Dragon => PowerSpec {
                name: "Dragon's Breath",
                trigger: TriggerKind::RoundStart,
                effect: EffectKind::InstantDamage { amount: 10 },
                duration: None,
                uses: UseLimit::per_round(1, 3),
            },
        }
    }

    /// The power's display name.
    #[must_use]
    pub const fn power_name(self) -> &'static str {
        self.power_spec().name
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Character::Warrior => "Warrior",
            Character::Wizard => "Wizard",
            Character::Ninja => "Ninja",
            Character::Robot => "Robot",
            Character::Dragon => "Dragon",
        };
        write!(f, "{name}")
    }
}

/// When a power fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerKind {
    /// The player's correct-answer streak reached `count`.
    ConsecutiveCorrect { count: u32 },
    /// A hit of at least `amount` is incoming, measured before absorption.
    IncomingDamageAtLeast { amount: i64 },
    /// Player HP dropped strictly below `threshold`.
    HpBelow { threshold: i64 },
    /// Player HP dropped to `threshold` or less.
    HpAtMost { threshold: i64 },
    /// A round began.
    RoundStart,
}

/// What a power does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Multiply player attack damage. With a duration, applies to every
    /// attack while active; without one it is consumed by a single attack.
    DamageMultiplier { factor: i64 },
    /// Absorb all incoming damage while active.
    DamageImmunity,
    /// Instantly restore player HP (clamped to max).
    Heal { amount: i64 },
    /// Instantly damage the enemy.
    InstantDamage { amount: i64 },
}

/// How often a power may fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseLimit {
    /// Lifetime cap for the whole battle. `None` = unlimited.
    pub total: Option<u32>,
    /// Cap within a single round. `None` = unlimited.
    pub per_round: Option<u32>,
}

impl UseLimit {
    /// No cap at all.
    pub const UNLIMITED: UseLimit = UseLimit {
        total: None,
        per_round: None,
    };

    /// Battle-lifetime cap only.
    #[must_use]
    pub const fn total(n: u32) -> Self {
        Self {
            total: Some(n),
            per_round: None,
        }
    }

    /// Per-round cap with a battle-lifetime cap.
    #[must_use]
    pub const fn per_round(per_round: u32, total: u32) -> Self {
        Self {
            total: Some(total),
            per_round: Some(per_round),
        }
    }
}

/// One row of the catalog: trigger, effect, duration, budget.
///
/// Catalog rows are static data derived from the `Character`, so they
/// are never serialized; persisted state stores the character instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerSpec {
    /// Display name for the power.
    pub name: &'static str,

    /// When the power fires.
    pub trigger: TriggerKind,

    /// What happens when it fires.
    pub effect: EffectKind,

    /// Turn cycles the power stays active after firing. `None` for
    /// instant effects and single-shot modifiers.
    pub duration: Option<u32>,

    /// Use budget.
    pub uses: UseLimit,
}

impl PowerSpec {
    /// Instant effects apply at trigger time and never stay active.
    #[must_use]
    pub const fn is_instant(&self) -> bool {
        matches!(
            self.effect,
            EffectKind::Heal { .. } | EffectKind::InstantDamage { .. }
        )
    }

    /// A lingering modifier with no duration is consumed by its first use.
    #[must_use]
    pub const fn is_single_shot(&self) -> bool {
        !self.is_instant() && self.duration.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_rows() {
        let warrior = Character::Warrior.power_spec();
        assert_eq!(warrior.trigger, TriggerKind::ConsecutiveCorrect { count: 3 });
        assert_eq!(warrior.effect, EffectKind::DamageMultiplier { factor: 2 });
        assert_eq!(warrior.duration, Some(3));
        assert_eq!(warrior.uses, UseLimit::UNLIMITED);

        let wizard = Character::Wizard.power_spec();
        assert_eq!(wizard.trigger, TriggerKind::IncomingDamageAtLeast { amount: 25 });
        assert_eq!(wizard.effect, EffectKind::DamageImmunity);
        assert_eq!(wizard.duration, Some(2));

        let ninja = Character::Ninja.power_spec();
        assert_eq!(ninja.trigger, TriggerKind::HpBelow { threshold: 20 });
        assert_eq!(ninja.effect, EffectKind::DamageMultiplier { factor: 3 });
        assert_eq!(ninja.uses.total, Some(1));

        let robot = Character::Robot.power_spec();
        assert_eq!(robot.trigger, TriggerKind::HpAtMost { threshold: 15 });
        assert_eq!(robot.effect, EffectKind::Heal { amount: 30 });
        assert_eq!(robot.uses.total, Some(1));

        let dragon = Character::Dragon.power_spec();
        assert_eq!(dragon.trigger, TriggerKind::RoundStart);
        assert_eq!(dragon.effect, EffectKind::InstantDamage { amount: 10 });
        assert_eq!(dragon.uses, UseLimit::per_round(1, 3));
    }

    #[test]
    fn test_instant_vs_lingering() {
        assert!(!Character::Warrior.power_spec().is_instant());
        assert!(!Character::Wizard.power_spec().is_instant());
        assert!(!Character::Ninja.power_spec().is_instant());
        assert!(Character::Robot.power_spec().is_instant());
        assert!(Character::Dragon.power_spec().is_instant());

        assert!(Character::Ninja.power_spec().is_single_shot());
        assert!(!Character::Warrior.power_spec().is_single_shot());
        assert!(!Character::Robot.power_spec().is_single_shot());
    }

    #[test]
    fn test_every_character_has_a_name() {
        for character in Character::ALL {
            assert!(!character.power_name().is_empty());
            assert!(!format!("{character}").is_empty());
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        for character in Character::ALL {
            let json = serde_json::to_string(&character).unwrap();
            let restored: Character = serde_json::from_str(&json).unwrap();
            assert_eq!(character, restored);
        }
    }
}
