//! The damage formula.
//!
//! Player damage is a pure function of answer correctness, the current
//! combo, and at most one active power modifier. The law is fixed:
//! wrong answers deal 0; correct answers deal `15 + min(combo * 2, 10)`,
//! multiplied by the single active modifier if one applies.
//!
//! The enemy's roll lives here too: `base + uniform(0, spread)` per
//! correct enemy answer, drawn from the battle RNG.

use serde::{Deserialize, Serialize};

use crate::core::BattleRng;

/// Damage of a correct answer before bonuses.
pub const BASE_DAMAGE: i64 = 15;

/// Extra damage per combo step.
pub const COMBO_STEP: i64 = 2;

/// Cap on the combo bonus.
pub const COMBO_BONUS_CAP: i64 = 10;

/// A multiplicative damage modifier lent by an active power.
///
/// At most one modifier exists per attack; stacking is impossible because
/// a combatant has at most one active power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageModifier {
    factor: i64,
}

impl DamageModifier {
    /// Wrap a power's multiplier.
    #[must_use]
    pub const fn new(factor: i64) -> Self {
        Self { factor }
    }

    /// The multiplier applied to the attack.
    #[must_use]
    pub const fn factor(self) -> i64 {
        self.factor
    }
}

impl std::fmt::Display for DamageModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.factor)
    }
}

/// Player attack damage.
///
/// ```
/// use quiz_clash::combat::{damage, DamageModifier};
///
/// assert_eq!(damage(false, 7, None), 0);
/// assert_eq!(damage(true, 0, None), 15);
/// assert_eq!(damage(true, 3, None), 21);
/// assert_eq!(damage(true, 9, None), 25); // bonus capped at 10
/// assert_eq!(damage(true, 3, Some(DamageModifier::new(2))), 42);
/// ```
#[must_use]
pub fn damage(correct: bool, combo: u32, modifier: Option<DamageModifier>) -> i64 {
    if !correct {
        return 0;
    }

    let combo_bonus = (combo as i64 * COMBO_STEP).min(COMBO_BONUS_CAP);
    let total = BASE_DAMAGE + combo_bonus;

    match modifier {
        Some(modifier) => total * modifier.factor(),
        None => total,
    }
}

/// Enemy attack damage: `base + uniform(0, spread)`, spread inclusive.
#[must_use]
pub fn enemy_damage(rng: &mut BattleRng, base: i64, spread: i64) -> i64 {
    base + rng.gen_range(0..spread + 1)
}
