//! Combat mechanics: the damage formula and the turn countdown.

pub mod damage;
pub mod timer;

pub use damage::{damage, enemy_damage, DamageModifier, BASE_DAMAGE, COMBO_BONUS_CAP, COMBO_STEP};
pub use timer::{TimerTick, TurnTimer};
