//! Battle tuning knobs.
//!
//! `BattleConfig` collects the constants a driver may want to tune:
//! starting HP, the enemy damage roll, and the display/turn timings the
//! logical clock runs on. Defaults match the standard three-round game.
//!
//! The player damage law (base 15, combo bonus capped at 10) is fixed in
//! `combat::damage` and deliberately not configurable.

use serde::{Deserialize, Serialize};

/// Tunable battle constants.
///
/// ## Example
///
/// ```
/// use quiz_clash::core::BattleConfig;
///
/// let config = BattleConfig::default()
///     .with_turn_time_ms(15_000)
///     .with_enemy_damage(25, 5);
///
/// assert_eq!(config.turn_time_ms, 15_000);
/// assert_eq!(config.enemy_damage_base, 25);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Starting (and maximum) HP for both sides.
    pub max_hp: i64,

    /// A correct enemy answer deals `enemy_damage_base + uniform(0, spread)`.
    pub enemy_damage_base: i64,

    /// Inclusive upper bound of the enemy damage jitter.
    pub enemy_damage_spread: i64,

    /// Countdown per sub-turn, in milliseconds.
    pub turn_time_ms: u32,

    /// Round-intro display window before the first question.
    pub intro_ms: u32,

    /// Round-victory display window before the next intro.
    pub victory_ms: u32,

    /// Power-activation display window; the turn timer is suspended for it.
    pub power_effect_ms: u32,

    /// Points for each correct player answer, before the combo bonus.
    pub answer_points: i64,

    /// Flat bonus added to the final score on victory.
    pub victory_bonus: i64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_hp: 60,
            enemy_damage_base: 15,
            enemy_damage_spread: 5,
            turn_time_ms: 20_000,
            intro_ms: 2_000,
            victory_ms: 2_500,
            power_effect_ms: 1_500,
            answer_points: 10,
            victory_bonus: 50,
        }
    }
}

impl BattleConfig {
    /// Create a config with the standard defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting HP for both sides.
    #[must_use]
    pub fn with_max_hp(mut self, hp: i64) -> Self {
        self.max_hp = hp;
        self
    }

    /// Set the enemy damage roll (`base + uniform(0, spread)`).
    #[must_use]
    pub fn with_enemy_damage(mut self, base: i64, spread: i64) -> Self {
        self.enemy_damage_base = base;
        self.enemy_damage_spread = spread;
        self
    }

    /// Set the per-turn countdown.
    #[must_use]
    pub fn with_turn_time_ms(mut self, ms: u32) -> Self {
        self.turn_time_ms = ms;
        self
    }

    /// Set the round-intro display window.
    #[must_use]
    pub fn with_intro_ms(mut self, ms: u32) -> Self {
        self.intro_ms = ms;
        self
    }

    /// Set the round-victory display window.
    #[must_use]
    pub fn with_victory_ms(mut self, ms: u32) -> Self {
        self.victory_ms = ms;
        self
    }

    /// Set the power-activation display window.
    #[must_use]
    pub fn with_power_effect_ms(mut self, ms: u32) -> Self {
        self.power_effect_ms = ms;
        self
    }

    /// Set the per-answer score and victory bonus.
    #[must_use]
    pub fn with_scoring(mut self, answer_points: i64, victory_bonus: i64) -> Self {
        self.answer_points = answer_points;
        self.victory_bonus = victory_bonus;
        self
    }
}
