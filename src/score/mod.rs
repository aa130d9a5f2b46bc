//! Scoring and settlement.
//!
//! Points accrue during the battle (per correct answer, with a combo
//! bonus) and are settled exactly once at game over: the final score
//! plus any victory bonus is packaged into an [`AwardRequest`] for the
//! app's points ledger. The `points_awarded` guard on the state makes
//! settlement idempotent - a driver can call it from a game-over screen
//! that re-renders without double-paying.

use serde::{Deserialize, Serialize};

use crate::battle::{BattleState, Phase};
use crate::combat::{COMBO_BONUS_CAP, COMBO_STEP};
use crate::core::{BattleConfig, Combatant};

/// Points for one correct player answer: a flat base plus the same
/// capped combo bonus the damage formula uses.
///
/// `combo` is the streak including this answer.
///
/// ```
/// use quiz_clash::score::answer_points;
///
/// assert_eq!(answer_points(10, 1), 12);
/// assert_eq!(answer_points(10, 3), 16);
/// assert_eq!(answer_points(10, 9), 20); // bonus caps at +10
/// ```
#[must_use]
pub fn answer_points(base: i64, combo: u32) -> i64 {
    base + (i64::from(combo) * COMBO_STEP).min(COMBO_BONUS_CAP)
}

/// Which achievement bonus a finished battle earned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusType {
    /// Won without losing a single HP in the final round.
    Perfect,
    /// Won.
    Streak,
    /// Lost. Accrued points are still settled.
    None,
}

impl BonusType {
    /// Classify a finished battle.
    #[must_use]
    pub fn classify(won: bool, player_hp: i64, max_hp: i64) -> Self {
        if won && player_hp >= max_hp {
            BonusType::Perfect
        } else if won {
            BonusType::Streak
        } else {
            BonusType::None
        }
    }
}

/// Settlement payload handed to the points ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardRequest {
    /// Stable identifier of this game for the ledger.
    pub game_id: String,
    /// Human-readable game name for activity feeds.
    pub game_name: String,
    /// Final score: accrued points plus the victory bonus if won.
    pub score: i64,
    /// Achievement bonus classification.
    pub bonus: BonusType,
}

/// What the ledger reports back after an award.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardReceipt {
    /// The user's lifetime points after this award.
    pub total_points: i64,
    /// Achievements newly unlocked by this award.
    pub new_achievements: Vec<String>,
}

/// The app-side points system.
///
/// The battle engine never talks to storage or the network; the host
/// passes an implementation in at settlement time.
pub trait PointsLedger {
    /// Record an award and report the updated totals.
    fn award(&mut self, request: &AwardRequest) -> AwardReceipt;
}

/// Builds settlement requests and enforces the settle-once guard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreKeeper {
    game_id: String,
    game_name: String,
}

impl Default for ScoreKeeper {
    fn default() -> Self {
        Self {
            game_id: "quiz-clash".to_owned(),
            game_name: "Quiz Clash".to_owned(),
        }
    }
}

impl ScoreKeeper {
    /// Keeper with custom ledger identifiers.
    #[must_use]
    pub fn new(game_id: impl Into<String>, game_name: impl Into<String>) -> Self {
        Self { game_id: game_id.into(), game_name: game_name.into() }
    }

    /// Settle a finished battle.
    ///
    /// Returns the award request on the first call after game over, and
    /// `None` on every later call or while the battle is still running.
    /// Sets the `points_awarded` guard on success.
    pub fn settle(&self, state: &mut BattleState, config: &BattleConfig) -> Option<AwardRequest> {
        let Phase::GameOver { won } = state.phase else {
            return None;
        };
        if state.points_awarded {
            return None;
        }
        state.points_awarded = true;

        let bonus = BonusType::classify(won, state.hp[Combatant::Player], config.max_hp);
        let score = state.score + if won { config.victory_bonus } else { 0 };

        Some(AwardRequest {
            game_id: self.game_id.clone(),
            game_name: self.game_name.clone(),
            score,
            bonus,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::powers::Character;

    fn finished_state(won: bool, player_hp: i64, score: i64) -> BattleState {
        let mut state = BattleState::new(Character::Warrior, 60);
        state.phase = Phase::GameOver { won };
        state.hp[Combatant::Player] = player_hp;
        state.score = score;
        state
    }

    #[test]
    fn test_answer_points_caps() {
        assert_eq!(answer_points(10, 0), 10);
        assert_eq!(answer_points(10, 2), 14);
        assert_eq!(answer_points(10, 5), 20);
        assert_eq!(answer_points(10, 50), 20);
    }

    #[test]
    fn test_bonus_classification() {
        assert_eq!(BonusType::classify(true, 60, 60), BonusType::Perfect);
        assert_eq!(BonusType::classify(true, 59, 60), BonusType::Streak);
        assert_eq!(BonusType::classify(false, 60, 60), BonusType::None);
    }

    #[test]
    fn test_settle_adds_victory_bonus() {
        let keeper = ScoreKeeper::default();
        let config = BattleConfig::default();
        let mut state = finished_state(true, 48, 120);

        let request = keeper.settle(&mut state, &config).unwrap();
        assert_eq!(request.score, 120 + config.victory_bonus);
        assert_eq!(request.bonus, BonusType::Streak);
        assert_eq!(request.game_id, "quiz-clash");
    }

    #[test]
    fn test_settle_on_defeat_pays_accrued_only() {
        let keeper = ScoreKeeper::default();
        let config = BattleConfig::default();
        let mut state = finished_state(false, 0, 74);

        let request = keeper.settle(&mut state, &config).unwrap();
        assert_eq!(request.score, 74);
        assert_eq!(request.bonus, BonusType::None);
    }

    #[test]
    fn test_settle_is_idempotent() {
        let keeper = ScoreKeeper::default();
        let config = BattleConfig::default();
        let mut state = finished_state(true, 60, 200);

        assert!(keeper.settle(&mut state, &config).is_some());
        assert_eq!(keeper.settle(&mut state, &config), None);
        assert_eq!(keeper.settle(&mut state, &config), None);
    }

    #[test]
    fn test_settle_refuses_running_battle() {
        let keeper = ScoreKeeper::default();
        let config = BattleConfig::default();
        let mut state = BattleState::new(Character::Ninja, 60);
        state.score = 30;

        assert_eq!(keeper.settle(&mut state, &config), None);
        assert!(!state.points_awarded);
    }

    struct RecordingLedger {
        total: i64,
        requests: Vec<AwardRequest>,
    }

    impl PointsLedger for RecordingLedger {
        fn award(&mut self, request: &AwardRequest) -> AwardReceipt {
            self.total += request.score;
            self.requests.push(request.clone());
            AwardReceipt {
                total_points: self.total,
                new_achievements: match request.bonus {
                    BonusType::Perfect => vec!["flawless".to_owned()],
                    _ => Vec::new(),
                },
            }
        }
    }

    #[test]
    fn test_ledger_round_trip() {
        let keeper = ScoreKeeper::default();
        let config = BattleConfig::default();
        let mut ledger = RecordingLedger { total: 500, requests: Vec::new() };

        let mut state = finished_state(true, 60, 180);
        let request = keeper.settle(&mut state, &config).unwrap();
        let receipt = ledger.award(&request);

        assert_eq!(receipt.total_points, 500 + 180 + config.victory_bonus);
        assert_eq!(receipt.new_achievements, vec!["flawless".to_owned()]);
        assert_eq!(ledger.requests.len(), 1);
    }
}
