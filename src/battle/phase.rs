//! The battle phase - one exhaustive enum.
//!
//! Every battle is in exactly one phase, and the phase alone decides
//! which events are legal. This replaces the overlapping boolean flags a
//! naive implementation accumulates (`game_started`, `is_player_turn`,
//! `show_result`, ...) and makes impossible combinations unrepresentable.

use serde::{Deserialize, Serialize};

use crate::core::Combatant;
use crate::rounds::Round;

/// Where the battle currently stands.
///
/// Transitions are owned by `BattleMachine`; nothing else writes a phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player to pick a character.
    SelectingCharacter,
    /// Round banner is displaying; no input accepted.
    RoundIntro { round: Round },
    /// The player's question is live and the countdown runs.
    PlayerTurn,
    /// A power activation is displaying; the turn timer is suspended and
    /// `then` takes the next sub-turn when the window closes.
    PowerEffect { then: Combatant },
    /// The enemy's question is live; resolution arrives after think time.
    EnemyTurn,
    /// Round won banner; advances to the next intro automatically.
    RoundVictory { round: Round },
    /// Terminal. No further events are accepted.
    GameOver { won: bool },
}

impl Phase {
    /// Short name for logs and error reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Phase::SelectingCharacter => "SelectingCharacter",
            Phase::RoundIntro { .. } => "RoundIntro",
            Phase::PlayerTurn => "PlayerTurn",
            Phase::PowerEffect { .. } => "PowerEffect",
            Phase::EnemyTurn => "EnemyTurn",
            Phase::RoundVictory { .. } => "RoundVictory",
            Phase::GameOver { .. } => "GameOver",
        }
    }

    /// Whether the battle has ended.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Phase::GameOver { .. })
    }

    /// Whether `submit_answer` is legal: a turn is live and no power
    /// effect window is blocking input.
    #[must_use]
    pub const fn accepts_answers(&self) -> bool {
        matches!(self, Phase::PlayerTurn | Phase::EnemyTurn)
    }

    /// The side whose answer resolves in this phase, if any.
    #[must_use]
    pub const fn actor(&self) -> Option<Combatant> {
        match self {
            Phase::PlayerTurn => Some(Combatant::Player),
            Phase::EnemyTurn => Some(Combatant::Enemy),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
