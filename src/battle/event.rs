//! Battle events.
//!
//! Every mutating operation on the machine returns the ordered list of
//! events it produced. Events are the rendering contract: a driver that
//! replays them can animate exactly what happened without inspecting
//! state diffs. They are facts about the past, so applying them again
//! is meaningless - the state has already moved.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Combatant;
use crate::powers::Character;
use crate::rounds::Round;

/// Event list returned by machine operations.
///
/// Most operations emit between one and four events, so they stay on
/// the stack.
pub type Events = SmallVec<[BattleEvent; 4]>;

/// How an incoming hit was cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Absorption {
    /// A one-time shield pickup was consumed.
    Shield,
    /// An active damage-immunity power soaked the hit without being
    /// consumed.
    Immunity,
}

/// Something observable that happened inside the battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// A character was picked and the battle began.
    BattleStarted { character: Character },
    /// A round intro banner went up. HP and combo have been reset.
    RoundStarted { round: Round },
    /// A new question is live for `actor` and the countdown started.
    TurnStarted { actor: Combatant },
    /// An answer was resolved. `combo` is the player streak after this
    /// answer (unchanged by enemy answers).
    AnswerJudged {
        actor: Combatant,
        option: usize,
        correct: bool,
        combo: u32,
    },
    /// `target` took a hit of `amount` HP.
    DamageDealt { target: Combatant, amount: i64 },
    /// A hit of `amount` was fully negated before touching HP.
    DamageAbsorbed {
        target: Combatant,
        amount: i64,
        absorption: Absorption,
    },
    /// `target` recovered `amount` HP (already clamped to max).
    Healed { target: Combatant, amount: i64 },
    /// The character's special power fired.
    PowerActivated { character: Character },
    /// A lingering power ran out of duration.
    PowerExpired { character: Character },
    /// A one-time shield was granted to `side`.
    ShieldGranted { side: Combatant },
    /// The turn countdown hit zero before an answer arrived.
    TimerExpired { actor: Combatant },
    /// A round was cleared. On the final round `GameOver` follows
    /// immediately instead of a victory banner.
    RoundWon { round: Round },
    /// Terminal: the battle ended.
    GameOver { won: bool },
}
