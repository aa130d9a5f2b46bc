//! # quiz-clash
//!
//! A turn-based battle engine for quiz-combat study games.
//!
//! ## Design Principles
//!
//! 1. **One Exhaustive Phase Enum**: Battle flow is a tagged union, not a
//!    pile of booleans. Illegal event/phase combinations are rejected as
//!    no-ops, never applied.
//!
//! 2. **Data-Driven Powers**: The five character abilities are rows in a
//!    `PowerSpec` table (trigger, effect, duration, uses), evaluated
//!    generically by the state machine.
//!
//! 3. **Deterministic Simulation**: Seeded ChaCha8 RNG and a logical clock
//!    driven by external `tick` calls. Same seed + same inputs = same
//!    battle, event for event.
//!
//! ## Architecture
//!
//! The engine is single-threaded and event-driven: the driver feeds
//! `select_character`, `submit_answer`, and `tick` into a `BattleMachine`,
//! which owns the single `BattleState` and emits `BattleEvent` batches
//! describing what happened. Rendering, persistence, and the points ledger
//! live outside the crate behind trait seams.
//!
//! ## Modules
//!
//! - `core`: Combatant sides, RNG, configuration, errors
//! - `questions`: Concept pool and multiple-choice question generation
//! - `powers`: Character catalog and power runtime bookkeeping
//! - `combat`: Damage formula and the suspendable turn timer
//! - `battle`: Phase enum, emitted events, battle state, the state machine
//! - `rounds`: Enemy profiles and round progression
//! - `score`: Score accrual, bonus classification, points-ledger seam

pub mod core;
pub mod questions;
pub mod powers;
pub mod combat;
pub mod battle;
pub mod rounds;
pub mod score;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, BattleError, BattleRng, BattleRngState, Combatant, SideMap,
};

pub use crate::questions::{Concept, ConceptId, ConceptProvider, Question, QuestionBank};

pub use crate::powers::{
    Character, EffectKind, PowerRuntime, PowerSpec, TriggerCue, TriggerKind, UseLimit,
};

pub use crate::combat::{damage, enemy_damage, DamageModifier, TimerTick, TurnTimer};

pub use crate::battle::{
    Absorption, BattleBuilder, BattleEvent, BattleMachine, BattleSnapshot, BattleState, Events,
    Phase,
};

pub use crate::rounds::{EnemyProfile, Round, RoundManager};

pub use crate::score::{AwardReceipt, AwardRequest, BonusType, PointsLedger, ScoreKeeper};
