//! Battle orchestration.
//!
//! - [`Phase`]: one exhaustive enum of where a battle stands
//! - [`BattleState`]: the aggregate every transition mutates
//! - [`BattleEvent`]: ordered facts emitted by each operation
//! - [`BattleMachine`]: the engine drivers push events into

pub mod event;
pub mod machine;
pub mod phase;
pub mod state;

pub use event::{Absorption, BattleEvent, Events};
pub use machine::{BattleBuilder, BattleMachine};
pub use phase::Phase;
pub use state::{BattleSnapshot, BattleState};
