//! Core engine types: combatant sides, RNG, configuration, errors.
//!
//! The fundamental building blocks the rest of the engine is assembled
//! from. Nothing here knows about phases or powers; higher modules do.

pub mod combatant;
pub mod config;
pub mod error;
pub mod rng;

pub use combatant::{Combatant, SideMap};
pub use config::BattleConfig;
pub use error::BattleError;
pub use rng::{BattleRng, BattleRngState};
