//! Battle error taxonomy.
//!
//! Everything here is recoverable: a rejected event leaves the battle
//! untouched and the driver simply carries on. The only error surfaced
//! before a battle exists is `InsufficientConcepts`, raised while
//! validating the concept pool.

use thiserror::Error;

/// Errors reported by the battle engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BattleError {
    /// The concept pool cannot produce four-option questions.
    #[error("need at least {required} concepts with distinct terms to start a battle, found {found}")]
    InsufficientConcepts { found: usize, required: usize },

    /// An event arrived in a phase that does not accept it. The event was
    /// rejected as a no-op; no state changed.
    #[error("{event} is not legal in the {phase} phase")]
    InvalidTransition {
        phase: &'static str,
        event: &'static str,
    },

    /// An answer referenced an option index outside `0..4`. Rejected as a
    /// no-op, like any other illegal event.
    #[error("option index {index} is out of range for a {option_count}-option question")]
    InvalidOption { index: usize, option_count: usize },
}
