//! Character powers: the static catalog and its runtime bookkeeping.
//!
//! `catalog` holds the data table (trigger, effect, duration, uses);
//! `runtime` holds the mutable activation state the machine drives.

pub mod catalog;
pub mod runtime;

pub use catalog::{Character, EffectKind, PowerSpec, TriggerKind, UseLimit};
pub use runtime::{PowerRuntime, TriggerCue};
