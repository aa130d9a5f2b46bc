//! Concept pool and multiple-choice question generation.
//!
//! Concepts come from the hosting app (via `ConceptProvider`); the
//! `QuestionBank` validates the pool up front and turns it into
//! four-option questions, one per sub-turn.

pub mod bank;
pub mod concept;

pub use bank::{Question, QuestionBank, MIN_CONCEPTS, OPTION_COUNT};
pub use concept::{Concept, ConceptId, ConceptProvider};
