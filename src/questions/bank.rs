//! Question generation from a validated concept pool.
//!
//! The bank is constructed once per battle. Construction is where
//! `InsufficientConcepts` is raised: four-option questions need at least
//! four concepts with four distinct terms, and surfacing that before any
//! battle state exists keeps the state machine free of partial starts.
//!
//! Each sub-turn draws a fresh `Question`: one concept supplies the
//! prompt (its definition) and the correct option (its term); three
//! distinct terms from the remaining pool pad out the options.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{BattleError, BattleRng};

use super::concept::{Concept, ConceptId};

/// Options per question.
pub const OPTION_COUNT: usize = 4;

/// Minimum concepts (with distinct terms) required to start a battle.
pub const MIN_CONCEPTS: usize = 4;

/// A multiple-choice question, immutable once generated.
///
/// Exactly one option is correct.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The concept being asked about.
    pub concept: ConceptId,

    /// The prompt shown to the actor (the concept's definition).
    pub prompt: String,

    /// Four answer options in display order.
    pub options: [String; OPTION_COUNT],

    /// Index of the correct option.
    pub correct: usize,
}

impl Question {
    /// Judge an answer.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct
    }

    /// The correct option's text.
    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct]
    }
}

/// A validated pool of concepts that generates questions.
///
/// ## Example
///
/// ```
/// use quiz_clash::core::BattleRng;
/// use quiz_clash::questions::{Concept, ConceptId, QuestionBank};
///
/// let concepts: Vec<_> = [(1, "a"), (2, "b"), (3, "c"), (4, "d")]
///     .map(|(id, term)| Concept::new(ConceptId::new(id), term, format!("definition of {term}")))
///     .into();
///
/// let bank = QuestionBank::new(concepts).unwrap();
/// let mut rng = BattleRng::new(7);
/// let question = bank.next(&mut rng);
///
/// assert!(question.is_correct(question.correct));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuestionBank {
    concepts: Vec<Concept>,
}

impl QuestionBank {
    /// Validate a concept pool and build the bank.
    ///
    /// Fails with `InsufficientConcepts` when fewer than four concepts
    /// with distinct terms are available.
    pub fn new(concepts: Vec<Concept>) -> Result<Self, BattleError> {
        let distinct: FxHashSet<&str> = concepts.iter().map(|c| c.term.as_str()).collect();
        if distinct.len() < MIN_CONCEPTS {
            return Err(BattleError::InsufficientConcepts {
                found: distinct.len(),
                required: MIN_CONCEPTS,
            });
        }
        Ok(Self { concepts })
    }

    /// Number of concepts in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// Whether the pool is empty. Never true for a constructed bank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Generate the next question.
    ///
    /// Picks the answer concept uniformly, then three distinct distractor
    /// terms from the remaining pool; the correct option lands in a
    /// uniformly random slot. No option text repeats within a question.
    pub fn next(&self, rng: &mut BattleRng) -> Question {
        let answer = &self.concepts[rng.gen_range_usize(0..self.concepts.len())];

        // Distractor candidates: every distinct term other than the answer's.
        let mut seen = FxHashSet::default();
        seen.insert(answer.term.as_str());
        let mut pool: Vec<&str> = Vec::with_capacity(self.concepts.len());
        for concept in &self.concepts {
            if seen.insert(concept.term.as_str()) {
                pool.push(concept.term.as_str());
            }
        }
        rng.shuffle(&mut pool);

        // Construction guarantees pool.len() >= OPTION_COUNT - 1.
        let correct = rng.gen_range_usize(0..OPTION_COUNT);
        let mut distractors = pool.iter().take(OPTION_COUNT - 1);
        let mut options: [String; OPTION_COUNT] = Default::default();
        for (slot, option) in options.iter_mut().enumerate() {
            if slot == correct {
                *option = answer.term.clone();
            } else if let Some(term) = distractors.next() {
                *option = (*term).to_string();
            }
        }

        Question {
            concept: answer.id,
            prompt: answer.definition.clone(),
            options,
            correct,
        }
    }
}
