//! Study concepts - the raw material questions are built from.
//!
//! A `Concept` pairs a term with its definition ("mitosis" / "cell
//! division producing two identical nuclei"). Concepts are supplied by the
//! hosting app through `ConceptProvider` and never change during a battle.

use serde::{Deserialize, Serialize};

/// Unique identifier for a concept.
///
/// Identity lives here: two concepts with the same id are the same
/// concept, whatever their text says.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConceptId(pub u32);

impl ConceptId {
    /// Create a new concept ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ConceptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Concept({})", self.0)
    }
}

/// An immutable term/definition pair.
///
/// ## Example
///
/// ```
/// use quiz_clash::questions::{Concept, ConceptId};
///
/// let concept = Concept::new(ConceptId::new(1), "osmosis", "diffusion of water across a membrane");
/// assert_eq!(concept.term, "osmosis");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    /// Unique identifier.
    pub id: ConceptId,

    /// The term shown as an answer option.
    pub term: String,

    /// The definition shown as the question prompt.
    pub definition: String,
}

impl Concept {
    /// Create a new concept.
    #[must_use]
    pub fn new(id: ConceptId, term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            id,
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Source of reviewed concepts, implemented by the hosting app.
///
/// The engine never queries storage itself; the driver fetches the
/// reviewed concepts for a user's notebook and hands them over at battle
/// construction. At least four concepts with distinct terms are required.
pub trait ConceptProvider {
    /// Concepts the user has already reviewed in the given notebook.
    fn reviewed_concepts(&self, user_id: &str, notebook_id: &str) -> Vec<Concept>;
}
