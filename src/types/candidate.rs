//! Synonym candidates proposed by a lookup

/// A proposed synonym together with its similarity to the queried term
///
/// Produced transiently per query; similarity is the dot product of the two
/// unit vectors, in [-1, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct SynonymCandidate {
    pub term: String,
    pub similarity: f32,
}

impl SynonymCandidate {
    /// Create a new candidate
    pub fn new(term: impl Into<String>, similarity: f32) -> Self {
        Self {
            term: term.into(),
            similarity,
        }
    }
}
