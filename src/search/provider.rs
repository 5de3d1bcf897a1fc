//! Synonym lookup service over a nearest-neighbor graph
//!
//! Vectors are unit-normalized at load time, so the dot product used here is
//! numerically identical to cosine similarity while being cheaper to
//! evaluate inside the graph search.

use std::time::Instant;

use hnsw_rs::prelude::*;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::VectorTable;
use crate::types::SynonymCandidate;

/// Maximum connections per graph node
const MAX_NB_CONNECTION: usize = 16;
/// Candidate-list width while building the graph
const EF_CONSTRUCTION: usize = 200;
/// Floor for the candidate-list width while searching
const EF_SEARCH: usize = 64;
/// Layer cap supported by the graph
const MAX_LAYER: usize = 16;

/// Answers repeated synonym queries over an immutable vector table.
///
/// Construction builds the nearest-neighbor graph, the most expensive step
/// of model loading, run exactly once per model. Afterwards the provider is
/// immutable; `lookup` performs no shared-state mutation and may be called
/// concurrently from any number of threads, typically through an `Arc`.
pub struct SynonymProvider {
    table: VectorTable,
    graph: Hnsw<'static, f32, DistDot>,
}

impl std::fmt::Debug for SynonymProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynonymProvider")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

impl SynonymProvider {
    /// Build the nearest-neighbor graph over a loaded vector table.
    pub fn new(table: VectorTable) -> Result<Self> {
        if table.is_empty() {
            return Err(Error::EmptyModel);
        }

        let started = Instant::now();
        let graph = Hnsw::<f32, DistDot>::new(
            MAX_NB_CONNECTION,
            table.len(),
            MAX_LAYER,
            EF_CONSTRUCTION,
            DistDot {},
        );
        for (ordinal, entry) in table.entries() {
            graph.insert_slice((entry.vector.as_slice(), ordinal));
        }
        info!(
            terms = table.len(),
            dimension = table.dimension(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "synonym index built"
        );

        Ok(Self { table, graph })
    }

    /// The vector table this provider was built over
    pub fn table(&self) -> &VectorTable {
        &self.table
    }

    /// Find up to `max_results` synonyms of `term` with similarity of at
    /// least `min_similarity`.
    ///
    /// The query term itself is never part of its own result set. A term
    /// absent from the vocabulary yields an empty list, not an error. The
    /// surviving candidates are sorted by strictly descending similarity;
    /// the relative order of exact ties is unspecified.
    pub fn lookup(
        &self,
        term: &str,
        max_results: usize,
        min_similarity: f32,
    ) -> Result<Vec<SynonymCandidate>> {
        if max_results == 0 {
            return Err(Error::InvalidArgument {
                reason: format!("maxResults must be a positive integer, found: {max_results}"),
            });
        }
        if !(min_similarity > 0.0 && min_similarity <= 1.0) {
            return Err(Error::InvalidArgument {
                reason: format!(
                    "minSimilarity must be in the range (0, 1], found: {min_similarity}"
                ),
            });
        }

        let Some(query) = self.table.vector_of(term) else {
            debug!(term, "term not in vocabulary");
            return Ok(Vec::new());
        };

        let neighbours = self
            .graph
            .search(query, max_results, EF_SEARCH.max(max_results));

        let mut candidates: Vec<SynonymCandidate> = neighbours
            .into_iter()
            .filter_map(|neighbour| {
                let synonym = self.table.term(neighbour.d_id)?;
                // DistDot reports 1 - dot over unit vectors
                let similarity = 1.0 - neighbour.distance;
                (synonym != term && similarity >= min_similarity)
                    .then(|| SynonymCandidate::new(synonym, similarity))
            })
            .collect();

        candidates.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        Ok(candidates)
    }
}
