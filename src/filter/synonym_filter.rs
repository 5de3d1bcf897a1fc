//! Applies single-token synonyms from a word-embedding model to a token
//! stream

use std::collections::VecDeque;
use std::sync::Arc;

use crate::error::Result;
use crate::search::SynonymProvider;
use crate::types::{SynonymCandidate, Token, TokenStream, SYNONYM_TYPE};

/// Buffering state of the filter
enum BufferState {
    /// No pending branches; the next pull goes upstream
    Empty,
    /// Emitting buffered branches for the captured token
    ///
    /// Invariant: `queue` is non-empty on entry to this state.
    Draining {
        base: Token,
        queue: VecDeque<SynonymCandidate>,
    },
}

/// Token filter expanding each input token into a lattice of alternatives.
///
/// For an input token with k accepted synonyms the filter emits k + 1
/// tokens: the original, unmodified token first, then one branch per
/// synonym carrying the synonym text, the similarity as its weight, the
/// `SYNONYM` kind, position increment 0 (same lattice position as the
/// spawning token), and position length 1.
///
/// The filter holds per-pass mutable state and serves exactly one
/// sequential consumer; create one instance per pipeline.
pub struct SynonymTokenFilter<S> {
    source: S,
    provider: Arc<SynonymProvider>,
    max_results: usize,
    min_similarity: f32,
    state: BufferState,
}

impl<S: TokenStream> SynonymTokenFilter<S> {
    /// Apply a previously built provider to incoming tokens.
    pub fn new(
        source: S,
        provider: Arc<SynonymProvider>,
        max_results: usize,
        min_similarity: f32,
    ) -> Self {
        Self {
            source,
            provider,
            max_results,
            min_similarity,
            state: BufferState::Empty,
        }
    }

    /// Pop the next buffered branch, restoring the captured token state and
    /// overriding text, weight, kind, and graph position attributes.
    fn next_branch(&mut self) -> Option<Token> {
        if let BufferState::Draining { base, queue } = &mut self.state {
            if let Some(candidate) = queue.pop_front() {
                let mut branch = base.clone();
                branch.text = candidate.term;
                branch.weight = candidate.similarity;
                branch.kind = SYNONYM_TYPE.to_string();
                branch.position_increment = 0;
                branch.position_length = 1;

                let drained = queue.is_empty();
                if drained {
                    self.state = BufferState::Empty;
                }
                return Some(branch);
            }
            self.state = BufferState::Empty;
        }
        None
    }
}

impl<S: TokenStream> TokenStream for SynonymTokenFilter<S> {
    fn next_token(&mut self) -> Result<Option<Token>> {
        if let Some(branch) = self.next_branch() {
            return Ok(Some(branch));
        }

        let Some(token) = self.source.next_token()? else {
            return Ok(None);
        };

        let candidates =
            self.provider
                .lookup(&token.text, self.max_results, self.min_similarity)?;
        if !candidates.is_empty() {
            // Capture the token state now; the branches restore it on later
            // pulls while the original token goes out first.
            self.state = BufferState::Draining {
                base: token.clone(),
                queue: candidates.into(),
            };
        }
        Ok(Some(token))
    }

    fn reset(&mut self) -> Result<()> {
        self.state = BufferState::Empty;
        self.source.reset()
    }
}
