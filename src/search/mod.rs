//! Nearest-neighbor synonym lookup
//!
//! This module answers "which vocabulary terms are closest to this one"
//! through:
//! - A graph-based nearest-neighbor index built once per model load
//! - Similarity thresholding and self-exclusion per query

mod provider;

pub use provider::SynonymProvider;
