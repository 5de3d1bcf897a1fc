//! Token-lattice synonym expansion
//!
//! This module turns a single-token stream into a multi-path token lattice:
//! - `synonym_filter`: the two-state pull machine emitting weighted branches
//! - `tokenizer`: a minimal whitespace token source for tests and examples

mod synonym_filter;
mod tokenizer;

pub use synonym_filter::SynonymTokenFilter;
pub use tokenizer::WhitespaceTokenStream;
