//! Data types for synonym expansion
//!
//! This module contains the core data structures shared across the crate:
//! model records, query candidates, and the minimal token contract exposed
//! to the host analysis pipeline.

mod candidate;
mod term_vector;
mod token;

pub use candidate::SynonymCandidate;
pub use term_vector::TermVector;
pub use token::{Token, TokenStream, SYNONYM_TYPE, WORD_TYPE};
