//! Word2vec model ingestion and the vector table
//!
//! A model arrives inside a zip container holding a single text entry whose
//! name starts with `syn0`. This module parses and validates that entry:
//! - `reader`: container parsing, header decoding, `B64:` term decoding
//! - `stream`: the lazy, single-pass record sequence plus header values
//! - `table`: the materialized, normalized, ordinal-indexed vector table

mod reader;
mod stream;
mod table;

pub use reader::{decode_term, read_model, MODEL_ENTRY_PREFIX};
pub use stream::ModelStream;
pub use table::VectorTable;
