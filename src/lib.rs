//! Synonym Graph
//!
//! Word-embedding synonym expansion for token-analysis pipelines. A
//! word2vec model shipped inside a zip container is validated and indexed
//! once at initialization; afterwards each input token is expanded into a
//! token lattice carrying the original token plus weighted synonym branches
//! at the same position, ready for a downstream indexing or search stage.
//!
//! # Features
//!
//! - **Container ingestion**: dl4j-style zip models with `B64:`-encoded terms
//! - **Fail-fast validation**: dimension and record-count corruption abort
//!   loading before any query runs
//! - **Nearest-neighbor lookup**: graph-based search over unit-normalized
//!   vectors, shareable read-only across threads
//! - **Lattice emission**: pull-based filter producing zero-increment
//!   weighted `SYNONYM` branches
//! - **Degraded mode**: a factory without a model yields pass-through stages
//!
//! # Modules
//!
//! - `types`: core data structures (records, candidates, token contract)
//! - `error`: crate-wide error type and `Result` alias
//! - `model`: container parsing and the validated vector table
//! - `search`: the nearest-neighbor synonym provider
//! - `filter`: the token-lattice expansion filter
//! - `pipeline`: configuration, stage factory, and provider registry
//!
//! # Example
//!
//! ```no_run
//! use std::fs::File;
//! use synonym_graph::{ExpansionConfig, SynonymFilterFactory, TokenStream, WhitespaceTokenStream};
//!
//! fn main() -> synonym_graph::Result<()> {
//!     let model = File::open("word2vec-model.zip")?;
//!     let factory =
//!         SynonymFilterFactory::from_model("word2vec-model.zip", model, ExpansionConfig::default())?;
//!
//!     let mut stage = factory.attach(WhitespaceTokenStream::new("main memory"));
//!     while let Some(token) = stage.next_token()? {
//!         println!("{} +{} {:.3}", token.text, token.position_increment, token.weight);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod filter;
pub mod model;
pub mod pipeline;
pub mod search;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{Error, Result};
pub use filter::{SynonymTokenFilter, WhitespaceTokenStream};
pub use model::{decode_term, read_model, ModelStream, VectorTable, MODEL_ENTRY_PREFIX};
pub use pipeline::{
    ExpansionConfig, ProviderRegistry, SynonymFilterFactory, SynonymStage, DEFAULT_MAX_RESULTS,
    DEFAULT_MIN_SIMILARITY,
};
pub use search::SynonymProvider;
pub use types::{SynonymCandidate, TermVector, Token, TokenStream, SYNONYM_TYPE, WORD_TYPE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
