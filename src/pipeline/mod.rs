//! Host pipeline surface
//!
//! Everything the embedding pipeline touches at initialization time:
//! - `config`: expansion parameters with synchronous validation
//! - `factory`: builds synonym filter stages, or pass-through stages when no
//!   model is configured
//! - `registry`: shares one immutable provider per model across pipeline
//!   instances

mod config;
mod factory;
mod registry;

pub use config::{ExpansionConfig, DEFAULT_MAX_RESULTS, DEFAULT_MIN_SIMILARITY};
pub use factory::{SynonymFilterFactory, SynonymStage};
pub use registry::ProviderRegistry;
