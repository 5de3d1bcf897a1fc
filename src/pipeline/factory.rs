//! Factory wiring model ingestion, index construction, and filter creation

use std::io::{Read, Seek};
use std::sync::Arc;

use tracing::info;

use crate::error::Result;
use crate::filter::SynonymTokenFilter;
use crate::model::{read_model, VectorTable};
use crate::pipeline::ExpansionConfig;
use crate::search::SynonymProvider;
use crate::types::{Token, TokenStream};

/// Builds synonym filter stages for pipeline instances.
///
/// Created once at pipeline initialization. Configuration and model-format
/// failures surface here, synchronously, before any token is processed.
/// Without a configured model the factory degrades to pass-through stages,
/// leaving the rest of the pipeline untouched.
#[derive(Debug)]
pub struct SynonymFilterFactory {
    provider: Option<Arc<SynonymProvider>>,
    config: ExpansionConfig,
}

impl SynonymFilterFactory {
    /// Load a model container and build the shared synonym index.
    pub fn from_model<R: Read + Seek>(
        container: &str,
        source: R,
        config: ExpansionConfig,
    ) -> Result<Self> {
        config.validate()?;
        let stream = read_model(container, source)?;
        let table = VectorTable::from_stream(stream)?;
        let provider = Arc::new(SynonymProvider::new(table)?);
        info!(container, "synonym expansion enabled");
        Ok(Self {
            provider: Some(provider),
            config,
        })
    }

    /// Reuse an already-built provider, e.g. one shared through a
    /// [`ProviderRegistry`](crate::pipeline::ProviderRegistry).
    pub fn with_provider(provider: Arc<SynonymProvider>, config: ExpansionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            provider: Some(provider),
            config,
        })
    }

    /// No model configured: every attached stage passes tokens through
    /// unchanged.
    pub fn pass_through(config: ExpansionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            provider: None,
            config,
        })
    }

    /// Whether attached stages will expand synonyms
    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Wrap a token source into the configured stage.
    pub fn attach<S: TokenStream>(&self, source: S) -> SynonymStage<S> {
        match &self.provider {
            Some(provider) => SynonymStage::Expanded(SynonymTokenFilter::new(
                source,
                Arc::clone(provider),
                self.config.max_results,
                self.config.min_similarity,
            )),
            None => SynonymStage::PassThrough(source),
        }
    }
}

/// A pipeline stage: either a synonym filter or the untouched source
pub enum SynonymStage<S> {
    Expanded(SynonymTokenFilter<S>),
    PassThrough(S),
}

impl<S: TokenStream> TokenStream for SynonymStage<S> {
    fn next_token(&mut self) -> Result<Option<Token>> {
        match self {
            SynonymStage::Expanded(filter) => filter.next_token(),
            SynonymStage::PassThrough(source) => source.next_token(),
        }
    }

    fn reset(&mut self) -> Result<()> {
        match self {
            SynonymStage::Expanded(filter) => filter.reset(),
            SynonymStage::PassThrough(source) => source.reset(),
        }
    }
}
