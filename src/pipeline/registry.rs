//! Shared provider registry
//!
//! Building the nearest-neighbor graph dominates model loading, so pipeline
//! instances running on many threads share one immutable provider per model
//! instead of rebuilding it.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::Result;
use crate::search::SynonymProvider;

/// Process-wide cache of built synonym providers, keyed by model name
#[derive(Default)]
pub struct ProviderRegistry {
    providers: RwLock<HashMap<String, Arc<SynonymProvider>>>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the provider for `model`, building it on first use.
    ///
    /// The load closure runs under the registry write lock, so each model is
    /// built at most once; a failed load leaves no entry behind and the next
    /// call retries.
    pub fn get_or_load<F>(&self, model: &str, load: F) -> Result<Arc<SynonymProvider>>
    where
        F: FnOnce() -> Result<SynonymProvider>,
    {
        if let Some(provider) = self.providers.read().get(model) {
            return Ok(Arc::clone(provider));
        }

        let mut providers = self.providers.write();
        // Re-check: another thread may have loaded it while we waited
        if let Some(provider) = providers.get(model) {
            return Ok(Arc::clone(provider));
        }

        debug!(model, "building synonym provider");
        let provider = Arc::new(load()?);
        providers.insert(model.to_string(), Arc::clone(&provider));
        Ok(provider)
    }

    /// Whether a provider for `model` is already cached
    pub fn contains(&self, model: &str) -> bool {
        self.providers.read().contains_key(model)
    }

    /// Number of cached providers
    pub fn len(&self) -> usize {
        self.providers.read().len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.providers.read().is_empty()
    }
}
