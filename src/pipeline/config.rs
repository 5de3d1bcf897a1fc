//! Expansion parameters with synchronous validation

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default maximum number of synonym candidates per term
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Default minimum accepted similarity
pub const DEFAULT_MIN_SIMILARITY: f32 = 0.7;

/// Parameters of the synonym expansion stage
///
/// Unknown keys are rejected during deserialization; out-of-range values are
/// rejected by [`validate`](ExpansionConfig::validate). Both failure modes
/// surface at initialization, before any token is processed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpansionConfig {
    /// Maximum number of candidates returned per queried term
    #[serde(rename = "maxResults", default = "default_max_results")]
    pub max_results: usize,
    /// Minimum similarity a candidate must reach, in (0, 1]
    #[serde(rename = "minSimilarity", default = "default_min_similarity")]
    pub min_similarity: f32,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_min_similarity() -> f32 {
    DEFAULT_MIN_SIMILARITY
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            min_similarity: DEFAULT_MIN_SIMILARITY,
        }
    }
}

impl ExpansionConfig {
    /// Reject out-of-range parameters.
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(Error::InvalidConfig {
                reason: format!(
                    "maxResults must be a positive integer, found: {}",
                    self.max_results
                ),
            });
        }
        if !(self.min_similarity > 0.0 && self.min_similarity <= 1.0) {
            return Err(Error::InvalidConfig {
                reason: format!(
                    "minSimilarity must be in the range (0, 1], found: {}",
                    self.min_similarity
                ),
            });
        }
        Ok(())
    }
}
