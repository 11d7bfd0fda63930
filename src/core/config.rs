use serde::{Deserialize, Serialize};

use super::error::{PatternError, Result};
use crate::EMBEDDING_DIMENSION;


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingStoreConfig {

    pub dimension: usize,


    pub verify_fingerprint: bool,


    pub reject_non_finite: bool,
}

impl EmbeddingStoreConfig {

    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            verify_fingerprint: true,
            reject_non_finite: true,
        }
    }

    #[must_use]
    pub fn with_fingerprint_check(mut self, enabled: bool) -> Self {
        self.verify_fingerprint = enabled;
        self
    }

    #[must_use]
    pub fn with_non_finite_check(mut self, enabled: bool) -> Self {
        self.reject_non_finite = enabled;
        self
    }

    /// Bytes occupied by one vector in the fixed-stride layout.
    pub fn stride_bytes(&self) -> usize {
        self.dimension * std::mem::size_of::<f32>()
    }

    pub fn validate(&self) -> Result<()> {
        if self.dimension == 0 {
            return Err(PatternError::Config(
                "embedding dimension must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EmbeddingStoreConfig {
    fn default() -> Self {
        Self::new(EMBEDDING_DIMENSION)
    }
}
