//! Configuration for the Bayes text classifier.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextBayesError};

/// Vocabulary size used when none is given.
pub const DEFAULT_VOCABULARY_SIZE: usize = 5000;

/// Configuration for [`super::BayesTextClassifier`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BayesConfig {
    /// Number of most frequent training words used as features. Must be > 0.
    pub vocabulary_size: usize,
    /// Estimate labels and classify batches on the rayon thread pool.
    /// Results are identical to sequential runs, including their order.
    pub parallel: bool,
}

impl Default for BayesConfig {
    fn default() -> Self {
        Self {
            vocabulary_size: DEFAULT_VOCABULARY_SIZE,
            parallel: false,
        }
    }
}

impl BayesConfig {
    /// Default configuration with the given vocabulary size.
    pub fn with_vocabulary_size(vocabulary_size: usize) -> Self {
        Self {
            vocabulary_size,
            ..Self::default()
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.vocabulary_size == 0 {
            return Err(TextBayesError::invalid_argument(
                "vocabulary_size must be greater than 0",
            ));
        }
        Ok(())
    }
}
