//! Configuration file for the textbayes command line tool.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::AnalyzerConfig;
use crate::error::Result;
use crate::ml::bayes::BayesConfig;

/// Classifier and analyzer settings, as read from a JSON document such as
/// `{"classifier": {"vocabulary_size": 2000}, "analyzer": {"lowercase": true}}`.
///
/// Missing sections and keys take their default values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextBayesConfig {
    /// Classifier configuration.
    pub classifier: BayesConfig,
    /// Corpus analysis configuration.
    pub analyzer: AnalyzerConfig,
}

impl TextBayesConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading configuration from {}", path.display());
        let reader = BufReader::new(File::open(path)?);
        let config: TextBayesConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: TextBayesConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.classifier.validate()
    }
}
