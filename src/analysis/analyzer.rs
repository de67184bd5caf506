//! Analyzer that turns quoted corpus text into filtered words.
//!
//! The analyzer applies processing in this order:
//! 1. Tokenizer: splits text into raw words
//! 2. Word filters: applied sequentially in the order they were added
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use textbayes::analysis::Analyzer;
//! use textbayes::analysis::token_filter::lowercase::LowercaseFilter;
//! use textbayes::analysis::token_filter::stop::StopFilter;
//!
//! let analyzer = Analyzer::raw()
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["the", "and"])));
//!
//! let words = analyzer.analyze("Hello THE world AND test");
//! assert_eq!(words, vec!["hello", "world", "test"]);
//! ```

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::WordFilter;
use crate::analysis::token_filter::letters::LettersOnlyFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// Settings for the standard corpus analysis pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Strip every character that is not an ASCII letter.
    pub letters_only: bool,
    /// Lowercase words before stop word removal.
    pub lowercase: bool,
    /// Drop stop words.
    pub remove_stopwords: bool,
    /// Custom stop word list replacing the built-in English list.
    pub stop_words: Option<Vec<String>>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            letters_only: true,
            lowercase: false,
            remove_stopwords: true,
            stop_words: None,
        }
    }
}

/// A tokenizer followed by a chain of word filters.
#[derive(Clone, Debug)]
pub struct Analyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn WordFilter>>,
}

impl Analyzer {
    /// Create an analyzer with the given tokenizer and no filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Analyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Whitespace tokenization without any filtering.
    pub fn raw() -> Self {
        Self::new(Arc::new(WhitespaceTokenizer::new()))
    }

    /// Build the standard pipeline described by `config`.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        let mut analyzer = Self::raw();
        if config.letters_only {
            analyzer = analyzer.add_filter(Arc::new(LettersOnlyFilter::new()?));
        }
        if config.lowercase {
            analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
        }
        if config.remove_stopwords {
            let stop = match &config.stop_words {
                Some(words) => StopFilter::from_words(words.iter().cloned()),
                None => StopFilter::new(),
            };
            analyzer = analyzer.add_filter(Arc::new(stop));
        }
        debug!("analyzer pipeline: {}", analyzer.describe());
        Ok(analyzer)
    }

    /// Add a filter to the end of the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn WordFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Run a single raw word through the filters. Empty means dropped.
    pub fn filter_word(&self, word: &str) -> String {
        let mut current = word.to_string();
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            current = filter.apply(&current);
        }
        current
    }

    /// Tokenize `text` and filter every word, dropping the ones that end up empty.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(text)
            .iter()
            .map(|word| self.filter_word(word))
            .filter(|word| !word.is_empty())
            .collect()
    }

    /// Pipeline description, e.g. `whitespace > letters_only > stop`.
    pub fn describe(&self) -> String {
        std::iter::once(self.tokenizer.name())
            .chain(self.filters.iter().map(|f| f.name()))
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_analyzer() {
        let analyzer = Analyzer::raw();
        assert_eq!(analyzer.analyze("The cat's 2 toys"), vec!["The", "cat's", "2", "toys"]);
        assert_eq!(analyzer.describe(), "whitespace");
    }

    #[test]
    fn test_default_config_pipeline() {
        let analyzer = Analyzer::from_config(&AnalyzerConfig::default()).unwrap();
        assert_eq!(analyzer.analyze("the cat's 2 toys"), vec!["cats", "toys"]);
        assert_eq!(analyzer.describe(), "whitespace > letters_only > stop");
    }

    #[test]
    fn test_lowercase_before_stopwords() {
        let config = AnalyzerConfig {
            lowercase: true,
            ..AnalyzerConfig::default()
        };
        let analyzer = Analyzer::from_config(&config).unwrap();
        assert_eq!(analyzer.analyze("The Cat"), vec!["cat"]);
    }

    #[test]
    fn test_custom_stop_words() {
        let config = AnalyzerConfig {
            letters_only: false,
            stop_words: Some(vec!["cat".to_string()]),
            ..AnalyzerConfig::default()
        };
        let analyzer = Analyzer::from_config(&config).unwrap();
        assert_eq!(analyzer.analyze("the cat sat"), vec!["the", "sat"]);
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let config: AnalyzerConfig = serde_json::from_str(r#"{"lowercase": true}"#).unwrap();
        assert!(config.lowercase);
        assert!(config.letters_only);
        assert!(config.remove_stopwords);
        assert_eq!(config.stop_words, None);
    }
}
