//! # textbayes
//!
//! Multinomial Naive Bayes text classification over composable dataset views.
//!
//! ## Features
//!
//! - Labeled text corpora parsed through a configurable word filter pipeline
//! - Zero-copy dataset views: index subsets, predicate subsets and random splits
//! - Add-one smoothed Naive Bayes over the most frequent training words
//! - Optional rayon parallelism with results identical to sequential runs

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod document;
pub mod error;
pub mod ml;
pub mod util;

pub mod prelude {
    pub use crate::analysis::{Analyzer, AnalyzerConfig};
    pub use crate::dataset::{DatasetSplit, DatasetView, IndexedView, PredicateView, TextDataset};
    pub use crate::document::TextInstance;
    pub use crate::error::{Result, TextBayesError};
    pub use crate::ml::{BayesConfig, BayesTextClassifier, TextClassifier};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
