//! Text classification.
//!
//! - [`classifier::TextClassifier`]: common interface for classifiers trained on a dataset view
//! - [`bayes::BayesTextClassifier`]: multinomial Naive Bayes with add-one smoothing

pub mod bayes;
pub mod classifier;

pub use bayes::{BayesConfig, BayesTextClassifier};
pub use classifier::TextClassifier;
