//! Multinomial Naive Bayes text classification.
//!
//! Training builds a vocabulary of the `K` most frequent training words and
//! estimates, for every label `v` and vocabulary word `w`:
//!
//! ```text
//! P(v)   = |examples labeled v| / |examples|
//! P(w|v) = (n_w + 1) / (n + K)
//! ```
//!
//! where `n_w` counts the occurrences of `w` in the examples labeled `v` and
//! `n` counts all their words. A document is assigned the label maximizing
//! `ln P(v) + Σ ln P(w|v)` over the vocabulary words it contains.
//!
//! # Example
//!
//! ```
//! use textbayes::dataset::TextDataset;
//! use textbayes::document::TextInstance;
//! use textbayes::ml::bayes::{BayesConfig, BayesTextClassifier};
//!
//! let dataset = TextDataset::from_instances(
//!     "pets",
//!     vec![
//!         TextInstance::from_words(Some("A"), ["cat", "cat", "dog"]),
//!         TextInstance::from_words(Some("B"), ["fish", "fish", "bird"]),
//!     ],
//! );
//!
//! let mut classifier = BayesTextClassifier::new(BayesConfig::with_vocabulary_size(4)).unwrap();
//! classifier.train(&dataset).unwrap();
//!
//! let label = classifier
//!     .classify(&TextInstance::from_words(None, ["cat"]))
//!     .unwrap();
//! assert_eq!(label, "A");
//! ```

mod classifier;
mod config;
mod model;
mod vocabulary;

pub use classifier::BayesTextClassifier;
pub use config::{BayesConfig, DEFAULT_VOCABULARY_SIZE};
pub use model::TrainedModel;
pub use vocabulary::Vocabulary;
