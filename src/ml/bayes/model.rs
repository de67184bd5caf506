//! Parameters estimated by training.

use std::collections::BTreeSet;

use log::{debug, warn};
use rayon::prelude::*;

use crate::dataset::{DatasetView, PredicateView};
use crate::document::TextInstance;
use crate::error::{Result, TextBayesError};
use crate::ml::bayes::vocabulary::Vocabulary;

/// Estimates for one label.
#[derive(Debug, Clone)]
struct LabelEstimate {
    class_probability: f64,
    /// `P(w|v)` for every vocabulary word, in vocabulary order.
    word_probabilities: Vec<f64>,
}

/// Everything a trained classifier knows. Immutable once built.
///
/// Labels are kept in ascending order; the order decides ties between
/// equal posterior scores (the earlier label wins).
#[derive(Debug, Clone)]
pub struct TrainedModel {
    vocabulary: Vocabulary,
    target_values: Vec<String>,
    class_probabilities: Vec<f64>,
    word_probabilities: Vec<Vec<f64>>,
    log_class_probabilities: Vec<f64>,
    log_word_probabilities: Vec<Vec<f64>>,
}

impl TrainedModel {
    /// Estimate class priors and smoothed word probabilities from `examples`.
    ///
    /// `vocabulary` must have been built from `examples`. Fails with
    /// `EmptyDataset` when `examples` has no instances.
    pub(crate) fn estimate(
        examples: &dyn DatasetView,
        vocabulary: Vocabulary,
        parallel: bool,
    ) -> Result<Self> {
        if examples.is_empty() {
            return Err(TextBayesError::empty_dataset(format!(
                "cannot train on {}: it has no instances",
                examples.name()
            )));
        }
        let target_values = extract_target_values(examples)?;

        let estimate = |label: &String| estimate_label(examples, &vocabulary, label);
        let estimates: Vec<LabelEstimate> = if parallel {
            target_values.par_iter().map(estimate).collect()
        } else {
            target_values.iter().map(estimate).collect()
        };

        let class_probabilities: Vec<f64> =
            estimates.iter().map(|e| e.class_probability).collect();
        let word_probabilities: Vec<Vec<f64>> = estimates
            .into_iter()
            .map(|e| e.word_probabilities)
            .collect();

        Ok(TrainedModel {
            log_class_probabilities: class_probabilities.iter().map(|p| p.ln()).collect(),
            log_word_probabilities: word_probabilities
                .iter()
                .map(|probs| probs.iter().map(|p| p.ln()).collect())
                .collect(),
            vocabulary,
            target_values,
            class_probabilities,
            word_probabilities,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The labels seen during training, in tie-breaking order.
    pub fn target_values(&self) -> &[String] {
        &self.target_values
    }

    /// `P(label)`, or `None` for a label not seen in training.
    pub fn class_probability(&self, label: &str) -> Option<f64> {
        self.label_index(label)
            .map(|index| self.class_probabilities[index])
    }

    /// `P(word|label)`, or `None` if the label or the word is unknown.
    pub fn word_probability(&self, label: &str, word: &str) -> Option<f64> {
        let index = self.label_index(label)?;
        let position = self.vocabulary.position(word)?;
        Some(self.word_probabilities[index][position])
    }

    /// `(label, P(label))` pairs in label order.
    pub fn class_probabilities(&self) -> impl Iterator<Item = (&str, f64)> {
        self.target_values
            .iter()
            .map(String::as_str)
            .zip(self.class_probabilities.iter().copied())
    }

    /// Log posterior score of every label for `instance`, in label order.
    ///
    /// Each vocabulary word present in the instance contributes `ln P(w|v)`
    /// once, however often it occurs; absent words contribute nothing.
    pub fn log_posteriors(&self, instance: &TextInstance) -> Vec<f64> {
        let present = self.present_positions(instance);
        self.log_class_probabilities
            .iter()
            .zip(&self.log_word_probabilities)
            .map(|(log_prior, log_words)| {
                present
                    .iter()
                    .fold(*log_prior, |score, &position| score + log_words[position])
            })
            .collect()
    }

    /// The label with the highest posterior score; the first one on ties.
    pub fn predict(&self, instance: &TextInstance) -> &str {
        let mut best: Option<(usize, f64)> = None;
        for (index, score) in self.log_posteriors(instance).into_iter().enumerate() {
            if best.is_none_or(|(_, max)| score > max) {
                best = Some((index, score));
            }
        }
        // A trained model always has at least one label.
        best.map_or("", |(index, _)| self.target_values[index].as_str())
    }

    fn label_index(&self, label: &str) -> Option<usize> {
        self.target_values.iter().position(|value| value == label)
    }

    /// Vocabulary positions of the words in `instance`, ascending, without duplicates.
    fn present_positions(&self, instance: &TextInstance) -> Vec<usize> {
        let mut positions: Vec<usize> = instance
            .words()
            .iter()
            .filter_map(|word| self.vocabulary.position(word))
            .collect();
        positions.sort_unstable();
        positions.dedup();
        positions
    }
}

/// Distinct labels of `examples` in ascending order.
fn extract_target_values(examples: &dyn DatasetView) -> Result<Vec<String>> {
    let mut values = BTreeSet::new();
    for (index, instance) in examples.instances().enumerate() {
        match instance.label() {
            Some(label) => {
                values.insert(label);
            }
            None => {
                warn!("rejecting unlabeled training instance {index} of {}", examples.name());
                return Err(TextBayesError::invalid_argument(format!(
                    "training instance {index} of {} has no label",
                    examples.name()
                )));
            }
        }
    }
    Ok(values.into_iter().map(str::to_string).collect())
}

fn estimate_label(
    examples: &dyn DatasetView,
    vocabulary: &Vocabulary,
    label: &str,
) -> LabelEstimate {
    let value_examples = PredicateView::select_label(examples, label);

    let mut occurrences = vec![0usize; vocabulary.len()];
    let mut num_words = 0usize;
    for instance in value_examples.instances() {
        num_words += instance.num_words();
        for word in instance.words() {
            if let Some(position) = vocabulary.position(word) {
                occurrences[position] += 1;
            }
        }
    }

    let denominator = (num_words + vocabulary.len()) as f64;
    let word_probabilities = occurrences
        .iter()
        .map(|&n| (n + 1) as f64 / denominator)
        .collect();

    debug!(
        "label {label}: {} examples, {num_words} words",
        value_examples.len()
    );

    LabelEstimate {
        class_probability: value_examples.len() as f64 / examples.len() as f64,
        word_probabilities,
    }
}
