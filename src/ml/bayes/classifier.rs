//! The Bayes text classifier and its train/classify life cycle.

use log::{debug, info};
use rayon::prelude::*;

use crate::dataset::{DatasetView, TextDataset};
use crate::document::TextInstance;
use crate::error::{Result, TextBayesError};
use crate::ml::bayes::config::BayesConfig;
use crate::ml::bayes::model::TrainedModel;
use crate::ml::bayes::vocabulary::Vocabulary;
use crate::ml::classifier::TextClassifier;

/// A multinomial Naive Bayes classifier for text instances.
///
/// The classifier starts untrained. [`BayesTextClassifier::train`] builds a
/// complete [`TrainedModel`] and swaps it in only once estimation has
/// succeeded; a failed training call leaves the previous model in place.
#[derive(Debug, Clone)]
pub struct BayesTextClassifier {
    config: BayesConfig,
    model: Option<TrainedModel>,
}

impl BayesTextClassifier {
    /// Create an untrained classifier.
    pub fn new(config: BayesConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            model: None,
        })
    }

    /// Create an untrained classifier using the `vocabulary_size` most frequent words.
    pub fn with_vocabulary_size(vocabulary_size: usize) -> Result<Self> {
        Self::new(BayesConfig::with_vocabulary_size(vocabulary_size))
    }

    pub fn config(&self) -> &BayesConfig {
        &self.config
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    /// The trained model, if any.
    pub fn model(&self) -> Option<&TrainedModel> {
        self.model.as_ref()
    }

    /// Train on `examples`, replacing any previous model.
    ///
    /// Fails with `InsufficientVocabulary` if `examples` has fewer distinct
    /// words than the configured vocabulary size, and with `InvalidArgument`
    /// if an example has no label.
    pub fn train(&mut self, examples: &dyn DatasetView) -> Result<()> {
        debug!(
            "training on {} ({} instances, vocabulary size {})",
            examples.name(),
            examples.len(),
            self.config.vocabulary_size
        );

        let vocabulary = Vocabulary::build(examples, self.config.vocabulary_size)?;
        let model = TrainedModel::estimate(examples, vocabulary, self.config.parallel)?;

        info!(
            "trained on {} instances: {} labels {:?}, vocabulary of {} words",
            examples.len(),
            model.target_values().len(),
            model.target_values(),
            model.vocabulary().len()
        );
        self.model = Some(model);
        Ok(())
    }

    /// Predict the label of `instance`.
    pub fn classify(&self, instance: &TextInstance) -> Result<String> {
        Ok(self.trained()?.predict(instance).to_string())
    }

    /// Classify every instance of `view`.
    ///
    /// The result holds one instance per input instance, in input order, with
    /// the same words and the predicted label in place of the original one.
    pub fn classify_all(&self, view: &dyn DatasetView) -> Result<TextDataset> {
        let model = self.trained()?;
        let relabel = |instance: &TextInstance| instance.relabeled(model.predict(instance));

        let instances: Vec<TextInstance> = if self.config.parallel {
            (0..view.len())
                .into_par_iter()
                .map(|index| view.at(index).map(relabel))
                .collect::<Result<_>>()?
        } else {
            view.instances().map(relabel).collect()
        };

        debug!("classified {} instances of {}", instances.len(), view.name());
        Ok(TextDataset::from_instances(view.name(), instances))
    }

    /// Fraction of the instances of `view` whose predicted label equals their label.
    ///
    /// Fails with `EmptyDataset` when `view` has no instances.
    pub fn evaluate(&self, view: &dyn DatasetView) -> Result<f64> {
        let correct = self.count_correct(view)?;
        if view.is_empty() {
            return Err(TextBayesError::empty_dataset(format!(
                "cannot compute accuracy on {}: it has no instances",
                view.name()
            )));
        }
        Ok(correct as f64 / view.len() as f64)
    }

    /// Number of instances of `view` classified correctly.
    pub fn count_correct(&self, view: &dyn DatasetView) -> Result<usize> {
        let model = self.trained()?;
        let is_correct =
            |instance: &TextInstance| instance.label() == Some(model.predict(instance));

        let correct = if self.config.parallel {
            (0..view.len())
                .into_par_iter()
                .filter_map(|index| view.get(index))
                .filter(|instance| is_correct(instance))
                .count()
        } else {
            view.instances().filter(|instance| is_correct(instance)).count()
        };
        Ok(correct)
    }

    /// Log posterior score of every label for `instance`, in label order.
    pub fn log_posteriors(&self, instance: &TextInstance) -> Result<Vec<(String, f64)>> {
        let model = self.trained()?;
        Ok(model
            .target_values()
            .iter()
            .cloned()
            .zip(model.log_posteriors(instance))
            .collect())
    }

    /// The vocabulary `(word, count)` list of the current model.
    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        self.model.as_ref().map(TrainedModel::vocabulary)
    }

    /// The labels of the current model, in tie-breaking order.
    pub fn target_values(&self) -> Option<&[String]> {
        self.model.as_ref().map(TrainedModel::target_values)
    }

    /// `P(label)` under the current model.
    pub fn class_probability(&self, label: &str) -> Option<f64> {
        self.model.as_ref()?.class_probability(label)
    }

    /// `P(word|label)` under the current model.
    pub fn word_probability(&self, label: &str, word: &str) -> Option<f64> {
        self.model.as_ref()?.word_probability(label, word)
    }

    fn trained(&self) -> Result<&TrainedModel> {
        self.model.as_ref().ok_or(TextBayesError::NotTrained)
    }
}

impl TextClassifier for BayesTextClassifier {
    fn train(&mut self, examples: &dyn DatasetView) -> Result<()> {
        BayesTextClassifier::train(self, examples)
    }

    fn predict(&self, instance: &TextInstance) -> Result<String> {
        self.classify(instance)
    }

    fn predict_all(&self, view: &dyn DatasetView) -> Result<TextDataset> {
        self.classify_all(view)
    }

    fn name(&self) -> &str {
        "bayes"
    }
}
