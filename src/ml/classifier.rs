//! Text classifier trait definition.

use crate::dataset::{DatasetView, TextDataset};
use crate::document::TextInstance;
use crate::error::Result;

/// Text classifier trait.
///
/// Implementations learn from a labeled dataset view and predict a label
/// for unseen instances.
pub trait TextClassifier: Send + Sync {
    /// Learn from `examples`, replacing anything learned before.
    fn train(&mut self, examples: &dyn DatasetView) -> Result<()>;

    /// Predict the label of a single instance.
    fn predict(&self, instance: &TextInstance) -> Result<String>;

    /// Predict every instance of `view`, in order, as a new dataset whose
    /// instances carry the predicted labels.
    fn predict_all(&self, view: &dyn DatasetView) -> Result<TextDataset> {
        let mut predicted = TextDataset::with_name(view.name());
        for instance in view.instances() {
            predicted.push(instance.relabeled(self.predict(instance)?));
        }
        Ok(predicted)
    }

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
