//! The dataset view trait and its iterator.

use std::iter::FusedIterator;

use rand::RngCore;

use crate::dataset::predicate::PredicateView;
use crate::dataset::split::DatasetSplit;
use crate::document::TextInstance;
use crate::error::{Result, TextBayesError};

/// Conversion of any view into a trait object.
///
/// Implemented for every sized [`DatasetView`]; lets the provided methods
/// of [`DatasetView`] wrap `self` in further views.
pub trait AsDatasetView {
    fn as_view(&self) -> &dyn DatasetView;
}

impl<T: DatasetView> AsDatasetView for T {
    fn as_view(&self) -> &dyn DatasetView {
        self
    }
}

/// A read-only sequence of text instances.
///
/// The length of a view never changes while the view exists, and reading
/// from a view never modifies the instances it exposes.
pub trait DatasetView: AsDatasetView + Send + Sync {
    /// A human-readable name, inherited by derived views.
    fn name(&self) -> &str;

    /// Number of instances in the view.
    fn len(&self) -> usize;

    /// The instance at `index`, or `None` when `index >= len()`.
    fn get(&self, index: usize) -> Option<&TextInstance>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The instance at `index`; fails with `IndexOutOfRange` when `index >= len()`.
    fn at(&self, index: usize) -> Result<&TextInstance> {
        self.get(index)
            .ok_or_else(|| TextBayesError::index_out_of_range(index, self.len()))
    }

    /// Iterate over the instances in index order.
    fn instances(&self) -> Instances<'_> {
        Instances::new(self.as_view())
    }

    /// Total number of words over all instances, counting repetitions.
    fn num_words(&self) -> usize {
        self.instances().map(TextInstance::num_words).sum()
    }

    /// View over the instances satisfying `predicate`.
    fn filter(&self, predicate: &dyn Fn(&TextInstance) -> bool) -> PredicateView<'_> {
        PredicateView::new(self.as_view(), predicate)
    }

    /// View over the instances labeled `label`.
    fn select_label(&self, label: &str) -> PredicateView<'_> {
        PredicateView::select_label(self.as_view(), label)
    }

    /// Randomly split this view into a training and a test view.
    ///
    /// Indices are relative to this view, so splitting a derived view adds
    /// one more layer of indirection instead of reaching for the base data.
    fn random_split(&self, ratio: f64) -> Result<DatasetSplit<'_>> {
        DatasetSplit::random(self.as_view(), ratio, &mut rand::rng())
    }

    /// [`DatasetView::random_split`] with a caller-provided generator.
    fn random_split_with(&self, ratio: f64, rng: &mut dyn RngCore) -> Result<DatasetSplit<'_>> {
        DatasetSplit::random(self.as_view(), ratio, rng)
    }
}

/// Iterator over the instances of a view, in index order.
///
/// Obtained from [`DatasetView::instances`]; calling that again restarts
/// the traversal.
#[derive(Clone)]
pub struct Instances<'a> {
    view: &'a dyn DatasetView,
    next: usize,
    len: usize,
}

impl<'a> Instances<'a> {
    pub fn new(view: &'a dyn DatasetView) -> Self {
        Instances {
            view,
            next: 0,
            len: view.len(),
        }
    }
}

impl<'a> Iterator for Instances<'a> {
    type Item = &'a TextInstance;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let instance = self.view.get(self.next);
        self.next += 1;
        instance
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Instances<'_> {}

impl FusedIterator for Instances<'_> {}
