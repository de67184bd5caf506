//! A view selecting the instances of a base view that satisfy a predicate.

use crate::dataset::indexed::IndexedView;
use crate::dataset::view::DatasetView;
use crate::document::TextInstance;

/// An [`IndexedView`] whose index list is computed once, at construction,
/// from a predicate over the base view's instances.
///
/// The predicate is not kept; the view is immutable once built.
#[derive(Clone, Debug)]
pub struct PredicateView<'a> {
    inner: IndexedView<'a>,
}

impl<'a> PredicateView<'a> {
    /// Decorate `base` with a predicate, evaluated once per base instance.
    pub fn new<F>(base: &'a dyn DatasetView, predicate: F) -> Self
    where
        F: Fn(&TextInstance) -> bool,
    {
        let indices = base
            .instances()
            .enumerate()
            .filter(|(_, instance)| predicate(*instance))
            .map(|(index, _)| index)
            .collect();
        PredicateView {
            inner: IndexedView::from_valid_indices(base, indices),
        }
    }

    /// Select all instances of `base` labeled `label`.
    pub fn select_label(base: &'a dyn DatasetView, label: &str) -> Self {
        Self::new(base, |instance| instance.label() == Some(label))
    }

    /// Indices into the base view.
    pub fn indices(&self) -> &[usize] {
        self.inner.indices()
    }

    /// The view this one selects from.
    pub fn base(&self) -> &'a dyn DatasetView {
        self.inner.base()
    }
}

impl DatasetView for PredicateView<'_> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn get(&self, index: usize) -> Option<&TextInstance> {
        self.inner.get(index)
    }
}
