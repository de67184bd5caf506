//! A view selecting instances of a base view by index.

use crate::dataset::view::DatasetView;
use crate::document::TextInstance;
use crate::error::{Result, TextBayesError};

/// A view over the instances of `base` at the listed indices, in list order.
///
/// Indices may repeat or appear in any order. They are checked against the
/// base length when the view is built.
#[derive(Clone)]
pub struct IndexedView<'a> {
    base: &'a dyn DatasetView,
    indices: Vec<usize>,
}

impl<'a> IndexedView<'a> {
    /// Decorate `base` with an index list.
    ///
    /// Fails with `IndexOutOfRange` if any index is not within `[0, base.len())`.
    pub fn new(base: &'a dyn DatasetView, indices: Vec<usize>) -> Result<Self> {
        let len = base.len();
        if let Some(&index) = indices.iter().find(|&&index| index >= len) {
            return Err(TextBayesError::index_out_of_range(index, len));
        }
        Ok(Self { base, indices })
    }

    /// Build a view from indices already known to be within range.
    pub(crate) fn from_valid_indices(base: &'a dyn DatasetView, indices: Vec<usize>) -> Self {
        debug_assert!(indices.iter().all(|&index| index < base.len()));
        Self { base, indices }
    }

    /// A view over every instance of `base`.
    pub fn all(base: &'a dyn DatasetView) -> Self {
        Self {
            indices: (0..base.len()).collect(),
            base,
        }
    }

    /// Indices into the base view.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The view this one selects from.
    pub fn base(&self) -> &'a dyn DatasetView {
        self.base
    }
}

impl DatasetView for IndexedView<'_> {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn len(&self) -> usize {
        self.indices.len()
    }

    fn get(&self, index: usize) -> Option<&TextInstance> {
        self.indices
            .get(index)
            .and_then(|&base_index| self.base.get(base_index))
    }
}

impl std::fmt::Debug for IndexedView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexedView")
            .field("base", &self.base.name())
            .field("indices", &self.indices)
            .finish()
    }
}
