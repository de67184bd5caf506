//! Training/test splits of a view.

use log::debug;
use rand::Rng;

use crate::dataset::indexed::IndexedView;
use crate::dataset::view::DatasetView;
use crate::error::Result;
use crate::util::sampling;

/// A training and a test view over the same base view.
#[derive(Clone, Debug)]
pub struct DatasetSplit<'a> {
    pub training: IndexedView<'a>,
    pub test: IndexedView<'a>,
}

impl<'a> DatasetSplit<'a> {
    /// Randomly partition `base`: the training view receives
    /// `min(ceil(ratio * len), len)` instances, the test view the rest.
    pub fn random<R: Rng + ?Sized>(
        base: &'a dyn DatasetView,
        ratio: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let (training, test) = sampling::random_split(ratio, base.len(), rng)?.into_parts();
        debug!(
            "split {} ({} instances) into {} training / {} test",
            base.name(),
            base.len(),
            training.len(),
            test.len()
        );
        Ok(DatasetSplit {
            training: IndexedView::from_valid_indices(base, training),
            test: IndexedView::from_valid_indices(base, test),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::TextDataset;
    use crate::document::TextInstance;
    use crate::error::TextBayesError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dataset(n: usize) -> TextDataset {
        (0..n)
            .map(|i| {
                let label = if i % 2 == 0 { "E" } else { "O" };
                TextInstance::from_words(Some(label), vec![i.to_string()])
            })
            .collect()
    }

    fn words(view: &dyn DatasetView) -> Vec<String> {
        view.instances().map(|i| i.words()[0].clone()).collect()
    }

    #[test]
    fn test_split_partitions_view() {
        let dataset = dataset(9);
        let mut rng = StdRng::seed_from_u64(11);
        let split = dataset.random_split_with(2.0 / 3.0, &mut rng).unwrap();

        assert_eq!(split.training.len(), 6);
        assert_eq!(split.test.len(), 3);

        let mut all: Vec<String> = words(&split.training);
        all.extend(words(&split.test));
        all.sort();
        let mut expected: Vec<String> = (0..9).map(|i| i.to_string()).collect();
        expected.sort();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_split_of_filter_is_relative_to_filter() {
        let dataset = dataset(10);
        let even = dataset.select_label("E");
        let mut rng = StdRng::seed_from_u64(2);
        let split = even.random_split_with(0.6, &mut rng).unwrap();

        assert_eq!(split.training.len(), 3);
        assert_eq!(split.test.len(), 2);
        for instance in split.training.instances().chain(split.test.instances()) {
            assert_eq!(instance.label(), Some("E"));
        }
        assert!(split.training.indices().iter().all(|&i| i < even.len()));
    }

    #[test]
    fn test_split_of_split() {
        let dataset = dataset(8);
        let mut rng = StdRng::seed_from_u64(4);
        let outer = dataset.random_split_with(0.5, &mut rng).unwrap();
        let inner = outer.training.random_split_with(0.5, &mut rng).unwrap();

        assert_eq!(inner.training.len(), 2);
        assert_eq!(inner.test.len(), 2);
        for k in 0..inner.training.len() {
            let through_layers = inner.training.at(k).unwrap();
            let outer_index = inner.training.indices()[k];
            let base_index = outer.training.indices()[outer_index];
            assert!(std::ptr::eq(through_layers, dataset.at(base_index).unwrap()));
        }
    }

    #[test]
    fn test_invalid_ratio() {
        let dataset = dataset(3);
        assert!(matches!(
            dataset.random_split(1.2),
            Err(TextBayesError::InvalidArgument(_))
        ));
    }
}
