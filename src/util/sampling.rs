//! Random sampling of instance indices.
//!
//! Every function that draws randomness takes the generator as an argument
//! so callers (and tests) can pass a seeded [`rand::rngs::StdRng`]. The
//! `*_with_thread_rng` conveniences use [`rand::rng`].
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use textbayes::util::sampling::random_split;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let split = random_split(0.7, 10, &mut rng).unwrap();
//!
//! assert_eq!(split.first().len(), 7);
//! assert_eq!(split.second().len(), 3);
//! ```

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{Result, TextBayesError};

/// Two disjoint index lists that together cover `[0, n)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    first: Vec<usize>,
    second: Vec<usize>,
}

impl Split {
    pub fn first(&self) -> &[usize] {
        &self.first
    }

    pub fn second(&self) -> &[usize] {
        &self.second
    }

    /// Take ownership of both index lists.
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>) {
        (self.first, self.second)
    }
}

/// The indices `[from, to)` in ascending order.
pub fn range(from: usize, to: usize) -> Vec<usize> {
    (from..to).collect()
}

/// A uniformly random permutation of `[0, n)`.
pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut indices = range(0, n);
    indices.shuffle(rng);
    indices
}

/// [`random_permutation`] drawing from the thread-local generator.
pub fn random_permutation_with_thread_rng(n: usize) -> Vec<usize> {
    random_permutation(n, &mut rand::rng())
}

/// Randomly split the indices `[0, n)` into two parts.
///
/// The first part receives `min(ceil(ratio * n), n)` indices of a random
/// permutation, the second part the rest. Fails when `ratio` is not within
/// `[0, 1]`.
pub fn random_split<R: Rng + ?Sized>(ratio: f64, n: usize, rng: &mut R) -> Result<Split> {
    if !(0.0..=1.0).contains(&ratio) {
        return Err(TextBayesError::invalid_argument(format!(
            "split ratio must be within [0, 1], got {ratio}"
        )));
    }

    let k = ((ratio * n as f64).ceil() as usize).min(n);
    let mut first = random_permutation(n, rng);
    let second = first.split_off(k);

    Ok(Split { first, second })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn assert_partition(split: &Split, n: usize) {
        let mut all: Vec<usize> = split.first().iter().chain(split.second()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, range(0, n));
    }

    #[test]
    fn test_range() {
        assert_eq!(range(2, 5), vec![2, 3, 4]);
        assert!(range(3, 3).is_empty());
    }

    #[test]
    fn test_random_permutation_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut permutation = random_permutation(100, &mut rng);
        permutation.sort_unstable();
        assert_eq!(permutation, range(0, 100));
    }

    #[test]
    fn test_thread_rng_permutation() {
        let mut permutation = random_permutation_with_thread_rng(30);
        assert_eq!(permutation.len(), 30);
        permutation.sort_unstable();
        assert_eq!(permutation, range(0, 30));
        assert!(random_permutation_with_thread_rng(0).is_empty());
    }

    #[test]
    fn test_seeded_permutation_is_reproducible() {
        let a = random_permutation(50, &mut StdRng::seed_from_u64(9));
        let b = random_permutation(50, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_split_sizes_round_up() {
        let mut rng = StdRng::seed_from_u64(1);
        let split = random_split(2.0 / 3.0, 10, &mut rng).unwrap();
        assert_eq!(split.first().len(), 7);
        assert_eq!(split.second().len(), 3);
        assert_partition(&split, 10);
    }

    #[test]
    fn test_split_is_partition_for_all_sizes() {
        let mut rng = StdRng::seed_from_u64(3);
        for n in 0..25 {
            for ratio in [0.0, 0.1, 0.5, 0.9, 1.0] {
                let split = random_split(ratio, n, &mut rng).unwrap();
                assert_partition(&split, n);
            }
        }
    }

    #[test]
    fn test_split_edge_ratios() {
        let mut rng = StdRng::seed_from_u64(5);
        let split = random_split(0.0, 4, &mut rng).unwrap();
        assert!(split.first().is_empty());
        assert_eq!(split.second().len(), 4);

        let split = random_split(1.0, 4, &mut rng).unwrap();
        assert_eq!(split.first().len(), 4);
        assert!(split.second().is_empty());

        let split = random_split(0.5, 0, &mut rng).unwrap();
        assert!(split.first().is_empty() && split.second().is_empty());
    }

    #[test]
    fn test_split_rejects_bad_ratio() {
        let mut rng = StdRng::seed_from_u64(0);
        for ratio in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                random_split(ratio, 10, &mut rng),
                Err(TextBayesError::InvalidArgument(_))
            ));
        }
    }
}
