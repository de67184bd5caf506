//! Read-only, composable views over text instances.
//!
//! Every view implements [`DatasetView`]. The only view that owns instances
//! is the materialized [`TextDataset`]; the others hold a reference to a
//! base view plus an index list, so stacking them (a split of a filter of a
//! split, ...) never copies word data.
//!
//! ```text
//! TextDataset ──▶ IndexedView (training) ──▶ PredicateView (label == "A")
//!            └──▶ IndexedView (test)
//! ```
//!
//! # Examples
//!
//! ```
//! use textbayes::dataset::{DatasetView, TextDataset};
//! use textbayes::document::TextInstance;
//!
//! let mut dataset = TextDataset::with_name("pets");
//! dataset.push(TextInstance::from_words(Some("A"), ["cat", "cat", "dog"]));
//! dataset.push(TextInstance::from_words(Some("B"), ["fish", "bird"]));
//! dataset.push(TextInstance::from_words(Some("A"), ["dog"]));
//!
//! let a = dataset.select_label("A");
//! assert_eq!(a.len(), 2);
//! assert_eq!(a.num_words(), 4);
//!
//! let with_cat = a.filter(&|instance: &TextInstance| instance.contains_word("cat"));
//! assert_eq!(with_cat.len(), 1);
//! assert!(std::ptr::eq(with_cat.at(0).unwrap(), dataset.at(0).unwrap()));
//! ```

pub mod collection;
pub mod indexed;
pub mod predicate;
pub mod split;
pub mod view;

pub use collection::TextDataset;
pub use indexed::IndexedView;
pub use predicate::PredicateView;
pub use split::DatasetSplit;
pub use view::{AsDatasetView, DatasetView, Instances};
