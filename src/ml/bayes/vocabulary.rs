//! Vocabulary selection.

use ahash::AHashMap;
use log::debug;

use crate::dataset::DatasetView;
use crate::error::{Result, TextBayesError};

/// The most frequent words of a training view, by descending count.
///
/// Words with equal counts are ordered alphabetically, so the same training
/// data always yields the same vocabulary.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: Vec<(String, usize)>,
    positions: AHashMap<String, usize>,
}

impl Vocabulary {
    /// Select the `size` most frequent words of `examples`.
    ///
    /// Fails with `InsufficientVocabulary` when `examples` contains fewer
    /// than `size` distinct words.
    pub fn build(examples: &dyn DatasetView, size: usize) -> Result<Self> {
        let mut counts: AHashMap<&str, usize> = AHashMap::new();
        for instance in examples.instances() {
            for word in instance.words() {
                *counts.entry(word.as_str()).or_insert(0) += 1;
            }
        }

        if counts.len() < size {
            return Err(TextBayesError::InsufficientVocabulary {
                requested: size,
                available: counts.len(),
            });
        }

        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        debug!(
            "vocabulary: keeping {} of {} distinct words",
            size,
            ranked.len()
        );
        ranked.truncate(size);

        Ok(Self::from_entries(
            ranked
                .into_iter()
                .map(|(word, count)| (word.to_string(), count))
                .collect(),
        ))
    }

    fn from_entries(entries: Vec<(String, usize)>) -> Self {
        let positions = entries
            .iter()
            .enumerate()
            .map(|(position, (word, _))| (word.clone(), position))
            .collect();
        Vocabulary { entries, positions }
    }

    /// `(word, count)` pairs, most frequent first.
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_str())
    }

    /// Rank of `word` in the vocabulary.
    pub fn position(&self, word: &str) -> Option<usize> {
        self.positions.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::TextDataset;
    use crate::document::TextInstance;

    fn dataset() -> TextDataset {
        TextDataset::from_instances(
            "vocab",
            vec![
                TextInstance::from_words(Some("A"), ["cat", "cat", "dog", "emu"]),
                TextInstance::from_words(Some("B"), ["cat", "bee", "dog", "ant"]),
            ],
        )
    }

    #[test]
    fn test_ranked_by_count_then_word() {
        let vocabulary = Vocabulary::build(&dataset(), 5).unwrap();
        assert_eq!(
            vocabulary.entries(),
            &[
                ("cat".to_string(), 3),
                ("dog".to_string(), 2),
                ("ant".to_string(), 1),
                ("bee".to_string(), 1),
                ("emu".to_string(), 1),
            ]
        );
        assert_eq!(vocabulary.position("dog"), Some(1));
    }

    #[test]
    fn test_truncates_to_size() {
        let vocabulary = Vocabulary::build(&dataset(), 3).unwrap();
        let words: Vec<&str> = vocabulary.words().collect();
        assert_eq!(words, vec!["cat", "dog", "ant"]);
        assert!(!vocabulary.contains("emu"));
        assert_eq!(vocabulary.position("emu"), None);
    }

    #[test]
    fn test_insufficient_vocabulary() {
        let err = Vocabulary::build(&dataset(), 6).unwrap_err();
        assert!(matches!(
            err,
            TextBayesError::InsufficientVocabulary {
                requested: 6,
                available: 5
            }
        ));
    }
}
