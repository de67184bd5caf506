//! The materialized dataset.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use log::{debug, info};

use crate::analysis::Analyzer;
use crate::dataset::view::DatasetView;
use crate::document::TextInstance;
use crate::document::parser::parse_reader;
use crate::document::writer::{save_instances, write_instances};
use crate::error::Result;

const UNNAMED: &str = "unnamed";

/// A dataset that owns its instances.
///
/// Instances are only ever appended; every other view over a `TextDataset`
/// borrows it, so the dataset cannot be modified while such views exist.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDataset {
    name: String,
    instances: Vec<TextInstance>,
}

impl TextDataset {
    /// Create an empty, unnamed dataset.
    pub fn new() -> Self {
        Self::with_name(UNNAMED)
    }

    /// Create an empty dataset with the given name.
    pub fn with_name<S: Into<String>>(name: S) -> Self {
        TextDataset {
            name: name.into(),
            instances: Vec::new(),
        }
    }

    /// Create a dataset from already built instances.
    pub fn from_instances<S: Into<String>>(name: S, instances: Vec<TextInstance>) -> Self {
        TextDataset {
            name: name.into(),
            instances,
        }
    }

    /// Whether the dataset still carries the default name.
    pub fn is_unnamed(&self) -> bool {
        self.name == UNNAMED
    }

    /// Append an instance.
    pub fn push(&mut self, instance: TextInstance) {
        self.instances.push(instance);
    }

    pub fn as_slice(&self) -> &[TextInstance] {
        &self.instances
    }

    /// Parse corpus lines from `reader` and append the resulting instances.
    ///
    /// Returns the number of instances added. On a parse error nothing is added.
    pub fn load_from_reader<R: BufRead>(
        &mut self,
        reader: R,
        analyzer: &Analyzer,
    ) -> Result<usize> {
        let parsed = parse_reader(reader, analyzer)?;
        let added = parsed.len();
        self.instances.extend(parsed);
        debug!("{}: added {} instances", self.name, added);
        Ok(added)
    }

    /// Parse the corpus file at `path` and append its instances.
    ///
    /// An unnamed dataset takes the file name as its name.
    pub fn load_from_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        analyzer: &Analyzer,
    ) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path)?;
        if self.is_unnamed()
            && let Some(file_name) = path.file_name()
        {
            self.name = file_name.to_string_lossy().into_owned();
        }

        let added = self.load_from_reader(BufReader::new(file), analyzer)?;
        info!(
            "loaded {} instances from {} using {}",
            added,
            path.display(),
            analyzer.describe()
        );
        Ok(added)
    }

    /// Write the dataset to `writer`, one line per instance.
    ///
    /// With `include_words` each line is `L"w1 w2"`, otherwise only the label.
    pub fn write_to<W: Write>(&self, writer: &mut W, include_words: bool) -> Result<()> {
        write_instances(writer, &self.instances, include_words)
    }

    /// Write the dataset to the file at `path`, replacing its contents.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P, include_words: bool) -> Result<()> {
        save_instances(path, &self.instances, include_words)
    }
}

impl Default for TextDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetView for TextDataset {
    fn name(&self) -> &str {
        &self.name
    }

    fn len(&self) -> usize {
        self.instances.len()
    }

    fn get(&self, index: usize) -> Option<&TextInstance> {
        self.instances.get(index)
    }
}

impl Extend<TextInstance> for TextDataset {
    fn extend<I: IntoIterator<Item = TextInstance>>(&mut self, iter: I) {
        self.instances.extend(iter);
    }
}

impl FromIterator<TextInstance> for TextDataset {
    fn from_iter<I: IntoIterator<Item = TextInstance>>(iter: I) -> Self {
        Self::from_instances(UNNAMED, iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TextDataset {
    type Item = &'a TextInstance;
    type IntoIter = std::slice::Iter<'a, TextInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.instances.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TextBayesError;

    #[test]
    fn test_push_and_access() {
        let mut dataset = TextDataset::new();
        assert!(dataset.is_unnamed());
        assert!(dataset.is_empty());

        dataset.push(TextInstance::from_words(Some("A"), ["cat"]));
        dataset.push(TextInstance::from_words(Some("B"), ["fish", "bird"]));

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.at(1).unwrap().label(), Some("B"));
        assert_eq!(dataset.num_words(), 3);
        assert_eq!((&dataset).into_iter().count(), 2);
    }

    #[test]
    fn test_load_from_reader() {
        let corpus = "A\"cat cat dog\"\n\nB\"fish fish bird\"\n\"cat\"\n";
        let mut dataset = TextDataset::with_name("corpus");
        let added = dataset
            .load_from_reader(corpus.as_bytes(), &Analyzer::raw())
            .unwrap();

        assert_eq!(added, 3);
        assert_eq!(dataset.name(), "corpus");
        assert_eq!(dataset.at(0).unwrap().count_word("cat"), 2);
        assert_eq!(dataset.at(2).unwrap().label(), None);
    }

    #[test]
    fn test_load_error_adds_nothing() {
        let corpus = "A\"cat\"\nbroken line\n";
        let mut dataset = TextDataset::new();
        let err = dataset
            .load_from_reader(corpus.as_bytes(), &Analyzer::raw())
            .unwrap_err();
        assert!(matches!(err, TextBayesError::Parse { line: 2, .. }));
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_write_to() {
        let dataset = TextDataset::from_instances(
            "out",
            vec![
                TextInstance::from_words(Some("A"), ["cat"]),
                TextInstance::from_words(Some("B"), ["fish"]),
            ],
        );

        let mut labels = Vec::new();
        dataset.write_to(&mut labels, false).unwrap();
        assert_eq!(String::from_utf8(labels).unwrap(), "A\nB\n");

        let mut full = Vec::new();
        dataset.write_to(&mut full, true).unwrap();
        assert_eq!(String::from_utf8(full).unwrap(), "A\"cat\"\nB\"fish\"\n");
    }

    #[test]
    fn test_collect() {
        let dataset: TextDataset = vec![TextInstance::unlabeled(vec!["x".to_string()])]
            .into_iter()
            .collect();
        assert_eq!(dataset.len(), 1);
        assert!(dataset.is_unnamed());
    }
}
