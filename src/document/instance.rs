//! The text instance type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A text instance: an optional class label and a list of (possibly repeated) words.
///
/// Word order is kept so that instances can be written back out unchanged,
/// but the classifier treats the words as a bag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInstance {
    label: Option<String>,
    words: Vec<String>,
}

impl TextInstance {
    /// Create a labeled instance.
    pub fn new<S: Into<String>>(label: S, words: Vec<String>) -> Self {
        TextInstance {
            label: Some(label.into()),
            words,
        }
    }

    /// Create an instance without a label, e.g. a document to classify.
    pub fn unlabeled(words: Vec<String>) -> Self {
        TextInstance { label: None, words }
    }

    /// Create an instance from an optional label.
    pub fn with_label(label: Option<String>, words: Vec<String>) -> Self {
        TextInstance { label, words }
    }

    /// Build an instance from borrowed words.
    pub fn from_words<I, S>(label: Option<&str>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TextInstance {
            label: label.map(str::to_string),
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Count how often `word` occurs in this instance.
    pub fn count_word(&self, word: &str) -> usize {
        self.words.iter().filter(|w| w.as_str() == word).count()
    }

    /// Whether `word` occurs at least once.
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Return a copy of this instance carrying `label` instead of its own.
    pub fn relabeled<S: Into<String>>(&self, label: S) -> Self {
        TextInstance {
            label: Some(label.into()),
            words: self.words.clone(),
        }
    }
}

impl fmt::Display for TextInstance {
    /// Formats the instance in the corpus line format, `L"w1 w2"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\"{}\"",
            self.label.as_deref().unwrap_or(""),
            self.words.join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_word() {
        let instance = TextInstance::from_words(Some("A"), ["cat", "dog", "cat"]);
        assert_eq!(instance.count_word("cat"), 2);
        assert_eq!(instance.count_word("dog"), 1);
        assert_eq!(instance.count_word("bird"), 0);
        assert!(instance.contains_word("dog"));
        assert!(!instance.contains_word("bird"));
        assert_eq!(instance.num_words(), 3);
    }

    #[test]
    fn test_relabeled_keeps_words() {
        let instance = TextInstance::from_words(Some("A"), ["fish", "bird"]);
        let relabeled = instance.relabeled("B");
        assert_eq!(relabeled.label(), Some("B"));
        assert_eq!(relabeled.words(), instance.words());
    }

    #[test]
    fn test_display() {
        let labeled = TextInstance::from_words(Some("A"), ["cat", "dog"]);
        assert_eq!(labeled.to_string(), "A\"cat dog\"");

        let unlabeled = TextInstance::unlabeled(vec!["cat".to_string()]);
        assert_eq!(unlabeled.to_string(), "\"cat\"");
        assert_eq!(unlabeled.label(), None);
    }
}
