//! Stop filter implementation.
//!
//! Removes common words that carry little information about a document's
//! class. Ships with a default English list and accepts custom lists.
//!
//! # Examples
//!
//! ```
//! use textbayes::analysis::token_filter::WordFilter;
//! use textbayes::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::new();
//! assert_eq!(filter.apply("the"), "");
//! assert_eq!(filter.apply("quick"), "quick");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token_filter::WordFilter;

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that drops stop words.
///
/// Matching is exact unless the filter is made case-insensitive, in which
/// case the word is compared in lowercase against a lowercased list. The
/// surviving words are returned unchanged either way.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
    ignore_case: bool,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
            ignore_case: false,
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// ```
    /// use textbayes::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Compare words case-insensitively.
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        if ignore_case && !self.ignore_case {
            let lowered = self.stop_words.iter().map(|w| w.to_lowercase()).collect();
            self.stop_words = Arc::new(lowered);
        }
        self.ignore_case = ignore_case;
        self
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        if self.ignore_case {
            self.stop_words.contains(&word.to_lowercase())
        } else {
            self.stop_words.contains(word)
        }
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl WordFilter for StopFilter {
    fn apply(&self, word: &str) -> String {
        if self.is_stop_word(word) {
            String::new()
        } else {
            word.to_string()
        }
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::filter_words;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["the", "and", "or"]);
        let words = filter_words(&filter, ["hello", "the", "world", "and", "test"]);
        assert_eq!(words, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_default_english_list() {
        let filter = StopFilter::new();
        assert!(filter.is_stop_word("the"));
        assert!(filter.is_stop_word("with"));
        assert!(!filter.is_stop_word("bayes"));
        // Case matters by default.
        assert!(!filter.is_stop_word("The"));
    }

    #[test]
    fn test_ignore_case() {
        let filter = StopFilter::from_words(vec!["The"]).ignore_case(true);
        assert_eq!(filter.apply("THE"), "");
        assert_eq!(filter.apply("the"), "");
        assert_eq!(filter.apply("Cat"), "Cat");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
