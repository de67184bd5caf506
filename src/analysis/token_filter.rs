//! Word filters applied to every raw word during corpus loading.
//!
//! A filter maps one word to one word. Returning an empty string drops the
//! word. Filters compose with [`WordFilter::and_then`]:
//!
//! ```text
//! Tokenizer → LettersOnly → Lowercase → Stop Words → TextInstance
//! ```
//!
//! # Available Filters
//!
//! - [`IdentityFilter`] - Passes every word through unchanged
//! - [`letters::LettersOnlyFilter`] - Strips everything but ASCII letters
//! - [`lowercase::LowercaseFilter`] - Converts words to lowercase
//! - [`stop::StopFilter`] - Removes stop words
//!
//! # Examples
//!
//! ```
//! use textbayes::analysis::token_filter::WordFilter;
//! use textbayes::analysis::token_filter::letters::LettersOnlyFilter;
//! use textbayes::analysis::token_filter::stop::StopFilter;
//!
//! let filter = LettersOnlyFilter::new().unwrap().and_then(StopFilter::new());
//!
//! assert_eq!(filter.apply("cat's"), "cats");
//! assert_eq!(filter.apply("the"), "");
//! assert_eq!(filter.apply("42"), "");
//! ```

use std::fmt::Debug;

/// Trait for per-word filters.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait WordFilter: Send + Sync + Debug {
    /// Rewrite `word`. An empty result means the word is dropped.
    fn apply(&self, word: &str) -> String;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Compose this filter with `next`, which sees this filter's output.
    fn and_then<F: WordFilter>(self, next: F) -> Chain<Self, F>
    where
        Self: Sized,
    {
        Chain::new(self, next)
    }
}

impl WordFilter for Box<dyn WordFilter> {
    fn apply(&self, word: &str) -> String {
        self.as_ref().apply(word)
    }

    fn name(&self) -> &'static str {
        self.as_ref().name()
    }
}

/// Apply `filter` to every word, keeping the non-empty results in order.
pub fn filter_words<F, I, S>(filter: &F, words: I) -> Vec<String>
where
    F: WordFilter + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| filter.apply(word.as_ref()))
        .filter(|word| !word.is_empty())
        .collect()
}

/// A filter that leaves every word unchanged.
#[derive(Clone, Debug, Default)]
pub struct IdentityFilter;

impl IdentityFilter {
    pub fn new() -> Self {
        IdentityFilter
    }
}

impl WordFilter for IdentityFilter {
    fn apply(&self, word: &str) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

/// Two filters applied one after the other.
///
/// A word dropped by the first filter never reaches the second.
#[derive(Clone, Debug)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A: WordFilter, B: WordFilter> Chain<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Chain { first, second }
    }
}

impl<A: WordFilter, B: WordFilter> WordFilter for Chain<A, B> {
    fn apply(&self, word: &str) -> String {
        let word = self.first.apply(word);
        if word.is_empty() {
            return word;
        }
        self.second.apply(&word)
    }

    fn name(&self) -> &'static str {
        "chain"
    }
}

pub mod letters;
pub mod lowercase;
pub mod stop;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::lowercase::LowercaseFilter;
    use crate::analysis::token_filter::stop::StopFilter;

    #[test]
    fn test_identity_filter() {
        let filter = IdentityFilter::new();
        assert_eq!(filter.apply("Hello"), "Hello");
        assert_eq!(filter.name(), "identity");
    }

    #[test]
    fn test_chain_order() {
        // Lowercasing first lets the stop filter catch "The".
        let filter = LowercaseFilter::new().and_then(StopFilter::from_words(vec!["the"]));
        assert_eq!(filter.apply("The"), "");
        assert_eq!(filter.apply("Cat"), "cat");

        let filter = StopFilter::from_words(vec!["the"]).and_then(LowercaseFilter::new());
        assert_eq!(filter.apply("The"), "the");
    }

    #[test]
    fn test_boxed_filter_chain() {
        let boxed: Box<dyn WordFilter> = Box::new(LowercaseFilter::new());
        let filter = boxed.and_then(IdentityFilter::new());
        assert_eq!(filter.apply("ABC"), "abc");
    }

    #[test]
    fn test_filter_words_drops_empty() {
        let filter = StopFilter::from_words(vec!["a", "the"]);
        let words = filter_words(&filter, ["a", "cat", "the", "dog"]);
        assert_eq!(words, vec!["cat", "dog"]);
    }
}
