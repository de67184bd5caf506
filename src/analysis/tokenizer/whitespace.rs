//! Whitespace tokenizer implementation.

use super::Tokenizer;

/// A tokenizer that splits text on whitespace.
///
/// # Examples
///
/// ```
/// use textbayes::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
/// assert_eq!(tokenizer.tokenize("  Hello \t world "), vec!["Hello", "world"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
