//! Letters-only filter implementation.

use regex::Regex;

use crate::analysis::token_filter::WordFilter;
use crate::error::Result;

const NON_LETTERS: &str = "[^a-zA-Z]+";

/// A filter that removes every character that is not an ASCII letter.
///
/// Words made only of digits or punctuation become empty and are dropped.
///
/// # Examples
///
/// ```
/// use textbayes::analysis::token_filter::WordFilter;
/// use textbayes::analysis::token_filter::letters::LettersOnlyFilter;
///
/// let filter = LettersOnlyFilter::new().unwrap();
/// assert_eq!(filter.apply("(e-mail)"), "email");
/// assert_eq!(filter.apply("1984"), "");
/// ```
#[derive(Clone, Debug)]
pub struct LettersOnlyFilter {
    pattern: Regex,
}

impl LettersOnlyFilter {
    /// Create a new letters-only filter.
    pub fn new() -> Result<Self> {
        Ok(LettersOnlyFilter {
            pattern: Regex::new(NON_LETTERS).map_err(anyhow::Error::from)?,
        })
    }
}

impl WordFilter for LettersOnlyFilter {
    fn apply(&self, word: &str) -> String {
        self.pattern.replace_all(word, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "letters_only"
    }
}
