//! Lowercase filter implementation.

use crate::analysis::token_filter::WordFilter;

/// A filter that converts words to lowercase.
///
/// ASCII words take the cheap path; anything else uses Unicode-aware lowercasing.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl WordFilter for LowercaseFilter {
    fn apply(&self, word: &str) -> String {
        if word.is_ascii() {
            word.to_ascii_lowercase()
        } else {
            word.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        assert_eq!(filter.apply("The"), "the");
        assert_eq!(filter.apply("QUICK"), "quick");
        assert_eq!(filter.apply("Ärger"), "ärger");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
