//! Error types for the textbayes library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`TextBayesError`] enum.
//!
//! # Examples
//!
//! ```
//! use textbayes::error::{Result, TextBayesError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextBayesError::invalid_argument("ratio must be within [0, 1]"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for textbayes operations.
#[derive(Error, Debug)]
pub enum TextBayesError {
    /// I/O errors while reading corpora or writing predictions.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An argument was outside its accepted range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A view was accessed outside `[0, len)`.
    #[error("Index out of range: index {index} is not within [0, {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Classification was requested before the classifier was trained.
    #[error("Classifier has not been trained")]
    NotTrained,

    /// The training view holds fewer distinct words than the configured vocabulary size.
    #[error(
        "Insufficient vocabulary: requested {requested} words but the training data only contains {available}"
    )]
    InsufficientVocabulary { requested: usize, available: usize },

    /// An aggregate over a view was requested for a view without instances.
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// A corpus line could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TextBayesError.
pub type Result<T> = std::result::Result<T, TextBayesError>;

impl TextBayesError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TextBayesError::InvalidArgument(msg.into())
    }

    /// Create a new index out of range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        TextBayesError::IndexOutOfRange { index, len }
    }

    /// Create a new empty dataset error.
    pub fn empty_dataset<S: Into<String>>(msg: S) -> Self {
        TextBayesError::EmptyDataset(msg.into())
    }

    /// Create a new parse error for the given 1-based line number.
    pub fn parse<S: Into<String>>(line: usize, msg: S) -> Self {
        TextBayesError::Parse {
            line,
            message: msg.into(),
        }
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        TextBayesError::InvalidArgument(format!("invalid configuration: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TextBayesError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TextBayesError::invalid_argument("ratio 1.5");
        assert_eq!(error.to_string(), "Invalid argument: ratio 1.5");

        let error = TextBayesError::index_out_of_range(7, 3);
        assert_eq!(
            error.to_string(),
            "Index out of range: index 7 is not within [0, 3)"
        );

        let error = TextBayesError::parse(4, "missing closing quote");
        assert_eq!(
            error.to_string(),
            "Parse error on line 4: missing closing quote"
        );

        assert_eq!(
            TextBayesError::NotTrained.to_string(),
            "Classifier has not been trained"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = TextBayesError::from(io_error);

        match error {
            TextBayesError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
