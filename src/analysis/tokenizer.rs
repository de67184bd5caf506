//! Tokenizers that split quoted corpus text into raw words.

use std::fmt::Debug;

/// Trait for tokenizers that convert text into raw words.
///
/// The trait requires `Send + Sync` so analyzers can be shared across threads.
pub trait Tokenizer: Send + Sync + Debug {
    /// Split `text` into words. Implementations never return empty words.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;
