//! Text analysis for corpus loading.
//!
//! Quoted corpus text is split into raw words by a [`tokenizer::Tokenizer`]
//! and every raw word is then passed through a [`token_filter::WordFilter`]
//! pipeline that may rewrite it or drop it (by returning an empty string).
//!
//! ```text
//! "The cat's 2 toys" → Tokenizer → [The, cat's, 2, toys]
//!                    → LettersOnly → [The, cats, toys]
//!                    → Stop        → [cats, toys]
//! ```

pub mod analyzer;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, AnalyzerConfig};
