//! Text instances and their line-oriented corpus format.
//!
//! A corpus file holds one document per non-empty line, either unlabeled
//! (`"some quoted text"`) or prefixed with a single-character label
//! (`A"some quoted text"`).
//!
//! # Core Components
//!
//! - [`instance::TextInstance`] - An optional label plus a bag of words
//! - [`parser`] - Turns corpus lines into analyzed instances
//! - [`writer`] - Writes instances back out, one per line
//!
//! # Examples
//!
//! ```
//! use textbayes::analysis::Analyzer;
//! use textbayes::document::parser::parse_line;
//!
//! let analyzer = Analyzer::raw();
//! let instance = parse_line(r#"A"cat cat dog""#, &analyzer).unwrap().unwrap();
//!
//! assert_eq!(instance.label(), Some("A"));
//! assert_eq!(instance.count_word("cat"), 2);
//! ```

pub mod instance;
pub mod parser;
pub mod writer;

pub use instance::TextInstance;
