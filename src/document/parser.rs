//! Corpus line parser.
//!
//! A line is either `"<text>"` (unlabeled) or `L"<text>"`, where `L` is a
//! single-character label written directly before the opening quote. The
//! text between the first and the last quote is run through an
//! [`Analyzer`] to produce the instance's words.

use std::io::BufRead;

use log::debug;

use crate::analysis::Analyzer;
use crate::document::TextInstance;
use crate::error::{Result, TextBayesError};

/// Parse a single corpus line.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_line(line: &str, analyzer: &Analyzer) -> Result<Option<TextInstance>> {
    parse_numbered_line(line, 1, analyzer)
}

/// Parse every non-blank line of `reader`, in order.
///
/// Bytes that are not valid UTF-8 are replaced with `U+FFFD` instead of
/// failing the whole read.
pub fn parse_reader<R: BufRead>(mut reader: R, analyzer: &Analyzer) -> Result<Vec<TextInstance>> {
    let mut instances = Vec::new();
    let mut buffer = Vec::new();
    let mut line_number = 0;
    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        line_number += 1;
        let line = String::from_utf8_lossy(&buffer);
        if let Some(instance) = parse_numbered_line(&line, line_number, analyzer)? {
            instances.push(instance);
        }
    }
    debug!("parsed {} instances", instances.len());
    Ok(instances)
}

fn parse_numbered_line(
    line: &str,
    line_number: usize,
    analyzer: &Analyzer,
) -> Result<Option<TextInstance>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (Some(open), Some(close)) = (line.find('"'), line.rfind('"')) else {
        return Err(TextBayesError::parse(line_number, "missing quoted text"));
    };
    if open == close {
        return Err(TextBayesError::parse(line_number, "missing closing quote"));
    }

    let label = if line.starts_with('"') {
        None
    } else {
        line.chars().next().map(String::from)
    };
    let words = analyzer.analyze(&line[open + 1..close]);

    Ok(Some(TextInstance::with_label(label, words)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalyzerConfig;

    #[test]
    fn test_parse_labeled_line() {
        let instance = parse_line(r#"A"cat cat dog""#, &Analyzer::raw())
            .unwrap()
            .unwrap();
        assert_eq!(instance.label(), Some("A"));
        assert_eq!(instance.words(), &["cat", "cat", "dog"]);
    }

    #[test]
    fn test_parse_unlabeled_line() {
        let instance = parse_line(r#"  "fish bird"  "#, &Analyzer::raw())
            .unwrap()
            .unwrap();
        assert_eq!(instance.label(), None);
        assert_eq!(instance.words(), &["fish", "bird"]);
    }

    #[test]
    fn test_inner_quotes_stay_in_text() {
        let instance = parse_line(r#"B"say "hi" now""#, &Analyzer::raw())
            .unwrap()
            .unwrap();
        assert_eq!(instance.label(), Some("B"));
        assert_eq!(instance.words(), &["say", "\"hi\"", "now"]);
    }

    #[test]
    fn test_blank_line() {
        assert!(parse_line("   ", &Analyzer::raw()).unwrap().is_none());
    }

    #[test]
    fn test_empty_quoted_text() {
        let instance = parse_line(r#"C"""#, &Analyzer::raw()).unwrap().unwrap();
        assert_eq!(instance.label(), Some("C"));
        assert_eq!(instance.num_words(), 0);
    }

    #[test]
    fn test_malformed_lines() {
        assert!(matches!(
            parse_line("A no quotes", &Analyzer::raw()),
            Err(TextBayesError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parse_line(r#"A"unterminated"#, &Analyzer::raw()),
            Err(TextBayesError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_reader_numbers_lines() {
        let input = "A\"one\"\n\nB\"two\"\nbroken\n";
        let err = parse_reader(input.as_bytes(), &Analyzer::raw()).unwrap_err();
        assert!(matches!(err, TextBayesError::Parse { line: 4, .. }));

        let input = "A\"one\"\n\nB\"two three\"\n";
        let instances = parse_reader(input.as_bytes(), &Analyzer::raw()).unwrap();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[1].num_words(), 2);
    }

    #[test]
    fn test_parse_reader_replaces_invalid_utf8() {
        let input: &[u8] = b"A\"cat dog\"\r\nB\"caf\xe9 fish\"\nbroken\n";
        let err = parse_reader(input, &Analyzer::raw()).unwrap_err();
        assert!(matches!(err, TextBayesError::Parse { line: 3, .. }));

        let input: &[u8] = b"A\"cat dog\"\r\nB\"caf\xe9 fish\"";
        let instances = parse_reader(input, &Analyzer::raw()).unwrap();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].words(), &["cat", "dog"]);
        assert_eq!(instances[1].words(), &["caf\u{fffd}", "fish"]);

        let analyzer = Analyzer::from_config(&AnalyzerConfig::default()).unwrap();
        let instances = parse_reader(input, &analyzer).unwrap();
        assert_eq!(instances[1].words(), &["caf", "fish"]);
    }

    #[test]
    fn test_parse_with_filters() {
        let analyzer = Analyzer::from_config(&AnalyzerConfig::default()).unwrap();
        let instance = parse_line(r#"A"The cat, the dog!""#, &analyzer)
            .unwrap()
            .unwrap();
        assert_eq!(instance.words(), &["The", "cat", "dog"]);
    }
}
