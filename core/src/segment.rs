use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n").expect("valid regex");
}

/// Split a corpus into paragraph documents.
///
/// Paragraphs are separated by a whitespace run containing at least two line
/// breaks. Pieces are trimmed and empty ones dropped; the position of a piece
/// in the returned vector is its document index.
pub fn split_docs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_blank_lines() {
        assert_eq!(split_docs("A\n\nB\n\n\nC"), vec!["A", "B", "C"]);
    }

    #[test]
    fn whitespace_only_lines_count_as_blank() {
        assert_eq!(split_docs("first\n  \t\nsecond\r\n\r\nthird"), vec!["first", "second", "third"]);
    }

    #[test]
    fn single_newline_does_not_split() {
        assert_eq!(split_docs("  line one\nline two  "), vec!["line one\nline two"]);
    }

    #[test]
    fn empty_input_has_no_documents() {
        assert!(split_docs("").is_empty());
        assert!(split_docs(" \n\n \n\t").is_empty());
    }
}
