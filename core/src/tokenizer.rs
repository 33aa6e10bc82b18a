use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"[a-z0-9']+").expect("valid regex");
    static ref DEFAULT_STOPWORDS: HashSet<String> = {
        let words: &[&str] = &[
            "a","an","and","are","as","at","be","but","by","for","from","has","have","if","in","into",
            "is","it","its","of","on","or","our","so","that","the","their","there","these","this",
            "those","to","was","we","were","will","with","within","without","you","your",
        ];
        words.iter().map(|w| w.to_string()).collect()
    };
}

/// Splits text into index terms.
///
/// Built once at startup and shared by reference; nothing mutates it afterwards.
/// Documents and queries must go through the same `Tokenizer` for their
/// vectors to be comparable.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    word_re: Regex,
    stopwords: HashSet<String>,
}

impl Tokenizer {
    /// Tokenizer with the built-in English stopword list.
    pub fn new() -> Self {
        Self { word_re: WORD_RE.clone(), stopwords: DEFAULT_STOPWORDS.clone() }
    }

    /// Tokenizer with a caller-supplied stopword list. Entries are lowercased.
    pub fn with_stopwords<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords = stopwords.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        Self { word_re: WORD_RE.clone(), stopwords }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Lowercase, extract `[a-z0-9']+` runs left to right and drop stopwords.
    /// Duplicates are kept so callers can count term frequency.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.word_re
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|w| !self.stopwords.contains(*w))
            .map(str::to_string)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
