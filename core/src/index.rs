use crate::segment::split_docs;
use crate::tokenizer::Tokenizer;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

pub type DocIndex = usize;

/// Sparse term -> weight mapping. Used for both document and query vectors.
pub type TermWeights = HashMap<String, f64>;
pub type IdfTable = HashMap<String, f64>;
pub type DocumentFrequencies = HashMap<String, usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub num_docs: usize,
    pub vocabulary_size: usize,
}

/// Number of documents each term appears in, counting a document once per term.
pub fn document_frequencies(tokenized: &[Vec<String>]) -> DocumentFrequencies {
    let mut df: DocumentFrequencies = HashMap::new();
    for tokens in tokenized {
        let seen_in_doc: HashSet<&String> = tokens.iter().collect();
        for term in seen_in_doc {
            *df.entry(term.clone()).or_insert(0) += 1;
        }
    }
    df
}

/// Smoothed IDF: `ln(N / (1 + df)) + 1`. Positive for every `df <= N`.
pub fn idf_weight(num_docs: usize, df: usize) -> f64 {
    (num_docs as f64 / (1 + df) as f64).ln() + 1.0
}

/// TF-IDF weights for a token sequence, with term frequency normalized by the
/// most frequent term's count. Tokens missing from `idf` get no entry.
pub fn term_weights(tokens: &[String], idf: &IdfTable) -> TermWeights {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        if idf.contains_key(token) {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }
    }
    let max_count = counts.values().copied().max().unwrap_or(1) as f64;
    counts
        .into_iter()
        .map(|(term, c)| (term.to_string(), (c as f64 / max_count) * idf[term]))
        .collect()
}

/// Compute per-document TF-IDF vectors (aligned with `documents`) and the IDF table.
pub fn build_index(documents: &[String], tokenizer: &Tokenizer) -> (Vec<TermWeights>, IdfTable) {
    let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenizer.tokenize(d)).collect();
    let n = tokenized.len();
    let idf: IdfTable = document_frequencies(&tokenized)
        .into_iter()
        .map(|(term, df_t)| {
            let w = idf_weight(n, df_t);
            (term, w)
        })
        .collect();
    let vectors = tokenized.iter().map(|tokens| term_weights(tokens, &idf)).collect();
    (vectors, idf)
}

/// Documents with their TF-IDF vectors and the corpus IDF table.
///
/// Immutable once built; rebuild wholesale to change the corpus.
#[derive(Debug, Clone, Default)]
pub struct Index {
    documents: Vec<String>,
    vectors: Vec<TermWeights>,
    idf: IdfTable,
}

impl Index {
    pub fn empty() -> Self { Self::default() }

    pub fn build(documents: Vec<String>, tokenizer: &Tokenizer) -> Self {
        let (vectors, idf) = build_index(&documents, tokenizer);
        let index = Self { documents, vectors, idf };
        let stats = index.stats();
        tracing::info!(num_docs = stats.num_docs, vocabulary_size = stats.vocabulary_size, "built index");
        index
    }

    /// Segment `text` into paragraphs and index them.
    pub fn from_text(text: &str, tokenizer: &Tokenizer) -> Self {
        Self::build(split_docs(text), tokenizer)
    }

    pub fn documents(&self) -> &[String] { &self.documents }

    pub fn document(&self, index: DocIndex) -> Option<&str> {
        self.documents.get(index).map(String::as_str)
    }

    pub fn vectors(&self) -> &[TermWeights] { &self.vectors }

    pub fn idf(&self) -> &IdfTable { &self.idf }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }

    pub fn stats(&self) -> IndexStats {
        IndexStats { num_docs: self.documents.len(), vocabulary_size: self.idf.len() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-12 }

    #[test]
    fn df_counts_each_document_once() {
        let tokenized = vec![
            vec!["cat".to_string(), "cat".to_string(), "mat".to_string()],
            vec!["cat".to_string()],
        ];
        let df = document_frequencies(&tokenized);
        assert_eq!(df["cat"], 2);
        assert_eq!(df["mat"], 1);
    }

    #[test]
    fn idf_matches_smoothed_formula() {
        assert!(close(idf_weight(2, 1), 1.0));
        assert!(close(idf_weight(4, 1), 2f64.ln() + 1.0));
        assert!(idf_weight(3, 3) > 0.0);
    }

    #[test]
    fn tf_is_normalized_by_max_count() {
        let tok = Tokenizer::new();
        let (vectors, idf) = build_index(&docs(&["apple apple banana", "cherry"]), &tok);
        // N = 2, every df = 1, so every idf is exactly 1.0
        assert!(close(idf["apple"], 1.0));
        assert!(close(vectors[0]["apple"], 1.0));
        assert!(close(vectors[0]["banana"], 0.5));
        assert!(close(vectors[1]["cherry"], 1.0));
        assert!(!vectors[1].contains_key("apple"));
    }

    #[test]
    fn stopword_only_document_has_empty_vector() {
        let tok = Tokenizer::new();
        let (vectors, idf) = build_index(&docs(&["the and of", "rust"]), &tok);
        assert!(vectors[0].is_empty());
        assert_eq!(idf.len(), 1);
    }

    #[test]
    fn empty_corpus_yields_empty_index() {
        let tok = Tokenizer::new();
        let (vectors, idf) = build_index(&[], &tok);
        assert!(vectors.is_empty());
        assert!(idf.is_empty());
        let index = Index::from_text("   \n\n  ", &tok);
        assert!(index.is_empty());
        assert_eq!(index.stats(), IndexStats { num_docs: 0, vocabulary_size: 0 });
    }

    #[test]
    fn index_keeps_documents_aligned_with_vectors() {
        let index = Index::from_text("the cat sat on the mat\n\ndogs bark loudly at night", &Tokenizer::new());
        assert_eq!(index.len(), 2);
        assert_eq!(index.vectors().len(), 2);
        assert_eq!(index.document(1), Some("dogs bark loudly at night"));
        assert!(index.vectors()[1].contains_key("dogs"));
        assert_eq!(index.document(2), None);
        assert_eq!(index.stats().vocabulary_size, 7);
    }
}
