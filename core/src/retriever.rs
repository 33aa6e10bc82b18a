use crate::error::CorpusError;
use crate::index::{DocIndex, Index, IndexStats};
use crate::query::vectorize_query;
use crate::similarity::{best_match, BestMatch, ScoredDoc, DEFAULT_THRESHOLD};
use crate::source::TextSource;
use crate::tokenizer::Tokenizer;
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
pub struct RetrieverConfig {
    pub threshold: f64,
}

impl Default for RetrieverConfig {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub index: DocIndex,
    pub score: f64,
    pub text: String,
}

/// Result of a single query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Answer(Answer),
    /// No query term is in the corpus vocabulary.
    EmptyQuery,
    /// Nothing scored at or above the threshold. `best` is the rejected candidate.
    NoMatch { best: Option<ScoredDoc> },
    /// No documents are loaded.
    EmptyCorpus,
}

/// Shared handle to the current index. Swapping replaces the whole index at
/// once, so readers only ever see a complete one.
#[derive(Debug, Default)]
pub struct IndexHandle {
    current: RwLock<Arc<Index>>,
}

impl IndexHandle {
    pub fn new(index: Index) -> Self {
        Self { current: RwLock::new(Arc::new(index)) }
    }

    pub fn snapshot(&self) -> Arc<Index> {
        self.current.read().clone()
    }

    /// Install `index`, returning the one it replaced.
    pub fn replace(&self, index: Index) -> Arc<Index> {
        std::mem::replace(&mut *self.current.write(), Arc::new(index))
    }
}

/// A query session over one corpus.
#[derive(Debug)]
pub struct Retriever {
    tokenizer: Tokenizer,
    config: RetrieverConfig,
    index: IndexHandle,
}

impl Retriever {
    pub fn new(index: Index, tokenizer: Tokenizer, config: RetrieverConfig) -> Self {
        Self { tokenizer, config, index: IndexHandle::new(index) }
    }

    pub fn from_text(text: &str, tokenizer: Tokenizer, config: RetrieverConfig) -> Self {
        let index = Index::from_text(text, &tokenizer);
        Self::new(index, tokenizer, config)
    }

    /// Load and index a corpus, refusing one that holds no documents.
    pub fn from_source(source: &dyn TextSource, tokenizer: Tokenizer, config: RetrieverConfig) -> Result<Self, CorpusError> {
        let index = load_index(source, &tokenizer)?;
        Ok(Self::new(index, tokenizer, config))
    }

    pub fn ask(&self, query: &str) -> Outcome {
        let index = self.index.snapshot();
        if index.is_empty() {
            return Outcome::EmptyCorpus;
        }
        let qv = vectorize_query(query, index.idf(), &self.tokenizer);
        if qv.is_empty() {
            tracing::debug!(query, "no in-vocabulary terms");
            return Outcome::EmptyQuery;
        }
        match best_match(&qv, index.vectors(), self.config.threshold) {
            BestMatch::Accepted(best) => {
                tracing::debug!(query, doc = best.index, score = best.score, "answered");
                let text = index.document(best.index).unwrap_or_default().to_string();
                Outcome::Answer(Answer { index: best.index, score: best.score, text })
            }
            BestMatch::BelowThreshold(best) => {
                tracing::debug!(query, doc = best.index, score = best.score, "best score below threshold");
                Outcome::NoMatch { best: Some(best) }
            }
            BestMatch::NoDocuments => Outcome::EmptyCorpus,
        }
    }

    /// Rebuild the index from `source` and swap it in. On error the current
    /// index keeps serving.
    pub fn reload(&self, source: &dyn TextSource) -> Result<IndexStats, CorpusError> {
        let index = match load_index(source, &self.tokenizer) {
            Ok(index) => index,
            Err(e) => {
                tracing::warn!(source = %source.describe(), error = %e, "reload rejected");
                return Err(e);
            }
        };
        let stats = index.stats();
        self.index.replace(index);
        tracing::info!(num_docs = stats.num_docs, vocabulary_size = stats.vocabulary_size, "index reloaded");
        Ok(stats)
    }

    pub fn stats(&self) -> IndexStats { self.index.snapshot().stats() }

    pub fn document(&self, index: DocIndex) -> Option<String> {
        self.index.snapshot().document(index).map(str::to_string)
    }

    pub fn threshold(&self) -> f64 { self.config.threshold }

    pub fn tokenizer(&self) -> &Tokenizer { &self.tokenizer }
}

fn load_index(source: &dyn TextSource, tokenizer: &Tokenizer) -> Result<Index, CorpusError> {
    let text = source.read_text()?;
    let index = Index::from_text(&text, tokenizer);
    if index.is_empty() {
        return Err(CorpusError::EmptyCorpus);
    }
    Ok(index)
}
