//! Paragraph retrieval over a small text corpus using TF-IDF weighting and
//! cosine similarity.

pub mod error;
pub mod index;
pub mod query;
pub mod retriever;
pub mod segment;
pub mod similarity;
pub mod source;
pub mod tokenizer;

pub use error::CorpusError;
pub use index::{build_index, DocIndex, IdfTable, Index, IndexStats, TermWeights};
pub use query::vectorize_query;
pub use retriever::{Answer, IndexHandle, Outcome, Retriever, RetrieverConfig};
pub use segment::split_docs;
pub use similarity::{best_match, cosine_similarity, BestMatch, ScoredDoc, DEFAULT_THRESHOLD};
pub use source::{FileSource, InlineSource, TextSource};
pub use tokenizer::Tokenizer;
