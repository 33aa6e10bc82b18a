use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("no corpus found (tried {tried}); create it with paragraphs separated by blank lines")]
    SourceUnavailable { tried: String },
    #[error("failed to read corpus {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("the corpus is empty; add a few paragraphs separated by blank lines")]
    EmptyCorpus,
}
