use crate::error::CorpusError;
use std::fs;
use std::path::{Path, PathBuf};

/// Supplies the raw corpus text as one block.
pub trait TextSource {
    fn read_text(&self) -> Result<String, CorpusError>;
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}

/// Reads the first existing file among an ordered list of candidates.
#[derive(Debug, Clone)]
pub struct FileSource {
    candidates: Vec<PathBuf>,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { candidates: vec![path.as_ref().to_path_buf()] }
    }

    pub fn with_candidates<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self { candidates: paths.into_iter().map(|p| p.as_ref().to_path_buf()).collect() }
    }

    pub fn candidates(&self) -> &[PathBuf] { &self.candidates }

    fn tried(&self) -> String {
        self.candidates.iter().map(|p| format!("'{}'", p.display())).collect::<Vec<_>>().join(", ")
    }
}

impl Default for FileSource {
    /// `posts.text`, falling back to `posts.txt`, in the working directory.
    fn default() -> Self {
        Self::with_candidates(["posts.text", "posts.txt"])
    }
}

impl TextSource for FileSource {
    fn read_text(&self) -> Result<String, CorpusError> {
        let path = self
            .candidates
            .iter()
            .find(|p| p.is_file())
            .ok_or_else(|| CorpusError::SourceUnavailable { tried: self.tried() })?;
        let text = fs::read_to_string(path).map_err(|source| CorpusError::Read { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "read corpus");
        Ok(text.trim().to_string())
    }

    fn describe(&self) -> String { self.tried() }
}

/// Corpus text already held in memory.
#[derive(Debug, Clone)]
pub struct InlineSource(pub String);

impl TextSource for InlineSource {
    fn read_text(&self) -> Result<String, CorpusError> { Ok(self.0.clone()) }

    fn describe(&self) -> String { "inline text".to_string() }
}
