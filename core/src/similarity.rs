use crate::index::{DocIndex, TermWeights};
use serde::Serialize;

/// Minimum cosine score for a document to count as an answer.
pub const DEFAULT_THRESHOLD: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDoc {
    pub index: DocIndex,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BestMatch {
    Accepted(ScoredDoc),
    /// The best document scored strictly below the threshold.
    BelowThreshold(ScoredDoc),
    NoDocuments,
}

fn norm(v: &TermWeights) -> f64 {
    v.values().map(|w| w * w).sum::<f64>().sqrt()
}

/// Cosine similarity of two sparse vectors; 0.0 if either has zero norm.
pub fn cosine_similarity(a: &TermWeights, b: &TermWeights) -> f64 {
    let (small, large) = if a.len() > b.len() { (b, a) } else { (a, b) };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, wa)| large.get(term).map(|wb| wa * wb))
        .sum();
    let (na, nb) = (norm(a), norm(b));
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    dot / (na * nb)
}

/// Score every document in order and pick the highest.
///
/// Ties go to the lowest index. A best score below `threshold` is rejected;
/// a score equal to it is accepted.
pub fn best_match(query: &TermWeights, documents: &[TermWeights], threshold: f64) -> BestMatch {
    let mut best: Option<ScoredDoc> = None;
    for (index, doc) in documents.iter().enumerate() {
        let score = cosine_similarity(query, doc);
        match best {
            Some(b) if score <= b.score => {}
            _ => best = Some(ScoredDoc { index, score }),
        }
    }
    match best {
        None => BestMatch::NoDocuments,
        Some(b) if b.score < threshold => BestMatch::BelowThreshold(b),
        Some(b) => BestMatch::Accepted(b),
    }
}
