use crate::index::{term_weights, IdfTable, TermWeights};
use crate::tokenizer::Tokenizer;

/// Weight a free-text query against the corpus IDF table.
///
/// Out-of-vocabulary terms are dropped. An empty result means the query
/// carries no usable terms, which callers report separately from a low score.
pub fn vectorize_query(query: &str, idf: &IdfTable, tokenizer: &Tokenizer) -> TermWeights {
    term_weights(&tokenizer.tokenize(query), idf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_index;

    fn corpus() -> IdfTable {
        let docs = vec!["the cat sat on the mat".to_string(), "dogs bark loudly at night".to_string()];
        build_index(&docs, &Tokenizer::new()).1
    }

    #[test]
    fn drops_unknown_terms() {
        let idf = corpus();
        let q = vectorize_query("cat zebra", &idf, &Tokenizer::new());
        assert_eq!(q.len(), 1);
        assert!(q.contains_key("cat"));
    }

    #[test]
    fn no_known_terms_gives_empty_vector() {
        let idf = corpus();
        let tok = Tokenizer::new();
        assert!(vectorize_query("xyz nonsense", &idf, &tok).is_empty());
        assert!(vectorize_query("dog", &idf, &tok).is_empty());
        assert!(vectorize_query("", &idf, &tok).is_empty());
    }

    #[test]
    fn normalizes_by_max_count_of_surviving_terms() {
        let idf = corpus();
        // "zebra" repeats three times but is dropped before counting
        let q = vectorize_query("cat cat mat zebra zebra zebra", &idf, &Tokenizer::new());
        assert!((q["cat"] - idf["cat"]).abs() < 1e-12);
        assert!((q["mat"] - 0.5 * idf["mat"]).abs() < 1e-12);
    }
}
