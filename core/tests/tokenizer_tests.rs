use postfind_core::tokenizer::Tokenizer;

#[test]
fn it_lowercases_without_stemming() {
    let words = Tokenizer::new().tokenize("Running Runners RUN! Dogs");
    assert_eq!(words, vec!["running", "runners", "run", "dogs"]);
}

#[test]
fn it_filters_stopwords() {
    let words = Tokenizer::new().tokenize("The quick brown fox and the lazy dog");
    assert!(!words.contains(&"the".to_string()));
    assert!(!words.contains(&"and".to_string()));
    assert_eq!(words, vec!["quick", "brown", "fox", "lazy", "dog"]);
}

#[test]
fn it_preserves_duplicates_in_order() {
    let words = Tokenizer::new().tokenize("b a b, c b");
    assert_eq!(words, vec!["b", "b", "c", "b"]);
}
