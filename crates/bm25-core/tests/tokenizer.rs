use bm25_core::{Bm25Error, RegexTokenizer, Tokenizer, WhitespaceTokenizer};

#[test]
fn whitespace_preserves_order_and_duplicates() {
    let tokenizer = WhitespaceTokenizer::new();
    assert_eq!(
        tokenizer.tokenize("the cat  saw\tthe\nDog"),
        vec!["the", "cat", "saw", "the", "Dog"]
    );
}

#[test]
fn whitespace_lowercase() {
    let tokenizer = WhitespaceTokenizer::new().with_lowercase(true);
    assert_eq!(tokenizer.tokenize("Rust RUST rust"), vec!["rust"; 3]);
}

#[test]
fn whitespace_blank_input_yields_nothing() {
    let tokenizer = WhitespaceTokenizer::new();
    assert!(tokenizer.tokenize("   \n ").is_empty());
}

#[test]
fn regex_emits_matches() {
    let tokenizer = RegexTokenizer::new(r"\w+").unwrap().with_lowercase(true);
    assert_eq!(
        tokenizer.tokenize("Hello, world! It's BM25."),
        vec!["hello", "world", "it", "s", "bm25"]
    );
    assert_eq!(tokenizer.pattern(), r"\w+");
}

#[test]
fn regex_rejects_bad_pattern() {
    let err = RegexTokenizer::new("(unclosed").unwrap_err();
    assert!(matches!(err, Bm25Error::InvalidTokenPattern(_)));
}

#[test]
fn closures_are_tokenizers() {
    let split_on_comma = |text: &str| -> Vec<String> {
        text.split(',').map(|t| t.trim().to_string()).collect()
    };
    assert_eq!(split_on_comma.tokenize("a, b ,c"), vec!["a", "b", "c"]);

    let boxed: Box<dyn Tokenizer> = Box::new(split_on_comma);
    assert_eq!(boxed.tokenize("x,y").len(), 2);
}

#[test]
fn fn_items_are_tokenizers() {
    fn chars(text: &str) -> Vec<String> {
        text.chars().map(String::from).collect()
    }
    assert_eq!(chars.tokenize("abc"), vec!["a", "b", "c"]);
}
