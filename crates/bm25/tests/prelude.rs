use std::sync::Arc;

use bm25::prelude::*;

#[test]
fn variants_share_one_index() -> Result<(), Bm25Error> {
    let tokenizer = RegexTokenizer::new(r"\w+")?.with_lowercase(true);
    let index = Arc::new(CorpusIndex::new(
        [
            "Rust: async runtime, Tokio.",
            "Python machine learning",
            "Rust ownership, borrowing and lifetimes",
        ],
        tokenizer,
    )?);

    let scorers: Vec<Box<dyn Scorer>> = vec![
        Box::new(Okapi::new(Arc::clone(&index), 1.5, 0.75)?),
        Box::new(Bm25L::new(Arc::clone(&index), 1.5, 0.75)?.with_delta(0.5)?),
        Box::new(Bm25Plus::new(Arc::clone(&index), 1.5, 0.75, 1.0)?),
    ];

    for scorer in &scorers {
        let top = scorer.get_top_n(&["rust", "tokio"], 3)?;
        assert_eq!(top.len(), 3);
        assert_eq!(top[0], "Rust: async runtime, Tokio.");
        assert!(scorer.get_scores(&["python"])?[1] > 0.0);
    }
    Ok(())
}

#[test]
fn config_driven_scorer() -> Result<(), Box<dyn std::error::Error>> {
    let config: ScorerConfig = serde_json::from_str(r#"{"variant": "bm25plus", "k1": 1.2}"#)?;
    let scorer = build_scorer_for_corpus(
        ["hello world", "this is a test"],
        WhitespaceTokenizer::new(),
        &config,
    )?;

    assert_eq!(scorer.name(), "bm25plus");
    let ranked = scorer.get_top_n_scored(&["test"], 5)?;
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].id, 1);
    assert_eq!(ranked[1].score, 0.0);
    Ok(())
}

#[test]
fn errors_surface_through_facade() {
    let err = Okapi::from_corpus(Vec::<String>::new(), WhitespaceTokenizer::new(), 1.2, 0.75)
        .unwrap_err();
    assert_eq!(err, Bm25Error::EmptyCorpus);
    assert_eq!(err.to_string(), "corpus cannot be empty");
}
