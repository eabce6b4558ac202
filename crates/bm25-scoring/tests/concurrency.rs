use std::sync::Arc;
use std::thread;

use bm25_core::WhitespaceTokenizer;
use bm25_scoring::{CorpusIndex, Okapi, Scorer};

#[test]
fn concurrent_queries_agree() {
    let corpus: Vec<String> = (0..50)
        .map(|i| format!("doc{i} shared term{} term{}", i % 7, i % 3))
        .collect();
    let index = Arc::new(CorpusIndex::new(corpus, WhitespaceTokenizer::new()).unwrap());
    let okapi = Arc::new(Okapi::new(Arc::clone(&index), 1.2, 0.75).unwrap());

    let expected = okapi.get_scores(&["term1", "term2", "doc9"]).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let okapi = Arc::clone(&okapi);
            thread::spawn(move || {
                let mut results = Vec::new();
                for _ in 0..20 {
                    results.push(okapi.get_scores(&["term1", "term2", "doc9"]).unwrap());
                    okapi.idf("term5").unwrap();
                }
                results
            })
        })
        .collect();

    for handle in handles {
        for scores in handle.join().unwrap() {
            assert_eq!(scores, expected);
        }
    }
    // term1, term2, doc9, term5
    assert_eq!(index.idf_cache_len(), 4);
}
