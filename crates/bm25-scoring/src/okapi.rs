use std::sync::Arc;

use bm25_core::{validate_k1_b, Bm25Error, Tokenizer};

use crate::index::CorpusIndex;
use crate::scorer::{length_norm, Scorer};

/// Classic Okapi BM25.
///
/// `idf(t) * tf * (k1 + 1) / (tf + k1 * (1 - b + b * |d| / avgdl))`
#[derive(Debug, Clone)]
pub struct Okapi {
    index: Arc<CorpusIndex>,
    /// Term saturation parameter
    k1: f64,
    /// Length normalization parameter
    b: f64,
}

impl Okapi {
    /// Create a scorer over an existing index.
    pub fn new(index: Arc<CorpusIndex>, k1: f64, b: f64) -> Result<Self, Bm25Error> {
        validate_k1_b(k1, b)?;
        tracing::debug!(k1, b, "created okapi scorer");
        Ok(Self { index, k1, b })
    }

    /// Index `corpus` with `tokenizer` and create a scorer over it.
    pub fn from_corpus<I, S, T>(
        corpus: I,
        tokenizer: T,
        k1: f64,
        b: f64,
    ) -> Result<Self, Bm25Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        T: Tokenizer + 'static,
    {
        validate_k1_b(k1, b)?;
        let index = CorpusIndex::new(corpus, tokenizer)?;
        Self::new(Arc::new(index), k1, b)
    }

    pub fn k1(&self) -> f64 {
        self.k1
    }

    pub fn b(&self) -> f64 {
        self.b
    }
}

impl Scorer for Okapi {
    fn index(&self) -> &CorpusIndex {
        &self.index
    }

    fn name(&self) -> &'static str {
        "okapi"
    }

    fn term_weight(&self, tf: f64, doc_len: f64, avg_doc_len: f64) -> f64 {
        let norm = length_norm(self.b, doc_len, avg_doc_len);
        tf * (self.k1 + 1.0) / (tf + self.k1 * norm)
    }
}
