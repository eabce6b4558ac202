use std::sync::Arc;

use bm25_core::{validate_delta, validate_k1_b, Bm25Error, Tokenizer};

use crate::index::CorpusIndex;
use crate::scorer::{length_norm, Scorer};

/// BM25+: Okapi with a lower bound `delta` added for every matched term,
/// so long documents never score arbitrarily close to zero.
///
/// `idf(t) * (tf * (k1 + 1) / (tf + k1 * (1 - b + b * |d| / avgdl)) + delta)`
#[derive(Debug, Clone)]
pub struct Bm25Plus {
    index: Arc<CorpusIndex>,
    k1: f64,
    b: f64,
    delta: f64,
}

impl Bm25Plus {
    pub fn new(index: Arc<CorpusIndex>, k1: f64, b: f64, delta: f64) -> Result<Self, Bm25Error> {
        validate_k1_b(k1, b)?;
        validate_delta(delta)?;
        tracing::debug!(k1, b, delta, "created bm25plus scorer");
        Ok(Self { index, k1, b, delta })
    }

    /// Index `corpus` with `tokenizer` and create a scorer over it.
    pub fn from_corpus<I, S, T>(
        corpus: I,
        tokenizer: T,
        k1: f64,
        b: f64,
        delta: f64,
    ) -> Result<Self, Bm25Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        T: Tokenizer + 'static,
    {
        validate_k1_b(k1, b)?;
        validate_delta(delta)?;
        let index = CorpusIndex::new(corpus, tokenizer)?;
        Self::new(Arc::new(index), k1, b, delta)
    }

    pub fn k1(&self) -> f64 {
        self.k1
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }
}

impl Scorer for Bm25Plus {
    fn index(&self) -> &CorpusIndex {
        &self.index
    }

    fn name(&self) -> &'static str {
        "bm25plus"
    }

    fn term_weight(&self, tf: f64, doc_len: f64, avg_doc_len: f64) -> f64 {
        let norm = length_norm(self.b, doc_len, avg_doc_len);
        tf * (self.k1 + 1.0) / (tf + self.k1 * norm) + self.delta
    }
}
