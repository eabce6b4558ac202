use std::sync::Arc;

use bm25_core::{validate_k1_b, validate_shift, Bm25Error, Tokenizer};

use crate::index::CorpusIndex;
use crate::scorer::{length_norm, Scorer};

/// BM25L: scores a length-corrected term frequency.
///
/// With `c = tf / (1 - b + b * |d| / avgdl)` each matched term contributes
/// `idf(t) * (k1 + 1) * (c + delta) / (k1 + c + delta)`.
///
/// `delta` defaults to 0, which makes the contribution
/// `idf(t) * (k1 + 1) * c / (k1 + c)`. Use [`Bm25L::with_delta`] for the
/// shifted form of Lv and Zhai, commonly with `delta = 0.5`.
#[derive(Debug, Clone)]
pub struct Bm25L {
    index: Arc<CorpusIndex>,
    k1: f64,
    b: f64,
    delta: f64,
}

impl Bm25L {
    pub fn new(index: Arc<CorpusIndex>, k1: f64, b: f64) -> Result<Self, Bm25Error> {
        validate_k1_b(k1, b)?;
        tracing::debug!(k1, b, "created bm25l scorer");
        Ok(Self {
            index,
            k1,
            b,
            delta: 0.0,
        })
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

    /// Shift the corrected frequency by `delta`. Must be finite and >= 0.
    pub fn with_delta(mut self, delta: f64) -> Result<Self, Bm25Error> {
        validate_shift(delta)?;
        self.delta = delta;
        Ok(self)
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

impl Scorer for Bm25L {
    fn index(&self) -> &CorpusIndex {
        &self.index
    }

    fn name(&self) -> &'static str {
        "bm25l"
    }

    fn term_weight(&self, tf: f64, doc_len: f64, avg_doc_len: f64) -> f64 {
        let c = tf / length_norm(self.b, doc_len, avg_doc_len) + self.delta;
        (self.k1 + 1.0) * c / (self.k1 + c)
    }
}
