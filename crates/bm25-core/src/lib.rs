//! Core types shared by every bm25-rs crate.
//!
//! This crate holds the pieces that do not depend on a built corpus:
//! the [`Bm25Error`] taxonomy, the [`Tokenizer`] contract with two stock
//! implementations, and the serde-backed [`ScorerConfig`].

mod config;
mod tokenizer;

pub use config::{ScorerConfig, UbiquitousTermIdf, Variant};
pub use tokenizer::{RegexTokenizer, Tokenizer, WhitespaceTokenizer};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Every failure a bm25-rs operation can report.
///
/// All variants are caller-input contract violations. None of them is
/// transient, so retrying the same call cannot succeed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Bm25Error {
    #[error("corpus cannot be empty")]
    EmptyCorpus,
    #[error("tokenizer cannot be nil")]
    NilTokenizer,
    #[error("tokenizer returned no tokens for document at index {index}")]
    EmptyTokenization { index: usize },
    #[error("k1 must be finite and >= 0, got {0}")]
    InvalidK1(f64),
    #[error("b must be within [0, 1], got {0}")]
    InvalidB(f64),
    #[error("invalid delta {0}")]
    InvalidDelta(f64),
    #[error("query cannot be empty")]
    EmptyQuery,
    #[error("term cannot be empty")]
    EmptyTerm,
    #[error("document ids cannot be empty")]
    EmptyDocumentIds,
    #[error("invalid document id {id} for corpus of size {corpus_size}")]
    InvalidDocumentId { id: usize, corpus_size: usize },
    #[error("n must be > 0, got {0}")]
    InvalidN(usize),
    #[error("invalid token pattern: {0}")]
    InvalidTokenPattern(String),
}

// ---------------------------------------------------------------------------
// Parameter validation
// ---------------------------------------------------------------------------

/// Check the saturation and length-normalization parameters shared by all
/// variants. `k1` must be finite and non-negative; NaN fails both checks.
pub fn validate_k1_b(k1: f64, b: f64) -> Result<(), Bm25Error> {
    if !k1.is_finite() || k1 < 0.0 {
        return Err(Bm25Error::InvalidK1(k1));
    }
    if !(0.0..=1.0).contains(&b) {
        return Err(Bm25Error::InvalidB(b));
    }
    Ok(())
}

/// Check the BM25+ lower-bound parameter.
pub fn validate_delta(delta: f64) -> Result<(), Bm25Error> {
    if !delta.is_finite() {
        return Err(Bm25Error::InvalidDelta(delta));
    }
    Ok(())
}

/// Check the BM25L frequency shift. A negative shift can zero the
/// corrected frequency and divide by zero.
pub fn validate_shift(delta: f64) -> Result<(), Bm25Error> {
    validate_delta(delta)?;
    if delta < 0.0 {
        return Err(Bm25Error::InvalidDelta(delta));
    }
    Ok(())
}
