//! bm25-rs: BM25-family relevance scoring.
//!
//! This crate re-exports the bm25-rs sub-crates for single-import usage.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`core`] | `Bm25Error`, `Tokenizer`, `WhitespaceTokenizer`, `RegexTokenizer`, `ScorerConfig` |
//! | [`scoring`] | `CorpusIndex`, `IdfCache`, `Scorer`, `Okapi`, `Bm25L`, `Bm25Plus`, `build_scorer` |
//!
//! # Quick Start
//!
//! ```rust
//! use bm25::prelude::*;
//!
//! # fn main() -> Result<(), Bm25Error> {
//! let corpus = ["hello world", "this is a test"];
//! let bm25 = Bm25L::from_corpus(corpus, WhitespaceTokenizer::new(), 1.2, 0.75)?;
//!
//! assert_eq!(bm25.corpus_size(), 2);
//! assert_eq!(bm25.get_top_n(&["hello"], 1)?, vec!["hello world"]);
//! # Ok(())
//! # }
//! ```
//!
//! Enable the `schemars` feature to derive `JsonSchema` for the config types.

/// Errors, tokenizers and scorer configuration.
pub use bm25_core as core;

/// Corpus index, IDF cache and the variant scorers.
pub use bm25_scoring as scoring;

pub use bm25_core::{Bm25Error, ScorerConfig, Tokenizer, Variant};
pub use bm25_scoring::{build_scorer, build_scorer_for_corpus, CorpusIndex, Scorer};

/// The types most callers need.
pub mod prelude {
    pub use bm25_core::{
        Bm25Error, RegexTokenizer, ScorerConfig, Tokenizer, UbiquitousTermIdf, Variant,
        WhitespaceTokenizer,
    };
    pub use bm25_scoring::{
        build_scorer, build_scorer_for_corpus, Bm25L, Bm25Plus, CorpusIndex, Okapi, Scorer,
        ScoredDocument,
    };
}
