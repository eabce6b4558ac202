//! BM25-family scoring over a shared, immutable corpus index.
//!
//! Build a [`CorpusIndex`] once, wrap it in an `Arc`, and hand it to as many
//! scorers as needed. Each scorer implements [`Scorer`]; the variants differ
//! only in [`Scorer::term_weight`].
//!
//! ```rust
//! use std::sync::Arc;
//! use bm25_core::WhitespaceTokenizer;
//! use bm25_scoring::{Bm25Plus, CorpusIndex, Okapi, Scorer};
//!
//! # fn main() -> Result<(), bm25_core::Bm25Error> {
//! let index = Arc::new(CorpusIndex::new(
//!     ["rust async runtime", "python machine learning"],
//!     WhitespaceTokenizer::new(),
//! )?);
//! let okapi = Okapi::new(Arc::clone(&index), 1.2, 0.75)?;
//! let plus = Bm25Plus::new(index, 1.2, 0.75, 1.0)?;
//!
//! assert_eq!(okapi.get_top_n(&["rust"], 1)?, vec!["rust async runtime"]);
//! assert_eq!(plus.get_scores(&["rust"])?.len(), 2);
//! # Ok(())
//! # }
//! ```

mod bm25l;
mod bm25plus;
mod idf;
mod index;
mod okapi;
mod rank;
mod scorer;

pub use bm25l::Bm25L;
pub use bm25plus::Bm25Plus;
pub use idf::{inverse_document_frequency, IdfCache};
pub use index::{CorpusIndex, CorpusIndexBuilder};
pub use okapi::Okapi;
pub use rank::{rank_top_n, ScoredDocument};
pub use scorer::Scorer;

use std::sync::Arc;

use bm25_core::{Bm25Error, ScorerConfig, Tokenizer, Variant};

/// Create the scorer selected by `config` over an existing index.
///
/// `config.ubiquitous_idf` is not consulted here; it belongs to the index.
pub fn build_scorer(
    index: Arc<CorpusIndex>,
    config: &ScorerConfig,
) -> Result<Box<dyn Scorer>, Bm25Error> {
    config.validate()?;
    let scorer: Box<dyn Scorer> = match config.variant {
        Variant::Okapi => Box::new(Okapi::new(index, config.k1, config.b)?),
        Variant::Bm25L => Box::new(
            Bm25L::new(index, config.k1, config.b)?.with_delta(config.delta_or_default())?,
        ),
        Variant::Bm25Plus => Box::new(Bm25Plus::new(
            index,
            config.k1,
            config.b,
            config.delta_or_default(),
        )?),
    };
    Ok(scorer)
}

/// Index `corpus` under `config.ubiquitous_idf` and create the selected scorer.
pub fn build_scorer_for_corpus<I, S, T>(
    corpus: I,
    tokenizer: T,
    config: &ScorerConfig,
) -> Result<Box<dyn Scorer>, Bm25Error>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    T: Tokenizer + 'static,
{
    config.validate()?;
    let index = CorpusIndex::builder()
        .tokenizer(tokenizer)
        .ubiquitous_idf(config.ubiquitous_idf)
        .build(corpus)?;
    build_scorer(Arc::new(index), config)
}
