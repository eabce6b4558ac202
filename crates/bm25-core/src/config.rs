use serde::{Deserialize, Serialize};

use crate::{validate_delta, validate_k1_b, validate_shift, Bm25Error};

/// Which member of the BM25 family to score with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Classic Okapi BM25.
    #[default]
    Okapi,
    /// BM25L: length-corrected term frequency, optionally shifted by `delta`.
    #[serde(rename = "bm25l")]
    Bm25L,
    /// BM25+: per-matched-term lower bound `delta`.
    #[serde(rename = "bm25plus")]
    Bm25Plus,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Okapi => "okapi",
            Variant::Bm25L => "bm25l",
            Variant::Bm25Plus => "bm25plus",
        }
    }
}

/// IDF assigned to a term that occurs in every document of the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum UbiquitousTermIdf {
    /// `ln(0.5 / (df + 0.5))`. Negative and independent of corpus size.
    #[default]
    Reference,
    /// Clamp to `0.0` so ubiquitous terms contribute nothing.
    Zero,
}

/// Parameters for building a scorer.
///
/// Every field has a default, so a partial JSON object such as
/// `{"variant": "bm25plus", "delta": 0.5}` deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct ScorerConfig {
    pub variant: Variant,
    /// Term saturation. Defaults to 1.5.
    pub k1: f64,
    /// Length normalization in `[0, 1]`. Defaults to 0.75.
    pub b: f64,
    /// BM25L shift or BM25+ lower bound. Ignored by Okapi. `None` picks
    /// the variant default from [`ScorerConfig::delta_or_default`].
    pub delta: Option<f64>,
    /// Applied when the index is built from this config.
    pub ubiquitous_idf: UbiquitousTermIdf,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Okapi,
            k1: 1.5,
            b: 0.75,
            delta: None,
            ubiquitous_idf: UbiquitousTermIdf::Reference,
        }
    }
}

impl ScorerConfig {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn with_k1(mut self, k1: f64) -> Self {
        self.k1 = k1;
        self
    }

    pub fn with_b(mut self, b: f64) -> Self {
        self.b = b;
        self
    }

    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = Some(delta);
        self
    }

    pub fn with_ubiquitous_idf(mut self, policy: UbiquitousTermIdf) -> Self {
        self.ubiquitous_idf = policy;
        self
    }

    /// The configured `delta`, or 0.0 for BM25L and 1.0 for BM25+.
    pub fn delta_or_default(&self) -> f64 {
        match (self.delta, self.variant) {
            (Some(delta), _) => delta,
            (None, Variant::Bm25Plus) => 1.0,
            (None, _) => 0.0,
        }
    }

    /// Apply the construction-time parameter rules for the selected variant.
    pub fn validate(&self) -> Result<(), Bm25Error> {
        validate_k1_b(self.k1, self.b)?;
        match self.variant {
            Variant::Okapi => Ok(()),
            Variant::Bm25L => validate_shift(self.delta_or_default()),
            Variant::Bm25Plus => validate_delta(self.delta_or_default()),
        }
    }
}
