use bm25_core::UbiquitousTermIdf;
use dashmap::DashMap;

/// Memoized inverse document frequencies, keyed by term.
///
/// Entries are only ever inserted, never invalidated. Concurrent misses on
/// the same term may both compute and insert; the value is a pure function
/// of the immutable corpus statistics, so the last write is identical to the
/// first.
#[derive(Debug, Default)]
pub struct IdfCache {
    values: DashMap<String, f64>,
}

impl IdfCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, term: &str) -> Option<f64> {
        self.values.get(term).map(|entry| *entry)
    }

    /// Return the cached IDF for `term`, computing and storing it on a miss.
    pub fn get_or_insert_with<F>(&self, term: &str, compute: F) -> f64
    where
        F: FnOnce() -> f64,
    {
        if let Some(idf) = self.get(term) {
            return idf;
        }
        let idf = compute();
        self.values.insert(term.to_string(), idf);
        idf
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// IDF of a term found in `doc_freq` of `corpus_size` documents.
///
/// Unseen terms get `0.0`. Terms present in every document follow `policy`.
/// Everything else uses the `+1` smoothed form
/// `ln((N - df + 0.5) / (df + 0.5) + 1)`, which is strictly positive.
pub fn inverse_document_frequency(
    doc_freq: usize,
    corpus_size: usize,
    policy: UbiquitousTermIdf,
) -> f64 {
    if doc_freq == 0 {
        return 0.0;
    }

    let df = doc_freq as f64;
    if doc_freq == corpus_size {
        return match policy {
            UbiquitousTermIdf::Reference => (0.5 / (df + 0.5)).ln(),
            UbiquitousTermIdf::Zero => 0.0,
        };
    }

    let n = corpus_size as f64;
    ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
}
