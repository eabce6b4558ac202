use std::collections::HashMap;

use bm25_core::{Bm25Error, Tokenizer, UbiquitousTermIdf};

use crate::idf::{inverse_document_frequency, IdfCache};

/// Corpus statistics shared by every BM25 variant.
///
/// Built once from raw documents and a tokenizer, then immutable apart from
/// the IDF cache, which only grows. Document IDs are positions in the input
/// corpus.
#[derive(Debug)]
pub struct CorpusIndex {
    /// Raw document text, returned by top-N queries.
    documents: Vec<String>,
    /// Token sequence per document
    tokens: Vec<Vec<String>>,
    /// Term frequency per document: doc_term_freqs[doc_id][term] = count
    doc_term_freqs: Vec<HashMap<String, usize>>,
    /// Token count per document
    doc_lengths: Vec<usize>,
    avg_doc_len: f64,
    /// Number of distinct documents containing each term
    doc_freq: HashMap<String, usize>,
    idf_cache: IdfCache,
    ubiquitous_idf: UbiquitousTermIdf,
}

impl CorpusIndex {
    /// Index `corpus` with `tokenizer` and the default IDF policy.
    pub fn new<I, S, T>(corpus: I, tokenizer: T) -> Result<Self, Bm25Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        T: Tokenizer + 'static,
    {
        Self::builder().tokenizer(tokenizer).build(corpus)
    }

    pub fn builder() -> CorpusIndexBuilder {
        CorpusIndexBuilder::default()
    }

    pub fn corpus_size(&self) -> usize {
        self.documents.len()
    }

    pub fn avg_doc_len(&self) -> f64 {
        self.avg_doc_len
    }

    pub fn doc_lengths(&self) -> &[usize] {
        &self.doc_lengths
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn document(&self, doc_id: usize) -> Option<&str> {
        self.documents.get(doc_id).map(String::as_str)
    }

    pub fn tokens(&self, doc_id: usize) -> Option<&[String]> {
        self.tokens.get(doc_id).map(Vec::as_slice)
    }

    /// Occurrences of `term` in document `doc_id`; 0 for unknown IDs.
    pub fn term_frequency(&self, doc_id: usize, term: &str) -> usize {
        self.doc_term_freqs
            .get(doc_id)
            .and_then(|freqs| freqs.get(term))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct documents containing `term`.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.doc_freq.len()
    }

    pub fn ubiquitous_idf(&self) -> UbiquitousTermIdf {
        self.ubiquitous_idf
    }

    /// Number of terms whose IDF has been computed so far.
    pub fn idf_cache_len(&self) -> usize {
        self.idf_cache.len()
    }

    /// Inverse document frequency of `term`, memoized on first request.
    pub fn idf(&self, term: &str) -> Result<f64, Bm25Error> {
        if term.is_empty() {
            return Err(Bm25Error::EmptyTerm);
        }

        Ok(self.idf_cache.get_or_insert_with(term, || {
            let doc_freq = self.document_frequency(term);
            let idf =
                inverse_document_frequency(doc_freq, self.corpus_size(), self.ubiquitous_idf);
            tracing::debug!(term = %term, doc_freq, idf, "computed idf");
            idf
        }))
    }

    pub(crate) fn check_doc_id(&self, doc_id: usize) -> Result<(), Bm25Error> {
        if doc_id >= self.corpus_size() {
            return Err(Bm25Error::InvalidDocumentId {
                id: doc_id,
                corpus_size: self.corpus_size(),
            });
        }
        Ok(())
    }
}

/// Builder for [`CorpusIndex`].
///
/// A tokenizer is required; building without one fails with
/// [`Bm25Error::NilTokenizer`].
#[derive(Default)]
pub struct CorpusIndexBuilder {
    tokenizer: Option<Box<dyn Tokenizer>>,
    ubiquitous_idf: UbiquitousTermIdf,
}

impl CorpusIndexBuilder {
    pub fn tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Some(Box::new(tokenizer));
        self
    }

    /// Choose the IDF given to terms that occur in every document.
    pub fn ubiquitous_idf(mut self, policy: UbiquitousTermIdf) -> Self {
        self.ubiquitous_idf = policy;
        self
    }

    /// Tokenize every document and accumulate corpus statistics.
    pub fn build<I, S>(self, corpus: I) -> Result<CorpusIndex, Bm25Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let documents: Vec<String> = corpus.into_iter().map(Into::into).collect();
        if documents.is_empty() {
            return Err(Bm25Error::EmptyCorpus);
        }
        let tokenizer = self.tokenizer.ok_or(Bm25Error::NilTokenizer)?;

        let mut tokens = Vec::with_capacity(documents.len());
        let mut doc_term_freqs = Vec::with_capacity(documents.len());
        let mut doc_lengths = Vec::with_capacity(documents.len());
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for (index, doc) in documents.iter().enumerate() {
            let doc_tokens = tokenizer.tokenize(doc);
            if doc_tokens.is_empty() {
                return Err(Bm25Error::EmptyTokenization { index });
            }

            let mut term_freq: HashMap<String, usize> = HashMap::new();
            for token in &doc_tokens {
                *term_freq.entry(token.clone()).or_insert(0) += 1;
            }

            // Each distinct term in this doc increments its document frequency once
            for term in term_freq.keys() {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }

            doc_lengths.push(doc_tokens.len());
            doc_term_freqs.push(term_freq);
            tokens.push(doc_tokens);
        }

        let total: usize = doc_lengths.iter().sum();
        let avg_doc_len = total as f64 / documents.len() as f64;

        tracing::info!(
            corpus_size = documents.len(),
            avg_doc_len,
            vocabulary = doc_freq.len(),
            "built corpus index"
        );

        Ok(CorpusIndex {
            documents,
            tokens,
            doc_term_freqs,
            doc_lengths,
            avg_doc_len,
            doc_freq,
            idf_cache: IdfCache::new(),
            ubiquitous_idf: self.ubiquitous_idf,
        })
    }
}
