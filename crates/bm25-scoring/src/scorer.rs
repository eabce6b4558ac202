use bm25_core::Bm25Error;

use crate::index::CorpusIndex;
use crate::rank::{rank_top_n, ScoredDocument};

/// The query surface shared by every BM25 variant.
///
/// Implementors supply the corpus index and the per-term weight; validation,
/// IDF lookup and ranking are provided. Queries are pre-tokenized term
/// sequences. Duplicate terms count once per occurrence.
pub trait Scorer: Send + Sync {
    /// The index this scorer reads from.
    fn index(&self) -> &CorpusIndex;

    /// Short variant name, e.g. `"okapi"`.
    fn name(&self) -> &'static str;

    /// Weight of a term occurring `tf > 0` times in a document of length
    /// `doc_len`, before multiplication by the term's IDF.
    fn term_weight(&self, tf: f64, doc_len: f64, avg_doc_len: f64) -> f64;

    fn corpus_size(&self) -> usize {
        self.index().corpus_size()
    }

    fn avg_doc_len(&self) -> f64 {
        self.index().avg_doc_len()
    }

    fn doc_lengths(&self) -> &[usize] {
        self.index().doc_lengths()
    }

    fn idf(&self, term: &str) -> Result<f64, Bm25Error> {
        self.index().idf(term)
    }

    /// One score per document, in document-ID order.
    fn get_scores(&self, query: &[&str]) -> Result<Vec<f64>, Bm25Error> {
        let idfs = query_idfs(self, query)?;
        Ok((0..self.corpus_size())
            .map(|doc_id| score_document(self, query, &idfs, doc_id))
            .collect())
    }

    /// Scores for `doc_ids` only, in the order given.
    fn get_batch_scores(
        &self,
        query: &[&str],
        doc_ids: &[usize],
    ) -> Result<Vec<f64>, Bm25Error> {
        if query.is_empty() {
            return Err(Bm25Error::EmptyQuery);
        }
        if doc_ids.is_empty() {
            return Err(Bm25Error::EmptyDocumentIds);
        }
        for &doc_id in doc_ids {
            self.index().check_doc_id(doc_id)?;
        }

        let idfs = query_idfs(self, query)?;
        Ok(doc_ids
            .iter()
            .map(|&doc_id| score_document(self, query, &idfs, doc_id))
            .collect())
    }

    /// Text of the `n` best-scoring documents, best first.
    fn get_top_n(&self, query: &[&str], n: usize) -> Result<Vec<String>, Bm25Error> {
        Ok(self
            .get_top_n_scored(query, n)?
            .into_iter()
            .map(|doc| doc.text)
            .collect())
    }

    /// Like [`get_top_n`](Scorer::get_top_n), keeping IDs and scores.
    fn get_top_n_scored(
        &self,
        query: &[&str],
        n: usize,
    ) -> Result<Vec<ScoredDocument>, Bm25Error> {
        if query.is_empty() {
            return Err(Bm25Error::EmptyQuery);
        }
        if n == 0 {
            return Err(Bm25Error::InvalidN(n));
        }

        let scores = self.get_scores(query)?;
        let documents = self.index().documents();
        Ok(rank_top_n(&scores, n)
            .into_iter()
            .map(|id| ScoredDocument {
                id,
                score: scores[id],
                text: documents[id].clone(),
            })
            .collect())
    }
}

/// `1 - b + b * |d| / avgdl`
pub(crate) fn length_norm(b: f64, doc_len: f64, avg_doc_len: f64) -> f64 {
    1.0 - b + b * doc_len / avg_doc_len
}

fn query_idfs<S: Scorer + ?Sized>(scorer: &S, query: &[&str]) -> Result<Vec<f64>, Bm25Error> {
    if query.is_empty() {
        return Err(Bm25Error::EmptyQuery);
    }
    query.iter().map(|term| scorer.idf(term)).collect()
}

/// `doc_id` must already be checked against the corpus size.
fn score_document<S: Scorer + ?Sized>(
    scorer: &S,
    query: &[&str],
    idfs: &[f64],
    doc_id: usize,
) -> f64 {
    let index = scorer.index();
    debug_assert!(doc_id < index.corpus_size(), "unchecked document id {doc_id}");
    let doc_len = index.doc_lengths()[doc_id] as f64;
    let avg_doc_len = index.avg_doc_len();

    let mut score = 0.0;
    for (term, idf) in query.iter().zip(idfs) {
        let tf = index.term_frequency(doc_id, term);
        if tf == 0 {
            continue;
        }
        score += idf * scorer.term_weight(tf as f64, doc_len, avg_doc_len);
    }
    score
}
