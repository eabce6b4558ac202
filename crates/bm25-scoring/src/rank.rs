/// A ranked document with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDocument {
    pub id: usize,
    pub score: f64,
    pub text: String,
}

/// IDs of the `n` highest scores, best first.
///
/// The sort is stable, so equal scores keep ascending document-ID order.
/// NaN scores rank after every number. Asking for more than `scores.len()`
/// returns every ID.
pub fn rank_top_n(scores: &[f64], n: usize) -> Vec<usize> {
    let mut ranked: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();

    // Sort descending by score, NaN last
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or_else(|| a.1.is_nan().cmp(&b.1.is_nan()))
    });

    ranked.into_iter().take(n).map(|(id, _)| id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descending_order() {
        assert_eq!(rank_top_n(&[0.1, 0.9, 0.5], 3), vec![1, 2, 0]);
    }

    #[test]
    fn ties_keep_document_order() {
        assert_eq!(rank_top_n(&[0.5, 1.0, 0.5, 1.0, 0.0], 5), vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn nan_ranks_last() {
        assert_eq!(rank_top_n(&[0.2, f64::NAN, 0.9, 0.5], 4), vec![2, 3, 0, 1]);
        assert_eq!(
            rank_top_n(&[f64::NAN, 0.1, f64::NAN, 0.3], 4),
            vec![3, 1, 0, 2]
        );
        assert_eq!(rank_top_n(&[f64::NAN, 1.0], 1), vec![1]);
    }

    #[test]
    fn truncates_and_saturates() {
        assert_eq!(rank_top_n(&[0.3, 0.2, 0.1], 2), vec![0, 1]);
        assert_eq!(rank_top_n(&[0.3, 0.2], 10), vec![0, 1]);
    }
}
