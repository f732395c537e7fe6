use crate::config::MatcherConfig;

/// Warp values this close to 1.0 use the plain ratio.
pub const WARP_EPSILON: f64 = 1e-9;

/// Similarity of two n-gram multisets.
///
/// `samegrams` is the number of n-grams shared by both strings and `allgrams`
/// the number of distinct n-gram positions across them. With warp `e` and
/// `d = allgrams - samegrams` the score is `(a^e - d^e) / a^e`, which reduces
/// to `samegrams / allgrams` for `e == 1`. A non-positive `allgrams` scores 0.0.
pub fn similarity(samegrams: usize, allgrams: i64, warp: f64) -> f64 {
    if allgrams <= 0 {
        return 0.0;
    }
    let all = allgrams as f64;
    if (warp - 1.0).abs() < WARP_EPSILON {
        samegrams as f64 / all
    } else {
        let diff = all - samegrams as f64;
        let all_warped = all.powf(warp);
        (all_warped - diff.powf(warp)) / all_warped
    }
}

/// Turns shared n-gram counts into similarity scores for one index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityCalculator {
    ngram_size: usize,
    warp: f64,
}

impl SimilarityCalculator {
    pub fn new(ngram_size: usize, config: &MatcherConfig) -> Self {
        Self {
            ngram_size,
            warp: config.warp,
        }
    }

    pub fn warp(&self) -> f64 {
        self.warp
    }

    /// Distinct n-gram positions across a query and a candidate, given their
    /// padded lengths. Each padded string of length `l` has `l - N + 1`
    /// positions and the shared ones are counted once.
    pub fn allgrams(&self, query_padded_len: usize, candidate_padded_len: usize, samegrams: usize) -> i64 {
        query_padded_len as i64 + candidate_padded_len as i64
            - 2 * self.ngram_size as i64
            - samegrams as i64
            + 2
    }

    pub fn score(&self, query_padded_len: usize, candidate_padded_len: usize, samegrams: usize) -> f64 {
        let allgrams = self.allgrams(query_padded_len, candidate_padded_len, samegrams);
        similarity(samegrams, allgrams, self.warp)
    }
}
