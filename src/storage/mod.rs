// storage/mod.rs

pub mod index;
pub mod metrics;

use serde::{Serialize, Deserialize};

pub use self::index::{Bucket, GramIndex};
pub use self::metrics::{IndexMetrics, IndexMetricsStats};

/// Size of the inverted index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub members: usize,
    pub distinct_ngrams: usize,
    /// (n-gram, member) entries across all buckets
    pub postings: usize,
    /// Sum of all stored occurrence counts
    pub gram_occurrences: usize,
}

impl IndexStats {
    pub fn average_bucket_size(&self) -> f64 {
        if self.distinct_ngrams == 0 {
            return 0.0;
        }
        self.postings as f64 / self.distinct_ngrams as f64
    }
}
