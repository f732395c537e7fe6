use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use log::trace;

/// Counts index operations for monitoring.
#[derive(Debug)]
pub struct IndexMetrics {
    insert_ops: AtomicU64,
    remove_ops: AtomicU64,
    search_ops: AtomicU64,
    candidates_scored: AtomicU64,
    start_time: Instant,
}

impl IndexMetrics {
    pub fn new() -> Self {
        Self {
            insert_ops: AtomicU64::new(0),
            remove_ops: AtomicU64::new(0),
            search_ops: AtomicU64::new(0),
            candidates_scored: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn increment_inserts(&self) {
        self.insert_ops.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_removals(&self) {
        self.remove_ops.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_search(&self, candidates: usize) {
        self.search_ops.fetch_add(1, Ordering::Relaxed);
        self.candidates_scored.fetch_add(candidates as u64, Ordering::Relaxed);
        trace!("Search recorded with {} candidates. Total searches: {}",
            candidates, self.search_ops.load(Ordering::Relaxed));
    }

    pub fn get_stats(&self) -> IndexMetricsStats {
        IndexMetricsStats {
            insert_operations: self.insert_ops.load(Ordering::Relaxed),
            remove_operations: self.remove_ops.load(Ordering::Relaxed),
            search_operations: self.search_ops.load(Ordering::Relaxed),
            candidates_scored: self.candidates_scored.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    pub fn reset(&self) {
        self.insert_ops.store(0, Ordering::Relaxed);
        self.remove_ops.store(0, Ordering::Relaxed);
        self.search_ops.store(0, Ordering::Relaxed);
        self.candidates_scored.store(0, Ordering::Relaxed);
    }
}

#[derive(Debug, Clone)]
pub struct IndexMetricsStats {
    pub insert_operations: u64,
    pub remove_operations: u64,
    pub search_operations: u64,
    pub candidates_scored: u64,
    pub uptime_seconds: u64,
}

impl IndexMetricsStats {
    /// Mean number of candidates scored per search
    pub fn candidates_per_search(&self) -> f64 {
        if self.search_operations == 0 {
            return 0.0;
        }
        self.candidates_scored as f64 / self.search_operations as f64
    }
}

impl Default for IndexMetrics {
    fn default() -> Self {
        Self::new()
    }
}
