//! ngramset is a library for fuzzy string lookup using n-grams.
//! It provides a set whose members are indexed by the overlapping
//! fixed-width substrings of their keys, and ranks members by how many
//! n-grams they share with a query string.

// Module declarations
pub mod error;
pub mod ngram;
pub mod storage;
pub mod matcher;
pub mod config;
pub mod set;

// Re-exports
pub use error::{Error, Result};
pub use matcher::{similarity, SimilarityCalculator};
pub use ngram::NGramGenerator;
pub use set::{compare, KeyFn, NGramSet};
pub use storage::IndexStats;

// Re-export the config from config module
pub use config::NGramSetConfig;
