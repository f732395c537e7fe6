use crate::config::NGramSetConfig;
use crate::error::Result;

use super::NGramSet;

impl NGramSet<String> {
    /// Similarity of `s1` to `s2` under `config`, or 0.0 if it falls below
    /// the configured threshold.
    pub fn compare(s1: &str, s2: &str, config: &NGramSetConfig) -> Result<f64> {
        let mut set = NGramSet::new(config.clone())?;
        set.insert(s1.to_string());
        Ok(set.search(s2, None).first().map_or(0.0, |(_, similarity)| *similarity))
    }

    /// Like [`compare`](Self::compare), but two absent strings are identical
    /// (1.0) and one absent string matches nothing (0.0).
    pub fn compare_opt(s1: Option<&str>, s2: Option<&str>, config: &NGramSetConfig) -> Result<f64> {
        match (s1, s2) {
            (Some(s1), Some(s2)) => Self::compare(s1, s2, config),
            (None, None) => Ok(1.0),
            _ => Ok(0.0),
        }
    }
}

/// Similarity of two strings under the default configuration.
pub fn compare(s1: &str, s2: &str) -> f64 {
    NGramSet::compare(s1, s2, &NGramSetConfig::default()).unwrap_or(0.0)
}
