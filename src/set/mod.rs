//! The n-gram indexed set.
//!
//! [`NGramSet`] holds its members together with an inverted n-gram index and
//! answers similarity queries against them. Every mutation goes through
//! [`insert`](NGramSet::insert) and [`remove`](NGramSet::remove), so the index
//! always describes exactly the current members.

mod compare;
mod ops;

use std::collections::hash_set;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use ahash::{AHashMap, AHashSet};
use log::{debug, trace};

use crate::config::NGramSetConfig;
use crate::error::Result;
use crate::matcher::{items_sharing_ngrams, SimilarityCalculator};
use crate::ngram::{NGramGenerator, Split};
use crate::storage::{GramIndex, IndexMetrics, IndexMetricsStats, IndexStats};

pub use self::compare::compare;

/// Projects a member onto the string it is indexed under.
pub type KeyFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// A set that supports lookup by n-gram string similarity.
///
/// Members are unique by equality of the member itself; two members whose keys
/// are the same string are both kept. Iteration order is unspecified, and so
/// is the order of search results that have equal similarity.
///
/// The set has no internal locking. Share it across threads behind a lock.
pub struct NGramSet<T> {
    config: NGramSetConfig,
    key: KeyFn<T>,
    members: AHashSet<T>,
    index: GramIndex<T>,
    calculator: SimilarityCalculator,
    metrics: IndexMetrics,
}

impl<T> NGramSet<T>
where
    T: Eq + Hash + Clone + AsRef<str> + 'static,
{
    /// Creates an empty set indexing members by their own string value.
    pub fn new(config: NGramSetConfig) -> Result<Self> {
        Self::with_key(config, |item: &T| item.as_ref().to_string())
    }

    pub fn from_items<I: IntoIterator<Item = T>>(items: I, config: NGramSetConfig) -> Result<Self> {
        let mut set = Self::new(config)?;
        set.update(items);
        Ok(set)
    }
}

impl<T> NGramSet<T>
where
    T: Eq + Hash + Clone + 'static,
{
    /// Creates an empty set indexing members by `key(member)`.
    pub fn with_key<F>(config: NGramSetConfig, key: F) -> Result<Self>
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        config.validate()?;
        debug!("Creating n-gram set: {}", config.describe().replace('\n', " "));
        Ok(Self::build(config, Arc::new(key)))
    }

    pub fn from_items_with_key<I, F>(items: I, config: NGramSetConfig, key: F) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        let mut set = Self::with_key(config, key)?;
        set.update(items);
        Ok(set)
    }
}

impl<T: Eq + Hash + Clone> NGramSet<T> {
    // Callers guarantee `config` is valid
    fn build(config: NGramSetConfig, key: KeyFn<T>) -> Self {
        let generator = NGramGenerator::new(&config.generator);
        let calculator = SimilarityCalculator::new(generator.ngram_size(), &config.matcher);
        Self {
            config,
            key,
            members: AHashSet::new(),
            index: GramIndex::new(generator),
            calculator,
            metrics: IndexMetrics::new(),
        }
    }

    /// An empty set with the same configuration and key function.
    pub fn copy_empty(&self) -> Self {
        Self::build(self.config.clone(), Arc::clone(&self.key))
    }

    /// A new set with the same configuration and key function over `items`.
    pub fn copy_with<I: IntoIterator<Item = T>>(&self, items: I) -> Self {
        let mut set = self.copy_empty();
        set.update(items);
        set
    }

    /// A new set with the same configuration, key function and members.
    pub fn copy(&self) -> Self {
        self.copy_with(self.members.iter().cloned())
    }

    pub fn config(&self) -> &NGramSetConfig {
        &self.config
    }

    pub fn threshold(&self) -> f64 {
        self.config.matcher.threshold
    }

    pub fn warp(&self) -> f64 {
        self.config.matcher.warp
    }

    /// Characters per n-gram.
    pub fn n(&self) -> usize {
        self.index.generator().ngram_size()
    }

    pub fn pad_len(&self) -> usize {
        self.index.generator().pad_len()
    }

    pub fn pad_char(&self) -> char {
        self.index.generator().pad_char()
    }

    /// The string `item` is indexed under.
    pub fn key(&self, item: &T) -> String {
        (self.key)(item)
    }

    pub fn pad(&self, text: &str) -> String {
        self.index.generator().pad(text)
    }

    /// Pads `text` and iterates over its n-grams.
    pub fn split(&self, text: &str) -> Split {
        self.index.generator().split(text)
    }

    /// Pads the key of `item` and iterates over its n-grams.
    pub fn split_item(&self, item: &T) -> Split {
        self.split(&self.key(item))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.members.contains(item)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.members.iter()
    }

    /// Adds `item` to the set and the index. Returns false if it was already present.
    pub fn insert(&mut self, item: T) -> bool {
        if self.members.contains(&item) {
            trace!("Skipping insert of existing member");
            return false;
        }
        let key = (self.key)(&item);
        self.index.insert(&item, &key);
        self.members.insert(item);
        self.metrics.increment_inserts();
        true
    }

    /// Removes `item` from the set and the index. Returns false if it was absent.
    pub fn remove(&mut self, item: &T) -> bool {
        if !self.members.remove(item) {
            return false;
        }
        self.index.remove(item);
        self.metrics.increment_removals();
        true
    }

    /// Same as [`remove`](Self::remove).
    pub fn discard(&mut self, item: &T) -> bool {
        self.remove(item)
    }

    pub fn clear(&mut self) {
        self.members.clear();
        self.index.clear();
    }

    /// Members sharing at least one n-gram with `query`, mapped to the number
    /// of n-grams shared.
    pub fn items_sharing_ngrams(&self, query: &str) -> AHashMap<&T, usize> {
        let padded = self.pad(query);
        items_sharing_ngrams(&self.index, &padded)
    }

    /// Members whose similarity to `query` is at least `threshold` (the
    /// configured threshold when None), by decreasing similarity.
    ///
    /// Members with equal similarity come back in no particular order.
    pub fn search(&self, query: &str, threshold: Option<f64>) -> Vec<(&T, f64)> {
        let threshold = threshold.unwrap_or(self.config.matcher.threshold);
        let padded = self.pad(query);
        let query_len = padded.chars().count();

        let shared = items_sharing_ngrams(&self.index, &padded);
        self.metrics.record_search(shared.len());

        let mut results: Vec<(&T, f64)> = shared
            .into_iter()
            .filter_map(|(item, samegrams)| {
                let candidate_len = self.index.padded_len(item)?;
                let similarity = self.calculator.score(query_len, candidate_len, samegrams);
                if similarity >= threshold {
                    Some((item, similarity))
                } else {
                    None
                }
            })
            .collect();
        results.sort_by(|a, b| b.1.total_cmp(&a.1));

        debug!("Search for {:?} returned {} matches at threshold {}", query, results.len(), threshold);
        results
    }

    /// Searches by the key of `item`.
    pub fn search_item(&self, item: &T, threshold: Option<f64>) -> Vec<(&T, f64)> {
        self.search(&self.key(item), threshold)
    }

    /// The most similar member, or None if nothing reaches the threshold.
    /// Among equally similar members the choice is unspecified.
    pub fn find(&self, query: &str, threshold: Option<f64>) -> Option<&T> {
        self.search(query, threshold).first().map(|(item, _)| *item)
    }

    pub fn find_item(&self, item: &T, threshold: Option<f64>) -> Option<&T> {
        self.find(&self.key(item), threshold)
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    pub fn metrics(&self) -> IndexMetricsStats {
        self.metrics.get_stats()
    }
}

impl<T: Eq + Hash + Clone> Clone for NGramSet<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            key: Arc::clone(&self.key),
            members: self.members.clone(),
            index: self.index.clone(),
            calculator: self.calculator,
            metrics: IndexMetrics::new(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for NGramSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NGramSet")
            .field("members", &self.members)
            .field("config", &self.config)
            .finish()
    }
}

impl<T: Eq + Hash + Clone> Extend<T> for NGramSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.update(items);
    }
}

impl<T> FromIterator<T> for NGramSet<T>
where
    T: Eq + Hash + Clone + AsRef<str> + 'static,
{
    /// Builds a set with the default configuration.
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut set = Self::build(
            NGramSetConfig::default(),
            Arc::new(|item: &T| item.as_ref().to_string()),
        );
        set.update(items);
        set
    }
}

impl<'a, T> IntoIterator for &'a NGramSet<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
