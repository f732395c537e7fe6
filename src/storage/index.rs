// storage/index.rs

use std::hash::Hash;
use ahash::AHashMap;
use log::trace;

use crate::ngram::{NGramGenerator, PaddedKey};
use super::IndexStats;

/// Members containing one n-gram, with the number of times it occurs in each.
pub type Bucket<T> = AHashMap<T, usize>;

/// Inverted n-gram index.
///
/// `grams` maps every n-gram to the members whose padded key contains it and
/// `lengths` keeps each member's padded key. A member has an entry in a bucket
/// iff splitting its padded key produced that n-gram, and the stored count is
/// the exact number of occurrences. Buckets and entries are never left empty.
#[derive(Debug, Clone)]
pub struct GramIndex<T> {
    generator: NGramGenerator,
    grams: AHashMap<String, Bucket<T>>,
    lengths: AHashMap<T, PaddedKey>,
}

impl<T: Eq + Hash + Clone> GramIndex<T> {
    pub fn new(generator: NGramGenerator) -> Self {
        Self {
            generator,
            grams: AHashMap::new(),
            lengths: AHashMap::new(),
        }
    }

    pub fn generator(&self) -> &NGramGenerator {
        &self.generator
    }

    /// Indexes `item` under the n-grams of `key`. Returns false, leaving the
    /// index untouched, if the item is already present.
    pub fn insert(&mut self, item: &T, key: &str) -> bool {
        if self.lengths.contains_key(item) {
            return false;
        }
        let padded = PaddedKey::new(self.generator.pad(key));

        for gram in self.generator.ngrams(padded.as_str()) {
            match self.grams.get_mut(gram) {
                Some(bucket) => *bucket.entry(item.clone()).or_insert(0) += 1,
                None => {
                    let mut bucket = Bucket::new();
                    bucket.insert(item.clone(), 1);
                    self.grams.insert(gram.to_string(), bucket);
                }
            }
        }
        trace!("Indexed key {:?} ({} padded chars)", key, padded.char_len);

        self.lengths.insert(item.clone(), padded);
        true
    }

    /// Undoes [`insert`](Self::insert) using the padded key cached at insertion.
    pub fn remove(&mut self, item: &T) -> bool {
        let padded = match self.lengths.remove(item) {
            Some(padded) => padded,
            None => return false,
        };

        for gram in self.generator.ngrams(padded.as_str()) {
            // Repeated n-grams find their entry already gone
            if let Some(bucket) = self.grams.get_mut(gram) {
                bucket.remove(item);
                if bucket.is_empty() {
                    self.grams.remove(gram);
                }
            }
        }
        trace!("Removed key {:?} from index", padded.text);
        true
    }

    pub fn contains(&self, item: &T) -> bool {
        self.lengths.contains_key(item)
    }

    /// Length in characters of the member's padded key.
    pub fn padded_len(&self, item: &T) -> Option<usize> {
        self.lengths.get(item).map(|padded| padded.char_len)
    }

    pub fn padded_key(&self, item: &T) -> Option<&PaddedKey> {
        self.lengths.get(item)
    }

    pub fn bucket(&self, gram: &str) -> Option<&Bucket<T>> {
        self.grams.get(gram)
    }

    /// Occurrences of `gram` in the member's padded key, 0 if none.
    pub fn count(&self, gram: &str, item: &T) -> usize {
        self.grams
            .get(gram)
            .and_then(|bucket| bucket.get(item))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    pub fn clear(&mut self) {
        self.grams.clear();
        self.lengths.clear();
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            members: self.lengths.len(),
            distinct_ngrams: self.grams.len(),
            postings: self.grams.values().map(|bucket| bucket.len()).sum(),
            gram_occurrences: self.grams.values().flat_map(|bucket| bucket.values()).sum(),
        }
    }
}
