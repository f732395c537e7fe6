use std::hash::Hash;
use ahash::AHashMap;
use log::trace;

use crate::storage::GramIndex;

/// Counts, for every member sharing at least one n-gram with the padded
/// query, how many n-grams they share.
///
/// Sharing follows multiset intersection: each occurrence of an n-gram in the
/// query can match one remaining occurrence in the member, so a gram seen
/// twice in the query but once in the member counts once. N-grams with no
/// bucket are skipped.
pub fn items_sharing_ngrams<'s, T>(index: &'s GramIndex<T>, padded_query: &str) -> AHashMap<&'s T, usize>
where
    T: Eq + Hash + Clone,
{
    let mut shared: AHashMap<&'s T, usize> = AHashMap::new();
    // Occurrences of each gram still unmatched, per member
    let mut remaining: AHashMap<&str, AHashMap<&'s T, usize>> = AHashMap::new();

    for gram in index.generator().ngrams(padded_query) {
        let bucket = match index.bucket(gram) {
            Some(bucket) => bucket,
            None => continue,
        };
        let allowance = remaining
            .entry(gram)
            .or_insert_with(|| bucket.iter().map(|(member, count)| (member, *count)).collect());

        for (member, left) in allowance.iter_mut() {
            if *left > 0 {
                *left -= 1;
                *shared.entry(*member).or_insert(0) += 1;
            }
        }
    }

    trace!("{} members share n-grams with {:?}", shared.len(), padded_query);
    shared
}
