// Set algebra expressed through insert and remove, so the index stays in step.

use std::hash::Hash;
use ahash::AHashSet;

use super::NGramSet;

impl<T: Eq + Hash + Clone> NGramSet<T> {
    /// Inserts every item (union in place).
    pub fn update<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.insert(item);
        }
    }

    /// Removes every member that appears in `other`.
    pub fn difference_update<'a, I>(&mut self, other: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        for item in other {
            self.remove(item);
        }
    }

    /// Keeps only the members that also appear in `other`.
    pub fn intersection_update<'a, I>(&mut self, other: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let other: AHashSet<&T> = other.into_iter().collect();
        let outside: Vec<T> = self
            .members
            .iter()
            .filter(|item| !other.contains(item))
            .cloned()
            .collect();
        for item in &outside {
            self.remove(item);
        }
    }

    /// Keeps the members that are in exactly one of `self` and `other`.
    pub fn symmetric_difference_update<I: IntoIterator<Item = T>>(&mut self, other: I) {
        // Dedup first so an item repeated in `other` is not toggled twice
        let other: AHashSet<T> = other.into_iter().collect();
        for item in other {
            if self.contains(&item) {
                self.remove(&item);
            } else {
                self.insert(item);
            }
        }
    }

    /// A new set holding the members of both sets.
    pub fn union<I: IntoIterator<Item = T>>(&self, other: I) -> Self {
        let mut set = self.copy();
        set.update(other);
        set
    }

    /// A new set holding the members of `self` not in `other`.
    pub fn difference<'a, I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut set = self.copy();
        set.difference_update(other);
        set
    }

    /// A new set holding the members of `self` that are also in `other`.
    pub fn intersection<'a, I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut set = self.copy();
        set.intersection_update(other);
        set
    }

    /// A new set holding the members in exactly one of `self` and `other`.
    pub fn symmetric_difference<I: IntoIterator<Item = T>>(&self, other: I) -> Self {
        let mut set = self.copy();
        set.symmetric_difference_update(other);
        set
    }
}
