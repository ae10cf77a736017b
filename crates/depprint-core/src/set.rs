//! Ordered, key-deduplicated record collection.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::record::{CoordinateKey, Keyed};

/// Records ordered ascending by [`CoordinateKey`], one record per key.
///
/// The first record inserted for a key is kept; later inserts with the same
/// key are ignored even when other fields (version, type) differ.
#[derive(Debug, Clone)]
pub struct KeyedSet<T> {
    entries: BTreeMap<CoordinateKey, T>,
}

impl<T: Keyed> KeyedSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert a record. Returns `false` if a record with the same key was
    /// already present, in which case the set is unchanged.
    pub fn insert(&mut self, record: T) -> bool {
        match self.entries.entry(record.key()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    /// Keep only the records matching the predicate.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.entries.retain(|_, record| keep(record));
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate records in key order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Consume the set into an ordered vector.
    pub fn into_vec(self) -> Vec<T> {
        self.entries.into_values().collect()
    }
}

impl<T: Keyed> Default for KeyedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> FromIterator<T> for KeyedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Keyed> Extend<T> for KeyedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl<T> IntoIterator for KeyedSet<T> {
    type Item = T;
    type IntoIter = std::collections::btree_map::IntoValues<CoordinateKey, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ArtifactRecord;

    #[test]
    fn test_first_insert_wins() {
        let mut set = KeyedSet::new();
        assert!(set.insert(ArtifactRecord::new("g", "a", "1.0", "compile")));
        assert!(!set.insert(ArtifactRecord::new("g", "a", "2.0", "compile")));

        let records = set.into_vec();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].version, "1.0");
    }

    #[test]
    fn test_ordered_by_group_then_artifact() {
        let set: KeyedSet<_> = vec![
            ArtifactRecord::new("org.b", "a", "1", "compile"),
            ArtifactRecord::new("org.a", "z", "1", "compile"),
            ArtifactRecord::new("org.a", "b", "1", "compile"),
        ]
        .into_iter()
        .collect();

        let keys: Vec<String> = set.iter().map(|r| r.key().to_string()).collect();
        assert_eq!(keys, vec!["org.a:b", "org.a:z", "org.b:a"]);
    }

    #[test]
    fn test_retain() {
        let mut set: KeyedSet<_> = vec![
            ArtifactRecord::new("g", "a", "1", "compile"),
            ArtifactRecord::new("g", "b", "1", "test"),
        ]
        .into_iter()
        .collect();

        set.retain(ArtifactRecord::is_compile);
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }
}
