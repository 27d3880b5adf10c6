//! Keyed snapshot diffing.
//!
//! Pure set arithmetic over two ordered key lists. Nothing here touches
//! payloads or animation state.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Result of comparing two snapshots by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDiff<K> {
    /// In the new snapshot only, in new-snapshot order.
    pub added: Vec<K>,
    /// In the previous snapshot only, in previous-snapshot order.
    pub removed: Vec<K>,
    /// In both, in new-snapshot order.
    pub retained: Vec<K>,
    /// Retained keys appear in a different relative order.
    pub reordered: bool,
}

impl<K> KeyDiff<K> {
    /// Same key set on both sides (order may differ).
    pub fn is_same_set(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Same keys in the same order.
    pub fn is_identical(&self) -> bool {
        self.is_same_set() && !self.reordered
    }
}

/// Drop duplicate keys, keeping each key's last occurrence at its own position.
///
/// Returns the de-duplicated keys and the keys that were duplicated.
pub fn dedupe_keep_last<K>(keys: &[K]) -> (Vec<K>, Vec<K>)
where
    K: Clone + Eq + Hash,
{
    let mut last_index: HashMap<&K, usize> = HashMap::with_capacity(keys.len());
    for (i, key) in keys.iter().enumerate() {
        last_index.insert(key, i);
    }

    if last_index.len() == keys.len() {
        return (keys.to_vec(), Vec::new());
    }

    let mut unique = Vec::with_capacity(last_index.len());
    let mut duplicates = Vec::new();
    for (i, key) in keys.iter().enumerate() {
        if last_index.get(key) == Some(&i) {
            unique.push(key.clone());
        } else {
            duplicates.push(key.clone());
        }
    }
    (unique, duplicates)
}

/// Diff two snapshots. Both must already be free of duplicates.
pub fn diff_keys<K>(previous: &[K], next: &[K]) -> KeyDiff<K>
where
    K: Clone + Eq + Hash,
{
    let previous_set: HashSet<&K> = previous.iter().collect();
    let next_set: HashSet<&K> = next.iter().collect();

    let mut added = Vec::new();
    let mut retained = Vec::new();
    for key in next {
        if previous_set.contains(key) {
            retained.push(key.clone());
        } else {
            added.push(key.clone());
        }
    }

    let removed: Vec<K> = previous
        .iter()
        .filter(|key| !next_set.contains(key))
        .cloned()
        .collect();

    // Retained keys in previous order vs new order
    let reordered = previous
        .iter()
        .filter(|key| next_set.contains(key))
        .ne(retained.iter());

    KeyDiff {
        added,
        removed,
        retained,
        reordered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_removed_retained() {
        let diff = diff_keys(&["a", "b", "c"], &["b", "d", "c"]);
        assert_eq!(diff.added, vec!["d"]);
        assert_eq!(diff.removed, vec!["a"]);
        assert_eq!(diff.retained, vec!["b", "c"]);
        assert!(!diff.reordered);
        assert!(!diff.is_same_set());
    }

    #[test]
    fn test_from_empty() {
        let diff = diff_keys::<&str>(&[], &["a", "b"]);
        assert_eq!(diff.added, vec!["a", "b"]);
        assert!(diff.removed.is_empty());
        assert!(diff.retained.is_empty());
    }

    #[test]
    fn test_reorder_is_same_set() {
        let diff = diff_keys(&["a", "b", "c"], &["c", "a", "b"]);
        assert!(diff.is_same_set());
        assert!(diff.reordered);
        assert!(!diff.is_identical());
    }

    #[test]
    fn test_identical() {
        let diff = diff_keys(&["a", "b"], &["a", "b"]);
        assert!(diff.is_identical());
    }

    #[test]
    fn test_removal_does_not_count_as_reorder() {
        let diff = diff_keys(&["a", "b", "c"], &["a", "c"]);
        assert!(!diff.reordered);
        assert_eq!(diff.removed, vec!["b"]);
    }

    #[test]
    fn test_dedupe_keeps_last_occurrence() {
        let (unique, dupes) = dedupe_keep_last(&["a", "b", "a", "c"]);
        assert_eq!(unique, vec!["b", "a", "c"]);
        assert_eq!(dupes, vec!["a"]);
    }

    #[test]
    fn test_dedupe_no_duplicates() {
        let (unique, dupes) = dedupe_keep_last(&["x", "y"]);
        assert_eq!(unique, vec!["x", "y"]);
        assert!(dupes.is_empty());
    }
}
