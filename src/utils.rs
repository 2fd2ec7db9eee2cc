//! Snapshot helpers for [`BucketMap`].

use crate::BucketMap;

/// Extension trait providing flattened, owned snapshots of a map's contents.
///
/// Snapshots are independent copies: mutating the map afterwards never alters
/// a sequence that has already been returned. Ordering is bucket-index order,
/// insertion order within each bucket, and is only stable between mutations.
pub trait BucketMapExtensions<V> {
    /// Returns all keys as an owned `Vec`.
    fn keys(&self) -> Vec<String>;

    /// Returns all values as an owned `Vec`.
    fn values(&self) -> Vec<V>;

    /// Returns all `(key, value)` pairs as an owned `Vec`.
    fn entries(&self) -> Vec<(String, V)>;
}

impl<V> BucketMapExtensions<V> for BucketMap<V>
where
    V: Clone,
{
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.to_owned()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    fn entries(&self) -> Vec<(String, V)> {
        self.iter().map(|(key, value)| (key.to_owned(), value.clone())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshots_cover_all_entries() {
        let mut map = BucketMap::new();
        map.set("a", 1);
        map.set("b", 2);
        map.set("c", 3);

        let mut keys = map.keys();
        keys.sort();
        assert_eq!(keys, vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]);

        let mut values = map.values();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2, 3]);

        let mut entries = map.entries();
        entries.sort();
        assert_eq!(
            entries,
            vec![("a".to_owned(), 1), ("b".to_owned(), 2), ("c".to_owned(), 3)]
        );
    }

    #[test]
    fn test_snapshots_agree_with_iteration_order() {
        let mut map = BucketMap::new();
        map.set("apple", 1);
        map.set("banana", 2);
        map.set("carrot", 3);

        let from_iter: Vec<(String, i32)> =
            map.iter().map(|(k, v)| (k.to_owned(), *v)).collect();
        assert_eq!(map.entries(), from_iter);
    }

    #[test]
    fn test_snapshot_isolation() {
        let mut map = BucketMap::new();
        map.set("apple", 1);
        map.set("banana", 2);

        let before = map.entries();

        map.set("apple", 10);
        map.set("carrot", 3);
        map.remove("banana");

        // The earlier snapshot is a copy and must not see any of that.
        let mut sorted = before.clone();
        sorted.sort();
        assert_eq!(sorted, vec![("apple".to_owned(), 1), ("banana".to_owned(), 2)]);
    }

    #[test]
    fn test_empty_map_snapshots() {
        let map: BucketMap<i32> = BucketMap::new();
        assert!(map.keys().is_empty());
        assert!(map.values().is_empty());
        assert!(map.entries().is_empty());
    }
}
