use std::{iter::repeat_with, mem};

use crate::murmur::murmur3_32;

/// Default number of buckets for a freshly constructed map.
pub const DEFAULT_CAPACITY: usize = 16;
/// Default grow threshold on the entries-to-buckets ratio.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;
/// Shrink threshold: halve the table when the ratio drops below this.
const MIN_LOAD_FACTOR: f64 = 0.25;
/// Capacity never shrinks below this many buckets.
const FLOOR_CAPACITY: usize = 16;

/// An owned key-value pair stored in a collision chain.
#[derive(Debug, Clone)]
struct Entry<V> {
    /// The key, hashed to pick the chain that holds this entry.
    key: String,
    /// The value associated with the key.
    value: V,
}

/// A collision chain; entries keep their insertion order within the chain.
type Bucket<V> = Vec<Entry<V>>;

/// A separate-chaining hash table from string keys to values of type `V`.
///
/// Keys are placed by [`murmur3_32`] modulo the current capacity. The table
/// doubles when the entries-to-buckets ratio exceeds the configured load
/// factor and halves (never below 16 buckets) when the ratio falls under
/// 0.25, keeping point operations amortized O(1).
///
/// Note: this type is not thread-safe. Callers sharing a map across threads
/// must serialize all operations behind an external lock.
#[derive(Debug, Clone)]
pub struct BucketMap<V> {
    /// The buckets; `buckets.len()` is the current capacity, always positive.
    buckets: Vec<Bucket<V>>,
    /// Number of distinct keys currently stored.
    size: usize,
    /// Grow threshold, fixed at construction.
    load_factor: f64,
}

impl<V> Default for BucketMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> BucketMap<V> {
    /// Creates an empty map with the default capacity (16) and load factor (0.75).
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty map with the given capacity and the default load factor.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Creates an empty map with the given capacity and grow threshold.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or `load_factor` is not a positive number.
    /// A zero capacity would make every bucket lookup a modulo by zero, and a
    /// non-positive load factor would grow the table on every insertion.
    #[must_use]
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f64) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        assert!(load_factor > 0.0, "load factor must be positive");

        Self { buckets: empty_buckets(capacity), size: 0, load_factor }
    }

    /// Hashes a key exactly as the map does for bucket placement.
    ///
    /// Exposed for introspection and testing; equivalent to [`murmur3_32`].
    #[must_use]
    pub fn hash(key: &str) -> u32 {
        murmur3_32(key)
    }

    /// Computes the bucket index for a key against the current capacity.
    fn bucket_index(&self, key: &str) -> usize {
        (Self::hash(key) as usize) % self.buckets.len()
    }

    /// Shared access to the bucket at `index`.
    ///
    /// The index comes from [`Self::bucket_index`] and is always in range; a
    /// violation means the hash or modulo logic is defective, so this asserts
    /// rather than returning an error.
    fn bucket(&self, index: usize) -> &Bucket<V> {
        assert!(
            index < self.buckets.len(),
            "bucket index {index} out of bounds for capacity {}",
            self.buckets.len()
        );
        &self.buckets[index]
    }

    /// Mutable access to the bucket at `index`, with the same bounds contract
    /// as [`Self::bucket`].
    fn bucket_mut(&mut self, index: usize) -> &mut Bucket<V> {
        assert!(
            index < self.buckets.len(),
            "bucket index {index} out of bounds for capacity {}",
            self.buckets.len()
        );
        &mut self.buckets[index]
    }

    /// Inserts a key-value pair, overwriting the value in place if the key is
    /// already present.
    ///
    /// An overwrite leaves the size unchanged; a new key increments it and may
    /// trigger a single grow to keep the load ratio within bounds.
    ///
    /// # Panics
    ///
    /// Panics on an internal bucket-index invariant violation; this signals a
    /// defect in the hashing logic, not a caller error.
    pub fn set(&mut self, key: &str, value: V) {
        let index = self.bucket_index(key);
        let bucket = self.bucket_mut(index);

        for entry in bucket.iter_mut() {
            if entry.key == key {
                entry.value = value;
                return;
            }
        }

        bucket.push(Entry { key: key.to_owned(), value });
        self.size = self.size.saturating_add(1);
        self.grow_if_over_load_factor();
    }

    /// Returns a reference to the value stored for `key`, or `None` if the key
    /// is absent. Absence is an expected outcome, never an error.
    ///
    /// # Panics
    ///
    /// Panics on an internal bucket-index invariant violation.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        let index = self.bucket_index(key);
        self.bucket(index)
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Returns true if `key` is currently stored in the map.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes the entry for `key` if present, preserving the order of the
    /// remaining entries in its chain.
    ///
    /// Returns true if an entry was removed; a successful removal may trigger
    /// a single shrink, never below 16 buckets. Returns false (and mutates
    /// nothing) if the key is absent.
    ///
    /// # Panics
    ///
    /// Panics on an internal bucket-index invariant violation.
    pub fn remove(&mut self, key: &str) -> bool {
        let index = self.bucket_index(key);
        let bucket = self.bucket_mut(index);

        let Some(position) = bucket.iter().position(|entry| entry.key == key) else {
            return false;
        };

        bucket.remove(position);
        self.size = self.size.saturating_sub(1);
        self.shrink_if_below_min_load_factor();
        true
    }

    /// Returns the number of distinct keys currently stored, in O(1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Discards all entries, keeping the current capacity (a map grown to 32
    /// buckets stays at 32 after clearing).
    pub fn clear(&mut self) {
        let capacity = self.buckets.len();
        self.buckets = empty_buckets(capacity);
        self.size = 0;
    }

    /// Returns the number of buckets currently allocated.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the grow threshold fixed at construction.
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns the current entries-to-buckets ratio.
    #[must_use]
    pub fn load(&self) -> f64 {
        self.load_ratio()
    }

    /// Returns an iterator over `(key, value)` pairs in bucket-index order,
    /// insertion order within each bucket.
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: &self.buckets, bucket_index: 0, entry_index: 0 }
    }

    /// Current entries-to-buckets ratio; the denominator is never zero.
    #[allow(clippy::cast_precision_loss)]
    fn load_ratio(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Doubles the capacity when the load ratio strictly exceeds the
    /// threshold. Invoked once per new-key insertion, so a single resize
    /// always restores the bound.
    fn grow_if_over_load_factor(&mut self) {
        if self.load_ratio() > self.load_factor {
            self.resize(self.buckets.len().saturating_mul(2));
        }
    }

    /// Halves the capacity (floored at 16 buckets) when the load ratio drops
    /// below the shrink threshold. Skipped entirely at or below the floor and
    /// for an empty map.
    fn shrink_if_below_min_load_factor(&mut self) {
        if self.buckets.len() <= FLOOR_CAPACITY || self.size == 0 {
            return;
        }

        if self.load_ratio() < MIN_LOAD_FACTOR {
            let new_capacity = (self.buckets.len() / 2).max(FLOOR_CAPACITY);
            self.resize(new_capacity);
        }
    }

    /// Replaces the bucket array with `new_capacity` empty buckets and rehashes
    /// every entry against the new capacity. Entries are moved, not cloned, so
    /// values keep their identity across a resize.
    fn resize(&mut self, new_capacity: usize) {
        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_capacity));

        for entry in old_buckets.into_iter().flatten() {
            let index = (Self::hash(&entry.key) as usize) % new_capacity;
            self.bucket_mut(index).push(entry);
        }
    }
}

impl<V> Extend<(String, V)> for BucketMap<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(&key, value);
        }
    }
}

impl<V> FromIterator<(String, V)> for BucketMap<V> {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

/// Allocates `capacity` empty buckets without requiring `V: Clone`.
fn empty_buckets<V>(capacity: usize) -> Vec<Bucket<V>> {
    repeat_with(Vec::new).take(capacity).collect()
}

/// Borrowed iterator over the map's entries in bucket-index order.
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// The bucket array being walked.
    buckets: &'a [Bucket<V>],
    /// Index of the bucket currently being drained.
    bucket_index: usize,
    /// Position within the current bucket.
    entry_index: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(bucket) = self.buckets.get(self.bucket_index) {
            if let Some(entry) = bucket.get(self.entry_index) {
                self.entry_index = self.entry_index.saturating_add(1);
                return Some((entry.key.as_str(), &entry.value));
            }
            self.bucket_index = self.bucket_index.saturating_add(1);
            self.entry_index = 0;
        }
        None
    }
}
