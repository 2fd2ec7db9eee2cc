//! # Bucket Map
//!
//! A separate-chaining hash table mapping string keys to arbitrary values,
//! with bucket placement driven by a 32-bit MurmurHash3 variant and automatic
//! capacity management that keeps the load factor within a target band.
//!
//! The table doubles its bucket count when the entries-to-buckets ratio rises
//! above the configured load factor (0.75 by default) and halves it, never
//! below 16 buckets, when the ratio falls under 0.25. Point operations stay
//! amortized O(1); a triggered resize rehashes every entry in O(n).
//!
//! ## Basic Usage
//!
//! ```rust
//! use bucketmap::BucketMap;
//!
//! let mut map = BucketMap::new();
//!
//! // Insert values
//! map.set("apple", "red");
//! map.set("banana", "yellow");
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&"red"));
//! assert!(map.contains_key("banana"));
//!
//! // Overwrite in place
//! map.set("apple", "green");
//! assert_eq!(map.get("apple"), Some(&"green"));
//! assert_eq!(map.len(), 2);
//!
//! // Remove values
//! assert!(map.remove("apple"));
//! assert_eq!(map.get("apple"), None);
//! ```
//!
//! ## Snapshots and Introspection
//!
//! ```rust
//! use bucketmap::{BucketMap, BucketMapExtensions};
//!
//! let mut map = BucketMap::new();
//! map.set("kite", 1);
//! map.set("lion", 2);
//!
//! // Owned snapshots are unaffected by later mutation.
//! let entries = map.entries();
//! map.remove("kite");
//! assert_eq!(entries.len(), 2);
//!
//! // The table exposes its geometry and hash for inspection.
//! assert_eq!(map.capacity(), 16);
//! assert_eq!(map.load_factor(), 0.75);
//! assert_eq!(BucketMap::<i32>::hash("kite"), bucketmap::murmur3_32("kite"));
//! ```
//!
//! The map is single-threaded by design: sharing one across threads requires
//! the caller to serialize every operation behind an external lock.

/// Module implementing the chained hash table and its resize policy.
mod bucket_map;
/// Module implementing the MurmurHash3 bucket-placement hash.
mod murmur;
/// Snapshot extension trait for the hash table.
mod utils;

pub use bucket_map::{BucketMap, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, Iter};
pub use murmur::murmur3_32;
pub use utils::BucketMapExtensions;
