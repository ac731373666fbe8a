//! Fast hash map and hash set type aliases.
//!
//! This module provides type aliases for [`FxHashMap`] and [`FxHashSet`] from
//! the `rustc-hash` crate. These use the Fx hash algorithm which is
//! approximately 2x faster than the standard library's `HashMap` and
//! `HashSet` for string keys.
//!
//! # Why `FxHash`?
//!
//! The Fx hash function was originally developed for the Rust compiler
//! (`rustc`). It's optimized for:
//!
//! - String and path keys (common in this codebase)
//! - Small to medium-sized hash tables
//! - Cases where denial-of-service resistance is not required (internal use only)
//!
//! # Examples
//!
//! ```
//! use sd_core::{FxHashMap, fx_hash_map};
//!
//! let mut map: FxHashMap<String, i32> = fx_hash_map();
//! map.insert("key".to_owned(), 42);
//! ```

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
///
/// This is faster than the standard library's `HashMap` for string keys
/// but does not provide denial-of-service resistance.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// A [`HashSet`](std::collections::HashSet) using the Fx hash algorithm.
///
/// This is faster than the standard library's `HashSet` for string keys
/// but does not provide denial-of-service resistance.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;

/// The hasher used by [`FxHashMap`] and [`FxHashSet`].
pub type FxBuildHasher = rustc_hash::FxBuildHasher;

/// Creates a new empty [`FxHashMap`].
///
/// This is equivalent to `FxHashMap::default()` but can be more ergonomic
/// in some contexts due to type inference.
///
/// # Examples
///
/// ```
/// use sd_core::fx_hash_map;
///
/// let map: sd_core::FxHashMap<String, i32> = fx_hash_map();
/// assert!(map.is_empty());
/// ```
#[inline]
#[must_use]
pub fn fx_hash_map<K, V>() -> FxHashMap<K, V> {
    FxHashMap::default()
}

/// Creates a new [`FxHashSet`] with the specified capacity.
///
/// The set will be able to hold at least `capacity` elements without
/// reallocating.
///
/// # Examples
///
/// ```
/// use sd_core::fx_hash_set_with_capacity;
///
/// let set: sd_core::FxHashSet<String> = fx_hash_set_with_capacity(100);
/// assert!(set.capacity() >= 100);
/// ```
#[inline]
#[must_use]
pub fn fx_hash_set_with_capacity<V>(capacity: usize) -> FxHashSet<V> {
    FxHashSet::with_capacity_and_hasher(capacity, FxBuildHasher::default())
}
